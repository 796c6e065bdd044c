//! Разобранное выражение и его вычисление.
//!
//! Выражение состоит ровно из одного оператора и двух операндов одной
//! системы счисления. Результат выводится в той же системе.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::expression::{Operator, Value};
//! use roman_calculator::parser::parse;
//!
//! assert_eq!(Operator::Div.apply(10, 3), 3);
//!
//! let expr = parse("V*V").unwrap();
//! assert_eq!(expr.evaluate(), Value::Roman("XXV".to_string()));
//! ```

use std::fmt::Display;

use crate::numeral::{arabic_to_roman, NumeralSystem, Operand};

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление с отбрасыванием дробной части.
    Div,
}

impl Operator {
    /// Все операторы в порядке поиска во входной строке.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Оператор по символу.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Применить операцию к операндам.
    ///
    /// Операнды выражения лежат в диапазоне 1..=10, поэтому ни
    /// переполнение, ни деление на ноль здесь невозможны.
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Результат вычисления в системе счисления операндов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Арабское целое.
    Arabic(i64),
    /// Римская запись.
    Roman(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic(n) => write!(f, "{n}"),
            Self::Roman(s) => write!(f, "{s}"),
        }
    }
}

/// Выражение `<операнд><оператор><операнд>`.
///
/// Оба операнда всегда в одной системе счисления: смешанные выражения
/// отклоняются при разборе.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    operator: Operator,
    left: Operand<'a>,
    right: Operand<'a>,
}

impl<'a> Expression<'a> {
    pub(crate) const fn new(operator: Operator, left: Operand<'a>, right: Operand<'a>) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }

    /// Оператор выражения.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// Левый операнд.
    #[must_use]
    pub const fn left(&self) -> Operand<'a> {
        self.left
    }

    /// Правый операнд.
    #[must_use]
    pub const fn right(&self) -> Operand<'a> {
        self.right
    }

    /// Система счисления выражения.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        self.left.system()
    }

    /// Вычислить значение выражения.
    ///
    /// Римские операнды переводятся в арабские, результат переводится
    /// обратно в римскую запись.
    #[must_use]
    pub fn evaluate(&self) -> Value {
        let result = self.operator.apply(self.left.value(), self.right.value());
        match self.system() {
            NumeralSystem::Arabic => Value::Arabic(result),
            NumeralSystem::Roman => Value::Roman(arabic_to_roman(result)),
        }
    }
}

impl Display for Expression<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.left.text(),
            self.operator,
            self.right.text()
        )
    }
}
