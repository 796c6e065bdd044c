//! Системы счисления: таблица допустимых операндов и перевод между
//! арабской и римской записью.
//!
//! # Пример
//!
//! ```
//! use roman_calculator::numeral::{arabic_to_roman, roman_to_arabic, NumeralSystem, Operand};
//!
//! assert_eq!(roman_to_arabic("IX"), Some(9));
//! assert_eq!(arabic_to_roman(25), "XXV");
//!
//! let operand = Operand::parse("VII").unwrap();
//! assert_eq!(operand.system(), NumeralSystem::Roman);
//! assert_eq!(operand.value(), 7);
//! ```

use std::fmt::Display;

/// Допустимые арабские операнды в порядке возрастания.
pub const ARABIC: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// Допустимые римские операнды. Позиция в таблице совпадает с позицией
/// арабского эквивалента в [`ARABIC`] и служит рангом числа.
pub const ROMAN: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Пары «значение — символ» для жадного перевода в римскую запись,
/// от большего к меньшему.
const ROMAN_DIGITS: [(i64, &str); 9] = [
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Система счисления операнда.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Арабские цифры: `1`..`10`.
    Arabic,
    /// Римские цифры: `I`..`X`.
    Roman,
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "арабская"),
            Self::Roman => write!(f, "римская"),
        }
    }
}

fn position(table: &[&str], token: &str) -> Option<usize> {
    table.iter().position(|&entry| entry == token)
}

/// Ранг римской цифры: её позиция в [`ROMAN`].
#[must_use]
pub fn rank(token: &str) -> Option<usize> {
    position(&ROMAN, token)
}

/// Переводит одну из десяти канонических римских цифр в арабское число.
///
/// Возвращает `None` для любой другой строки, в том числе для записей
/// в нижнем регистре и чисел больше `X`.
#[must_use]
pub fn roman_to_arabic(token: &str) -> Option<i64> {
    rank(token).and_then(|i| ARABIC[i].parse().ok())
}

/// Переводит неотрицательное число в римскую запись жадным
/// вычитательным алгоритмом.
///
/// Ноль и отрицательные числа дают пустую строку.
///
/// # Примеры
///
/// ```
/// use roman_calculator::numeral::arabic_to_roman;
///
/// assert_eq!(arabic_to_roman(4), "IV");
/// assert_eq!(arabic_to_roman(100), "C");
/// assert_eq!(arabic_to_roman(0), "");
/// ```
#[must_use]
pub fn arabic_to_roman(value: i64) -> String {
    let mut rest = value;
    let mut out = String::new();
    for &(digit, symbol) in &ROMAN_DIGITS {
        while rest >= digit {
            out.push_str(symbol);
            rest -= digit;
        }
    }
    out
}

/// Проверенный операнд: значение от 1 до 10 в одной из систем счисления.
///
/// Создаётся только через [`Operand::parse`], поэтому значение всегда
/// лежит в допустимом диапазоне.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<'a> {
    text: &'a str,
    system: NumeralSystem,
    value: i64,
}

impl<'a> Operand<'a> {
    /// Распознаёт операнд. Возвращает `None`, если строка не входит
    /// ни в одну из таблиц.
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let (system, value) = match roman_to_arabic(text) {
            Some(value) => (NumeralSystem::Roman, value),
            None => {
                position(&ARABIC, text)?;
                (NumeralSystem::Arabic, text.parse().ok()?)
            }
        };
        Some(Self {
            text,
            system,
            value,
        })
    }

    /// Исходная запись операнда.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Система счисления операнда.
    #[must_use]
    pub const fn system(&self) -> NumeralSystem {
        self.system
    }

    /// Значение операнда, от 1 до 10.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Позиция операнда в таблице своей системы счисления. Таблицы
    /// выровнены, поэтому для римского операнда совпадает с [`rank`].
    #[must_use]
    pub const fn rank(&self) -> usize {
        (self.value - 1) as usize
    }
}
