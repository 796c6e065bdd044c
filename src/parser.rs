//! Разбор строки вида `<операнд><оператор><операнд>`.
//!
//! Строка должна быть уже очищена от непечатаемых символов и пробелов.
//!
//! Правила:
//! 1. Во входной строке должен встретиться ровно один символ `+ - * /`.
//! 2. Строка делится по оператору на левый и правый операнды.
//! 3. Операнды — либо оба арабские `1`..`10`, либо оба римские `I`..`X`.
//! 4. Для римских `-` и `/` ранг левого операнда не может быть меньше
//!    ранга правого: у римских чисел нет нуля и отрицательных значений.
//!
//! # Примеры
//!
//! ```
//! use roman_calculator::parser::{parse, ParseError};
//!
//! let expr = parse("3+4").unwrap();
//! assert_eq!(expr.evaluate().to_string(), "7");
//!
//! assert_eq!(parse("5+5+5"), Err(ParseError::MultipleOperators { count: 2 }));
//! assert_eq!(parse("II-V"), Err(ParseError::NegativeRomanResult));
//! ```

use thiserror::Error;

use crate::expression::{Expression, Operator};
use crate::numeral::{NumeralSystem, Operand};

/// Ошибки, возникающие при разборе выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Во входной строке нет ни одного оператора.
    #[error("введённая строка не является математической операцией")]
    NoOperator,

    /// Операторов больше одного.
    #[error("калькулятор работает только для одного оператора. Вы ввели {count}")]
    MultipleOperators {
        /// Общее число вхождений операторов.
        count: usize,
    },

    /// Один операнд арабский, другой римский.
    #[error(
        "операнды в разных системах счисления.\n\
         Калькулятор умеет работать только в одной системе счисления одновременно."
    )]
    MixedNumeralSystems,

    /// Операнд вне диапазона 1..10 или не является числом.
    #[error(
        "недопустимые операнды.\n\
         Операндами могут быть только целые арабские и римские числа от 1 до 10."
    )]
    InvalidOperands,

    /// Римское вычитание или деление, где левый операнд меньше правого.
    #[error("результат меньше или равен 0. В римской системе нет отрицательных чисел")]
    NegativeRomanResult,
}

/// Находит единственный оператор во входной строке.
fn find_operator(input: &str) -> Result<Operator, ParseError> {
    let mut found = None;
    let mut count = 0;
    for op in input.chars().filter_map(Operator::from_symbol) {
        found = Some(op);
        count += 1;
    }

    let operator = found.ok_or(ParseError::NoOperator)?;
    if count > 1 {
        return Err(ParseError::MultipleOperators { count });
    }
    Ok(operator)
}

/// Разбирает строку в выражение.
///
/// # Ошибки
///
/// - [`ParseError::NoOperator`], если оператора нет.
/// - [`ParseError::MultipleOperators`], если операторов больше одного
///   (включая повтор одного и того же, как в `5+5+5`).
/// - [`ParseError::MixedNumeralSystems`] для `5+V`.
/// - [`ParseError::InvalidOperands`], если операнд пуст или вне таблиц.
/// - [`ParseError::NegativeRomanResult`] для римских `-` и `/`, когда
///   ранг левого операнда меньше ранга правого.
pub fn parse(input: &str) -> Result<Expression<'_>, ParseError> {
    let operator = find_operator(input)?;
    let (left, right) = input
        .split_once(operator.symbol())
        .ok_or(ParseError::NoOperator)?;

    match (Operand::parse(left), Operand::parse(right)) {
        (Some(left), Some(right)) if left.system() == right.system() => {
            // Сравнение рангов, а не знака результата: I/II отклоняется,
            // хотя деление дало бы ноль, а V-V пропускается.
            if left.system() == NumeralSystem::Roman
                && matches!(operator, Operator::Sub | Operator::Div)
                && left.rank() < right.rank()
            {
                return Err(ParseError::NegativeRomanResult);
            }
            Ok(Expression::new(operator, left, right))
        }
        (Some(_), Some(_)) => Err(ParseError::MixedNumeralSystems),
        _ => Err(ParseError::InvalidOperands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Value;

    // ─────────────────────────────────────────────────────────────────────────
    // Параметризованные тесты вычислений
    // ─────────────────────────────────────────────────────────────────────────

    macro_rules! eval_tests {
        ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    let expr = parse($input).unwrap_or_else(|e| {
                        panic!("ошибка разбора для '{}': {:?}", $input, e)
                    });
                    assert_eq!(expr.evaluate(), $expected, "ввод: '{}'", $input);
                }
            )*
        };
    }

    eval_tests! {
        // Арабские
        eval_add: "3+4" => Value::Arabic(7),
        eval_sub: "5-3" => Value::Arabic(2),
        eval_sub_negative: "3-5" => Value::Arabic(-2),
        eval_mul: "10*10" => Value::Arabic(100),
        eval_div_truncates: "10/3" => Value::Arabic(3),
        eval_div_to_zero: "1/10" => Value::Arabic(0),

        // Римские
        eval_roman_sub: "X-I" => Value::Roman("IX".into()),
        eval_roman_mul: "V*V" => Value::Roman("XXV".into()),
        eval_roman_add: "X+X" => Value::Roman("XX".into()),
        eval_roman_div: "X/III" => Value::Roman("III".into()),
        eval_roman_equal_sub: "V-V" => Value::Roman(String::new()),
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Тесты обработки ошибок
    // ─────────────────────────────────────────────────────────────────────────

    macro_rules! error_tests {
        ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(parse($input), Err($expected), "ввод: '{}'", $input);
                }
            )*
        };
    }

    error_tests! {
        error_empty: "" => ParseError::NoOperator,
        error_no_operator: "abc" => ParseError::NoOperator,
        error_single_number: "5" => ParseError::NoOperator,
        error_repeated_operator: "5+5+5" => ParseError::MultipleOperators { count: 2 },
        error_different_operators: "1+2*3" => ParseError::MultipleOperators { count: 2 },
        error_double_minus: "5--3" => ParseError::MultipleOperators { count: 2 },
        error_mixed_arabic_left: "5+V" => ParseError::MixedNumeralSystems,
        error_mixed_roman_left: "X*2" => ParseError::MixedNumeralSystems,
        error_unknown_operand: "abc+2" => ParseError::InvalidOperands,
        error_out_of_range: "11+1" => ParseError::InvalidOperands,
        error_zero: "0+1" => ParseError::InvalidOperands,
        error_roman_out_of_range: "XI+I" => ParseError::InvalidOperands,
        error_lowercase_roman: "v+v" => ParseError::InvalidOperands,
        error_empty_left: "+5" => ParseError::InvalidOperands,
        error_empty_right: "5+" => ParseError::InvalidOperands,
        error_operator_only: "*" => ParseError::InvalidOperands,
        error_roman_negative: "II-V" => ParseError::NegativeRomanResult,
        error_roman_div_less: "IV/V" => ParseError::NegativeRomanResult,
        // I/II дало бы ноль, но отклоняется по сравнению рангов.
        error_roman_div_rank_proxy: "I/II" => ParseError::NegativeRomanResult,
    }

    #[test]
    fn operator_detection() {
        assert_eq!(find_operator("X*V"), Ok(Operator::Mul));
        assert_eq!(find_operator("10/2"), Ok(Operator::Div));
        assert_eq!(find_operator("IV"), Err(ParseError::NoOperator));
        assert_eq!(
            find_operator("1+2-3*4/5"),
            Err(ParseError::MultipleOperators { count: 4 })
        );
    }

    #[test]
    fn rank_check_only_for_sub_and_div() {
        assert!(parse("I+X").is_ok());
        assert!(parse("I*X").is_ok());
        assert!(parse("1-10").is_ok());
        assert!(parse("1/10").is_ok());
    }

    #[test]
    fn parsed_structure() {
        let expr = parse("VIII/II").unwrap();
        assert_eq!(expr.operator(), Operator::Div);
        assert_eq!(expr.left().text(), "VIII");
        assert_eq!(expr.right().text(), "II");
        assert_eq!(expr.system(), NumeralSystem::Roman);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::MultipleOperators { count: 3 }.to_string(),
            "калькулятор работает только для одного оператора. Вы ввели 3"
        );
        assert!(ParseError::MixedNumeralSystems
            .to_string()
            .starts_with("операнды в разных системах счисления."));
    }
}
