//! # roman_calculator
//!
//! Консольный калькулятор одной бинарной операции над числами от 1 до 10.
//!
//! Поддерживает:
//! - Арабские операнды `1`..`10` и римские `I`..`X`, по одной системе в выражении
//! - Операции: `+`, `-`, `*`, `/` (деление целочисленное)
//! - Вывод результата в системе счисления операндов
//!
//! # Пример использования
//!
//! ```
//! use roman_calculator::evaluate;
//!
//! assert_eq!(evaluate("3 + 4").unwrap().to_string(), "7");
//! assert_eq!(evaluate("X - I").unwrap().to_string(), "IX");
//! assert!(evaluate("5 + V").is_err());
//! ```

pub mod config;
pub mod expression;
pub mod logger;
pub mod numeral;
pub mod parser;
pub mod sanitize;

use std::io::{self, BufRead, Write};

use config::{Config, ErrorPolicy};
use expression::Value;
use parser::ParseError;
use sanitize::{sanitize, strip_spaces};

/// Приглашение к вводу.
pub const PROMPT: &str = "Введите выражение (или 'q' для выхода из программы): ";

/// Команда выхода.
pub const QUIT: &str = "q";

/// Причина завершения сеанса.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Введена команда `q`.
    Quit,
    /// Ввод закончился.
    Eof,
    /// Выражение с ошибкой при [`ErrorPolicy::Stop`].
    Error(ParseError),
}

/// Вычисляет строку ввода и возвращает результат.
///
/// Строка очищается от непечатаемых символов и пробелов, затем
/// разбирается и вычисляется.
///
/// # Ошибки
///
/// Возвращает [`ParseError`], если строка не является допустимым выражением.
///
/// # Примеры
///
/// ```
/// use roman_calculator::evaluate;
/// use roman_calculator::expression::Value;
///
/// assert_eq!(evaluate("10 / 3\n").unwrap(), Value::Arabic(3));
/// assert_eq!(evaluate("V * V").unwrap(), Value::Roman("XXV".to_string()));
/// ```
pub fn evaluate(input: &str) -> Result<Value, ParseError> {
    let line = strip_spaces(&sanitize(input));
    let expr = parser::parse(&line)?;
    tracing::debug!(%expr, system = %expr.system(), "выражение разобрано");
    Ok(expr.evaluate())
}

/// Запускает интерактивный сеанс калькулятора.
///
/// Читает выражения построчно из `input` и выводит `Результат: ...` или
/// `Ошибка: ...` в `output`. Сеанс заканчивается командой `q`, концом
/// ввода или, при [`ErrorPolicy::Stop`], первой ошибкой.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи. Байты, не
/// являющиеся UTF-8, ошибкой ввода не считаются: они заменяются на
/// `U+FFFD`, и строка отклоняется как выражение.
///
/// # Примеры
///
/// ```
/// use roman_calculator::config::Config;
/// use roman_calculator::{run, SessionEnd};
///
/// let config = Config { prompt: false, ..Config::default() };
/// let mut out = Vec::new();
/// let end = run("3+4\nq\n".as_bytes(), &mut out, &config).unwrap();
///
/// assert_eq!(end, SessionEnd::Quit);
/// assert_eq!(String::from_utf8(out).unwrap(), "Результат: 7\n");
/// ```
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &Config,
) -> io::Result<SessionEnd> {
    let mut buf = Vec::new();

    loop {
        if config.prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(SessionEnd::Eof);
        }
        let line = sanitize(&String::from_utf8_lossy(&buf));

        if line == QUIT {
            return Ok(SessionEnd::Quit);
        }

        match evaluate(&line) {
            Ok(value) => writeln!(output, "Результат: {value}")?,
            Err(e) => {
                writeln!(output, "Ошибка: {e}")?;
                tracing::debug!(input = %line, error = ?e, "выражение отклонено");
                if config.on_error == ErrorPolicy::Stop {
                    output.flush()?;
                    return Ok(SessionEnd::Error(e));
                }
            }
        }
        output.flush()?;
    }
}
