//! Параметры командной строки.

use clap::{ArgAction, Parser, ValueEnum};

/// Поведение сеанса после ошибки в выражении.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Вывести ошибку и завершить сеанс.
    #[default]
    Stop,
    /// Вывести ошибку и ждать следующее выражение.
    Continue,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "roman-calculator", version)]
#[command(about = "Калькулятор арабских и римских чисел от 1 до 10")]
pub struct Config {
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Stop, help = "Что делать после ошибки")]
    pub on_error: ErrorPolicy,

    #[arg(
        long = "no-prompt",
        action = ArgAction::SetFalse,
        help = "Не выводить приглашение к вводу"
    )]
    pub prompt: bool,

    #[arg(short, long, help = "Подробный журнал в stderr")]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Stop,
            prompt: true,
            verbose: false,
        }
    }
}
