//! Очистка строки ввода перед разбором.

/// Удаляет из строки все непечатаемые символы (перевод строки, табуляцию,
/// управляющие коды, BOM и символы нулевой ширины). Обычный пробел
/// считается печатаемым и сохраняется.
///
/// # Примеры
///
/// ```
/// use roman_calculator::sanitize::sanitize;
///
/// assert_eq!(sanitize("3 + 4\r\n"), "3 + 4");
/// assert_eq!(sanitize("\tq\n"), "q");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_printable(c)).collect()
}

/// Удаляет все пробелы.
#[must_use]
pub fn strip_spaces(input: &str) -> String {
    input.replace(' ', "")
}

/// Невидимые символы форматирования (категория Cf) и области частного
/// использования.
const INVISIBLE: &[(char, char)] = &[
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{0890}', '\u{0891}'),
    ('\u{08E2}', '\u{08E2}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{E000}', '\u{F8FF}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
    ('\u{110BD}', '\u{110BD}'),
    ('\u{110CD}', '\u{110CD}'),
    ('\u{13430}', '\u{1343F}'),
    ('\u{1BCA0}', '\u{1BCA3}'),
    ('\u{1D173}', '\u{1D17A}'),
    ('\u{E0001}', '\u{E0001}'),
    ('\u{E0020}', '\u{E007F}'),
    ('\u{F0000}', '\u{10FFFF}'),
];

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || INVISIBLE.iter().any(|&(lo, hi)| (lo..=hi).contains(&c)))
}
