//! Форматирование сумм в рупиях для формы закупки

use contracts::shared::number::parse_number;

/// Группирует разряды целой части указанным разделителем.
/// Значение округляется до целого.
///
/// ```
/// use frontend::shared::number_format::format_integer_grouped;
/// assert_eq!(format_integer_grouped(1234567.4, '.'), "1.234.567");
/// ```
pub fn format_integer_grouped(value: f64, separator: char) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Сумма в рупиях: `Rp 5.000`, `-Rp 1.500`. Дробная часть не выводится.
pub fn format_rupiah(value: f64) -> String {
    let grouped = format_integer_grouped(value, '.');
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-Rp {}", abs),
        None => format!("Rp {}", grouped),
    }
}

/// Значение строкового поля строки документа. Пустое, нулевое или
/// нечисловое значение отображается пустой строкой.
pub fn format_rupiah_field(raw: &str) -> String {
    let value = parse_number(raw);
    if value == 0.0 {
        String::new()
    } else {
        format_rupiah(value)
    }
}
