//! Разбор числовых значений, пришедших из полей ввода или от API.

use serde::{Deserialize, Deserializer, Serializer};

/// Разбирает строку поля ввода в число.
///
/// Пустые, нечисловые и бесконечные значения дают `0.0`; функция никогда
/// не паникует.
///
/// ```
/// use contracts::shared::number::parse_number;
/// assert_eq!(parse_number(" 15000 "), 15000.0);
/// assert_eq!(parse_number("abc"), 0.0);
/// ```
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Представление числа для хранения в строковом поле формы ("45000", "2.5").
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Десериализатор для цен: бэкенд может отдавать decimal-колонки строкой
/// ("15000.00") или числом. `null` и мусор превращаются в `0.0`.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => parse_number(&s),
        None => 0.0,
    })
}

/// Граница, до которой целое значение `f64` точно представимо как `i64`
const MAX_EXACT_WHOLE: f64 = 9.0e15;

/// Сериализатор для количеств и сумм: целые значения уходят как JSON-целые
/// (`5`, а не `5.0`), дробные как есть.
pub fn serialize_whole_as_int<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_WHOLE {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
