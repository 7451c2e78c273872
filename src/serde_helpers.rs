//! Serde helpers for loosely typed scraper fields
//!
//! The scraper emits argument defaults and enum values as whatever JSON
//! scalar the wiki page happened to contain (`"nil"`, `0`, `true`, `1.5`).
//! These helpers normalise them to the text that ends up in a completion.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Render a JSON value as display text
///
/// Strings are kept verbatim, numbers and booleans use their literal form.
/// `null` renders as nothing. Integral floats drop the fractional part so
/// `1.0` reads as `1`.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(render_number(number)),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn render_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{:.0}", float)
        }
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

/// Whether a value counts as "no value" for argument defaults
///
/// Empty strings, `false`, zero and `null` are all treated as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Deserialize any scalar into its rendered text
pub fn deserialize_rendered<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(render_value))
}

/// Deserialize an argument default, dropping blank values
pub fn deserialize_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(|v| !is_blank(v)).as_ref().and_then(render_value))
}
