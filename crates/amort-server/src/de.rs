//! Lenient deserializers for form-shaped request bodies.
//!
//! The consuming form UI posts its text-input state verbatim, so numeric
//! fields arrive either as JSON numbers or as numeric strings. These
//! helpers coerce the type only; range and semantic validation stays in
//! the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A numeric wire value: a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(serde_json::Number),
    Text(String),
}

impl Raw {
    fn decimal<E: serde::de::Error>(&self) -> Result<Decimal, E> {
        let text = match self {
            Raw::Number(number) => number.to_string(),
            Raw::Text(text) => text.trim().to_string(),
        };
        text.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| E::custom(format!("invalid decimal value: '{text}'")))
    }

    fn uint<E: serde::de::Error>(&self) -> Result<u32, E> {
        match self {
            Raw::Number(number) => number
                .as_u64()
                .and_then(|value| u32::try_from(value).ok())
                .ok_or_else(|| E::custom(format!("invalid integer value: '{number}'"))),
            Raw::Text(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("invalid integer value: '{text}'"))),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Raw::Text(text) if text.trim().is_empty())
    }
}

/// Deserializes a required decimal from a number or numeric string.
pub fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    Raw::deserialize(deserializer)?.decimal()
}

/// Deserializes an optional decimal; `null` and blank strings read as absent.
pub fn decimal_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error> {
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_blank() => Ok(None),
        Some(raw) => raw.decimal().map(Some),
    }
}

/// Deserializes a required unsigned integer from a number or numeric string.
pub fn uint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Raw::deserialize(deserializer)?.uint()
}
