//! Deserialisers for numeric columns the backend sometimes sends as strings.
//!
//! Laravel casts `DECIMAL` aggregates to strings (`"42.50"`) and echoes form
//! values back untouched, so `progress` and `difficulty` may arrive either
//! as JSON numbers or as numeric strings.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accepts `42`, `42.5` or `"42.50"`; `null` becomes `0.0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Numeric::Int(n)) => Ok(n as f64),
        Some(Numeric::Float(n)) => Ok(n),
        Some(Numeric::Text(s)) => s.trim().parse().map_err(D::Error::custom),
    }
}

/// Accepts `2` or `"2"`.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Numeric::deserialize(deserializer)? {
        Numeric::Int(n) => Ok(n),
        Numeric::Float(n) if n.fract() == 0.0 => Ok(n as i64),
        Numeric::Float(n) => Err(D::Error::custom(format!("expected an integer, got {n}"))),
        Numeric::Text(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

/// Accepts `3` or `"3"`; negative values are rejected.
pub fn id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = integer(deserializer)?;
    u64::try_from(n).map_err(|_| D::Error::custom(format!("expected a non-negative id, got {n}")))
}
