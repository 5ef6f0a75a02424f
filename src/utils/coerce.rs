//! Numeric coercions applied where the document stores integers as JSON numbers.
//!
//! Authoring tools occasionally write integral fields as `3.0`; these helpers
//! accept any JSON number and truncate toward zero.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Truncates toward zero, saturating at the `i32` bounds. NaN maps to zero.
pub fn truncate_to_i32(value: f32) -> i32 {
    value.trunc() as i32
}

struct TruncatingIntVisitor;

impl<'de> Visitor<'de> for TruncatingIntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::custom(format!("integer {value} is too large")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
        Ok(value.trunc() as i64)
    }
}

/// Deserializes a non-negative count or index, truncating fractional values.
pub fn deserialize_truncated_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(TruncatingIntVisitor)?;
    usize::try_from(value).map_err(|_| {
        de::Error::invalid_value(
            de::Unexpected::Signed(value),
            &"a non-negative integer",
        )
    })
}

/// Like [`deserialize_truncated_usize`] for optional fields.
pub fn deserialize_optional_truncated_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = serde::Deserialize::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let raw = deserialize_truncated_usize(value).map_err(de::Error::custom)?;
            u32::try_from(raw).map(Some).map_err(de::Error::custom)
        }
    }
}
