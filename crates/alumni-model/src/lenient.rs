//! Lenient deserializers for loosely typed backend fields.
//!
//! Form values were historically posted as strings, so numeric fields may come
//! back as `"150"` as easily as `150`. Optional fields may also arrive as an
//! explicit `null`. These helpers accept all of those shapes.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Null(()),
}

/// Deserialize an `f64` from a number, a numeric string, or null (as `0.0`).
pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => n,
        Loose::Text(s) => s.trim().parse().unwrap_or(0.0),
        Loose::Null(()) => 0.0,
    })
}

/// Deserialize a non-negative count from a number, a numeric string, or null.
pub fn u32_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64_from_any(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value.min(f64::from(u32::MAX)) as u32)
    } else {
        Ok(0)
    }
}

/// Deserialize a display string from a string, a number, or null.
///
/// Whole numbers render without a decimal point (`2019`, not `2019.0`).
pub fn string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) if n.fract() == 0.0 => format!("{n:.0}"),
        Loose::Number(n) => n.to_string(),
        Loose::Text(s) => s,
        Loose::Null(()) => String::new(),
    })
}

/// Deserialize any field whose explicit `null` means the same as an absent key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::f64_from_any")]
        amount: f64,
        #[serde(default, deserialize_with = "super::u32_from_any")]
        count: u32,
        #[serde(default, deserialize_with = "super::string_from_any")]
        year: String,
    }

    #[test]
    fn test_numbers_and_strings() {
        let p: Sample =
            serde_json::from_str(r#"{"amount":"12.5","count":3,"year":2019}"#).unwrap();
        assert_eq!(p.amount, 12.5);
        assert_eq!(p.count, 3);
        assert_eq!(p.year, "2019");
    }

    #[test]
    fn test_garbage_and_null_fall_back_to_zero() {
        let p: Sample =
            serde_json::from_str(r#"{"amount":"lots","count":null,"year":null}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.count, 0);
        assert_eq!(p.year, "");
    }

    #[test]
    fn test_negative_count_clamps() {
        let p: Sample = serde_json::from_str(r#"{"count":-4}"#).unwrap();
        assert_eq!(p.count, 0);
    }
}
