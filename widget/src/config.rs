// Copyright (c) 2024 The Botho Foundation

//! Caller-supplied roll settings.
//!
//! Hosts hand the duration bounds through from user-editable settings, so
//! the values arrive as whatever JSON happened to be stored: numbers,
//! numeric strings, or garbage. Coercion never fails; anything unusable
//! falls back to the defaults, and the hard clamp in `roulette_core::reel`
//! still applies afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback minimum spin duration, milliseconds.
pub const DEFAULT_MIN_ROLL_MS: i64 = 10_000;

/// Fallback maximum spin duration, milliseconds.
pub const DEFAULT_MAX_ROLL_MS: i64 = 16_000;

/// Free-form roll duration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollConfig {
    /// Shortest allowed spin, milliseconds. Any JSON value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_roll_duration: Option<Value>,

    /// Longest allowed spin, milliseconds. Any JSON value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_roll_duration: Option<Value>,
}

impl RollConfig {
    /// Explicit integer bounds, mostly for tests and embedding hosts.
    pub fn from_bounds(min_ms: i64, max_ms: i64) -> Self {
        Self {
            min_roll_duration: Some(Value::from(min_ms)),
            max_roll_duration: Some(Value::from(max_ms)),
        }
    }

    /// Coerced `(min, max)` bounds in milliseconds, before clamping.
    pub fn resolve(&self) -> (i64, i64) {
        (
            coerce_ms(self.min_roll_duration.as_ref(), DEFAULT_MIN_ROLL_MS),
            coerce_ms(self.max_roll_duration.as_ref(), DEFAULT_MAX_ROLL_MS),
        )
    }
}

/// Coerce one free-form value to milliseconds.
///
/// Numbers truncate toward zero; strings contribute their leading integer
/// prefix. Zero means "unset" and takes the fallback.
fn coerce_ms(value: Option<&Value>, fallback: i64) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => leading_int(s),
        _ => None,
    };

    match parsed {
        Some(0) | None => fallback,
        Some(ms) => ms,
    }
}

/// Leading optionally-signed integer prefix of a string, if any.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> RollConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_fields_take_defaults() {
        assert_eq!(config("{}").resolve(), (10_000, 16_000));
    }

    #[test]
    fn test_from_bounds_resolves_verbatim() {
        assert_eq!(RollConfig::from_bounds(12_000, 14_000).resolve(), (12_000, 14_000));
    }

    #[test]
    fn test_plain_numbers_pass_through() {
        let cfg = config(r#"{"minRollDuration": 12000, "maxRollDuration": 15000}"#);
        assert_eq!(cfg.resolve(), (12_000, 15_000));
    }

    #[test]
    fn test_floats_truncate() {
        let cfg = config(r#"{"minRollDuration": 12000.9, "maxRollDuration": 15999.1}"#);
        assert_eq!(cfg.resolve(), (12_000, 15_999));
    }

    #[test]
    fn test_numeric_strings_parse_by_prefix() {
        let cfg = config(r#"{"minRollDuration": " 12000ms ", "maxRollDuration": "15000"}"#);
        assert_eq!(cfg.resolve(), (12_000, 15_000));
    }

    #[test]
    fn test_garbage_falls_back_silently() {
        let cfg = config(r#"{"minRollDuration": "fast", "maxRollDuration": [1, 2]}"#);
        assert_eq!(cfg.resolve(), (10_000, 16_000));
    }

    #[test]
    fn test_zero_means_unset() {
        let cfg = config(r#"{"minRollDuration": 0, "maxRollDuration": "0"}"#);
        assert_eq!(cfg.resolve(), (10_000, 16_000));
    }

    #[test]
    fn test_negative_values_survive_coercion() {
        // The hard clamp in the planner handles these; coercion only maps
        // unusable values to defaults.
        let cfg = config(r#"{"minRollDuration": -200, "maxRollDuration": "-5"}"#);
        assert_eq!(cfg.resolve(), (-200, -5));
    }
}
