//! Generic field validation: each resource declares a table of
//! [`FieldSpec`] entries and one routine evaluates them against a decoded
//! JSON payload. Every field is required; violations carry the reason
//! string reported back to the client.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::ModelError;

/// Wire date format used by campaign date fields.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Accepts http(s) URLs and base64 data URIs.
pub static PICTURE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://[^\s/$.?#].[^\s]*|data:[\w+/]+;base64,[^\s]+)$").expect("picture url pattern")
});

pub static LETTERS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("letters pattern"));

/// Letters, whitespace and common punctuation (, . ' -).
pub static LETTERS_AND_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s,.'-]+$").expect("letters and punctuation pattern"));

/// Letters, whitespace, commas, periods and parentheses.
pub static LETTERS_PUNCT_PARENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s,.()]+$").expect("letters and parentheses pattern"));

/// One validation rule. Each variant carries the client-facing reason
/// reported when the value violates it.
#[derive(Debug)]
pub enum Rule {
    NotEmpty(&'static str),
    MinLen(usize, &'static str),
    MaxLen(usize, &'static str),
    NoDigits(&'static str),
    Matches(&'static Lazy<Regex>, &'static str),
    OneOf(&'static [&'static str], &'static str),
    /// Must parse as an integer and be at least the given minimum.
    /// Messages: (not a number, below minimum).
    IntAtLeast(i64, &'static str, &'static str),
    /// Must parse as a `MM-DD-YYYY` date.
    Date(&'static str),
    /// List field: requires at least N entries. Accepts a JSON array or a
    /// comma-separated string.
    MinEntries(usize, &'static str),
}

#[derive(Debug)]
pub struct FieldSpec {
    /// Wire name of the field in the JSON payload.
    pub name: &'static str,
    /// Human-readable label used in "is required" messages.
    pub label: &'static str,
    pub rules: &'static [Rule],
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Validate every declared field of `payload`. Stops at the first failure.
pub fn validate_fields(payload: &Map<String, Value>, fields: &[FieldSpec]) -> Result<(), ModelError> {
    for field in fields {
        check_field(field, payload.get(field.name))?;
    }
    Ok(())
}

fn check_field(field: &FieldSpec, value: Option<&Value>) -> Result<(), ModelError> {
    let Some(value) = value else {
        return Err(required(field));
    };
    if value.is_null() {
        return Err(required(field));
    }
    for rule in field.rules {
        apply_rule(field, rule, value)?;
    }
    Ok(())
}

fn apply_rule(field: &FieldSpec, rule: &Rule, value: &Value) -> Result<(), ModelError> {
    match rule {
        Rule::NotEmpty(msg) => match value {
            Value::String(s) if !s.trim().is_empty() => Ok(()),
            Value::Array(items) if !items.is_empty() => Ok(()),
            _ => fail(msg),
        },
        Rule::MinLen(min, msg) => {
            let s = text(field, value)?;
            if s.chars().count() < *min {
                return fail(msg);
            }
            Ok(())
        }
        Rule::MaxLen(max, msg) => {
            let s = text(field, value)?;
            if s.chars().count() > *max {
                return fail(msg);
            }
            Ok(())
        }
        Rule::NoDigits(msg) => {
            let s = text(field, value)?;
            if s.chars().any(|c| c.is_ascii_digit()) {
                return fail(msg);
            }
            Ok(())
        }
        Rule::Matches(pattern, msg) => {
            let s = text(field, value)?;
            if !pattern.is_match(s.trim()) {
                return fail(msg);
            }
            Ok(())
        }
        Rule::OneOf(options, msg) => {
            let s = text(field, value)?;
            if !options.contains(&s.trim()) {
                return fail(msg);
            }
            Ok(())
        }
        Rule::IntAtLeast(min, nan_msg, range_msg) => {
            let s = text(field, value)?;
            let Ok(parsed) = s.trim().parse::<i64>() else {
                return fail(nan_msg);
            };
            if parsed < *min {
                return fail(range_msg);
            }
            Ok(())
        }
        Rule::Date(msg) => {
            let s = text(field, value)?;
            if parse_date(s).is_none() {
                return fail(msg);
            }
            Ok(())
        }
        Rule::MinEntries(min, msg) => {
            let count = match value {
                Value::Array(items) => items.len(),
                Value::String(s) => s.split(',').filter(|part| !part.trim().is_empty()).count(),
                _ => 0,
            };
            if count < *min {
                return fail(msg);
            }
            Ok(())
        }
    }
}

fn text<'a>(field: &FieldSpec, value: &'a Value) -> Result<&'a str, ModelError> {
    value.as_str().ok_or_else(|| required(field))
}

fn required(field: &FieldSpec) -> ModelError {
    ModelError::Validation(format!("{} is required.", field.label))
}

fn fail(msg: &str) -> Result<(), ModelError> {
    Err(ModelError::Validation(msg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static SPEC: FieldSpec = FieldSpec {
        name: "named",
        label: "Name",
        rules: &[Rule::NotEmpty("Name must not be empty")],
    };

    fn payload(value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("named".into(), value);
        map
    }

    #[test]
    fn missing_field_reports_label() {
        let err = validate_fields(&Map::new(), std::slice::from_ref(&SPEC)).unwrap_err();
        assert_eq!(err, ModelError::Validation("Name is required.".into()));
    }

    #[test]
    fn blank_string_fails_not_empty() {
        let err = validate_fields(&payload(json!("   ")), std::slice::from_ref(&SPEC)).unwrap_err();
        assert_eq!(err, ModelError::Validation("Name must not be empty".into()));
    }

    #[test]
    fn non_string_value_reports_required() {
        let err = validate_fields(&payload(json!(7)), std::slice::from_ref(&SPEC)).unwrap_err();
        assert_eq!(err, ModelError::Validation("Name must not be empty".into()));
    }

    #[test]
    fn min_entries_accepts_arrays_and_comma_strings() {
        static LIST: FieldSpec = FieldSpec {
            name: "named",
            label: "Entries",
            rules: &[Rule::MinEntries(2, "Entries must always have two or more selections.")],
        };
        assert!(validate_fields(&payload(json!(["a", "b"])), std::slice::from_ref(&LIST)).is_ok());
        assert!(validate_fields(&payload(json!("Mordai, Vex")), std::slice::from_ref(&LIST)).is_ok());
        assert!(validate_fields(&payload(json!("Mordai")), std::slice::from_ref(&LIST)).is_err());
        assert!(validate_fields(&payload(json!(["a"])), std::slice::from_ref(&LIST)).is_err());
    }

    #[test]
    fn int_at_least_distinguishes_messages() {
        static LEVEL: FieldSpec = FieldSpec {
            name: "named",
            label: "Level",
            rules: &[Rule::IntAtLeast(1, "Level must be a number.", "Level must be 1 or higher.")],
        };
        let nan = validate_fields(&payload(json!("abc")), std::slice::from_ref(&LEVEL)).unwrap_err();
        assert_eq!(nan, ModelError::Validation("Level must be a number.".into()));
        let low = validate_fields(&payload(json!("0")), std::slice::from_ref(&LEVEL)).unwrap_err();
        assert_eq!(low, ModelError::Validation("Level must be 1 or higher.".into()));
        assert!(validate_fields(&payload(json!("20")), std::slice::from_ref(&LEVEL)).is_ok());
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        static NOTE: FieldSpec = FieldSpec {
            name: "named",
            label: "Note",
            rules: &[
                Rule::MinLen(5, "Note must be at least 5 characters long"),
                Rule::MaxLen(10, "Note must be no longer than 10 characters."),
            ],
        };
        // 10 accented characters, 20 bytes: within both bounds.
        assert!(validate_fields(&payload(json!("éèêëàâîïôû")), std::slice::from_ref(&NOTE)).is_ok());
        let err = validate_fields(&payload(json!("éèêë")), std::slice::from_ref(&NOTE)).unwrap_err();
        assert_eq!(err, ModelError::Validation("Note must be at least 5 characters long".into()));
        let err =
            validate_fields(&payload(json!("éèêëàâîïôûé")), std::slice::from_ref(&NOTE)).unwrap_err();
        assert_eq!(err, ModelError::Validation("Note must be no longer than 10 characters.".into()));
    }

    #[test]
    fn date_rule_enforces_wire_format() {
        static DATE: FieldSpec = FieldSpec {
            name: "named",
            label: "Start Date",
            rules: &[Rule::Date("Invalid start date format. Use MM-DD-YYYY.")],
        };
        assert!(validate_fields(&payload(json!("03-15-2024")), std::slice::from_ref(&DATE)).is_ok());
        assert!(validate_fields(&payload(json!("2024-03-15")), std::slice::from_ref(&DATE)).is_err());
        assert!(validate_fields(&payload(json!("13-40-2024")), std::slice::from_ref(&DATE)).is_err());
    }

    #[test]
    fn picture_url_pattern_accepts_http_and_data_uris() {
        assert!(PICTURE_URL.is_match("https://example.com/dragon.png"));
        assert!(PICTURE_URL.is_match("data:image/png;base64,iVBORw0KGgo"));
        assert!(!PICTURE_URL.is_match("not a url"));
    }
}
