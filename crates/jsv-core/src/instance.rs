//! # Instance Typing
//!
//! The [`InstanceType`] enumeration mirrors the seven type names a schema's
//! `type` keyword may declare. Classification of a concrete value and the
//! satisfaction test are kept separate: classification reports the value's
//! runtime JSON kind, while satisfaction additionally applies the 2020-12
//! numeric subtyping rules (an integer satisfies `number`; a float with a
//! zero fractional part satisfies `integer`).

use std::fmt;

use serde_json::Value;

/// One of the seven instance types a schema may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceType {
    /// The JSON `null` value.
    Null,
    /// A JSON boolean.
    Boolean,
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// Any JSON number, including integers.
    Number,
    /// A JSON number with no fractional part.
    Integer,
    /// A JSON string.
    String,
}

impl InstanceType {
    /// Classify a JSON value by its runtime kind.
    ///
    /// A number backed by an integer representation classifies as
    /// [`InstanceType::Integer`]; any float classifies as
    /// [`InstanceType::Number`] even when its fractional part is zero.
    /// Subtyping is applied by [`InstanceType::satisfied_by`], not here.
    pub fn of(value: &Value) -> InstanceType {
        match value {
            Value::Null => InstanceType::Null,
            Value::Bool(_) => InstanceType::Boolean,
            Value::Object(_) => InstanceType::Object,
            Value::Array(_) => InstanceType::Array,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    InstanceType::Integer
                } else {
                    InstanceType::Number
                }
            }
            Value::String(_) => InstanceType::String,
        }
    }

    /// Look up an instance type by its schema keyword spelling.
    pub fn from_name(name: &str) -> Option<InstanceType> {
        match name {
            "null" => Some(InstanceType::Null),
            "boolean" => Some(InstanceType::Boolean),
            "object" => Some(InstanceType::Object),
            "array" => Some(InstanceType::Array),
            "number" => Some(InstanceType::Number),
            "integer" => Some(InstanceType::Integer),
            "string" => Some(InstanceType::String),
            _ => None,
        }
    }

    /// The schema keyword spelling of this instance type.
    pub fn name(self) -> &'static str {
        match self {
            InstanceType::Null => "null",
            InstanceType::Boolean => "boolean",
            InstanceType::Object => "object",
            InstanceType::Array => "array",
            InstanceType::Number => "number",
            InstanceType::Integer => "integer",
            InstanceType::String => "string",
        }
    }

    /// Whether the given value satisfies this declared type.
    ///
    /// Applies the numeric subtyping rules of the 2020-12 draft: any integer
    /// satisfies `number`, and a float whose fractional part is exactly zero
    /// satisfies `integer`.
    pub fn satisfied_by(self, value: &Value) -> bool {
        match self {
            InstanceType::Null => value.is_null(),
            InstanceType::Boolean => value.is_boolean(),
            InstanceType::Object => value.is_object(),
            InstanceType::Array => value.is_array(),
            InstanceType::String => value.is_string(),
            InstanceType::Number => value.is_number(),
            InstanceType::Integer => match value {
                Value::Number(n) => {
                    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(is_integral)
                }
                _ => false,
            },
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a float has a fractional part of exactly zero.
pub fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classification_reports_runtime_kind() {
        assert_eq!(InstanceType::of(&json!(null)), InstanceType::Null);
        assert_eq!(InstanceType::of(&json!(true)), InstanceType::Boolean);
        assert_eq!(InstanceType::of(&json!({})), InstanceType::Object);
        assert_eq!(InstanceType::of(&json!([])), InstanceType::Array);
        assert_eq!(InstanceType::of(&json!(42)), InstanceType::Integer);
        assert_eq!(InstanceType::of(&json!(4.5)), InstanceType::Number);
        assert_eq!(InstanceType::of(&json!("x")), InstanceType::String);
    }

    #[test]
    fn integer_satisfies_number() {
        assert!(InstanceType::Number.satisfied_by(&json!(42)));
        assert!(InstanceType::Number.satisfied_by(&json!(-7)));
    }

    #[test]
    fn integral_float_satisfies_integer() {
        assert!(InstanceType::Integer.satisfied_by(&json!(5.0)));
        assert!(!InstanceType::Integer.satisfied_by(&json!(5.5)));
    }

    #[test]
    fn non_numbers_satisfy_neither_numeric_type() {
        assert!(!InstanceType::Number.satisfied_by(&json!("42")));
        assert!(!InstanceType::Integer.satisfied_by(&json!(true)));
    }

    #[test]
    fn name_round_trips() {
        for ty in [
            InstanceType::Null,
            InstanceType::Boolean,
            InstanceType::Object,
            InstanceType::Array,
            InstanceType::Number,
            InstanceType::Integer,
            InstanceType::String,
        ] {
            assert_eq!(InstanceType::from_name(ty.name()), Some(ty));
        }
        assert_eq!(InstanceType::from_name("float"), None);
    }
}
