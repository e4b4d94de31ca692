//! # Deep Equality on JSON Values
//!
//! Structural equality used by `enum`, `const`, and `uniqueItems`. Differs
//! from `serde_json`'s derived `PartialEq` in one respect: an integer and a
//! float compare equal when the float's fractional part is exactly zero and
//! the magnitudes agree, so `1` and `1.0` are the same value.

use serde_json::{Number, Value};

/// Recursive structural equality with integer–float cross-equality.
///
/// Objects compare by key set regardless of insertion order; arrays compare
/// element-wise.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(u, v)| deep_equal(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| deep_equal(v, w)))
        }
        _ => false,
    }
}

/// Numeric equality across the integer/float representations.
///
/// Same-representation pairs compare exactly; a mixed pair compares through
/// `f64`, which is equal precisely when the float is integral and matches.
fn number_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_values() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(false),
            json!(0),
            json!(1),
            json!(-3),
            json!(1.5),
            json!(2.0),
            json!(""),
            json!("a"),
            json!([1, 2, 3]),
            json!([1, [2, 3]]),
            json!({}),
            json!({"a": 1}),
            json!({"a": 1, "b": [true, null]}),
        ]
    }

    #[test]
    fn reflexive_over_sample_values() {
        for v in sample_values() {
            assert!(deep_equal(&v, &v), "value not equal to itself: {v}");
        }
    }

    #[test]
    fn symmetric_over_sample_pairs() {
        let values = sample_values();
        for a in &values {
            for b in &values {
                assert_eq!(deep_equal(a, b), deep_equal(b, a));
            }
        }
    }

    #[test]
    fn transitive_over_sample_triples() {
        let values = sample_values();
        for a in &values {
            for b in &values {
                for c in &values {
                    if deep_equal(a, b) && deep_equal(b, c) {
                        assert!(deep_equal(a, c), "transitivity broken: {a} {b} {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn integer_and_integral_float_are_equal() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(2.0), &json!(2)));
        assert!(!deep_equal(&json!(1), &json!(1.5)));
    }

    #[test]
    fn object_key_order_is_immaterial() {
        let a = serde_json::from_str::<Value>(r#"{"x": 1, "y": 2}"#).unwrap();
        let b = serde_json::from_str::<Value>(r#"{"y": 2, "x": 1}"#).unwrap();
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn differing_key_sets_are_unequal() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn arrays_compare_element_wise() {
        assert!(deep_equal(&json!([1, 2.0]), &json!([1.0, 2])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn kinds_never_cross_equal() {
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(""), &json!(null)));
        assert!(!deep_equal(&json!(1), &json!("1")));
    }
}
