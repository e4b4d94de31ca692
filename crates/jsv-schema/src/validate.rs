//! # Instance Validation
//!
//! Given an instance value and a schema index, iterates the record's
//! [`KeywordSet`](crate::KeywordSet) in dispatch order, invokes each present
//! keyword's validate handler, and short-circuits on the first failure. The
//! result is exactly one error kind per call.
//!
//! Applicator handlers recurse through [`validate_value`] on child indices.
//! `properties` propagates the child's own failure kind (so a failing nested
//! `minimum` surfaces as `Minimum`); the remaining applicators report their
//! own kind, which names the keyword responsible for descending.

use serde_json::Value;

use jsv_core::{deep_equal, SchemaError};

use crate::arena::{Context, SchemaIndex};
use crate::keyword::{SchemaKeyword, KEYWORD_TABLE};
use crate::schema::Schema;

/// Validate an instance given as JSON text.
pub fn validate_str(
    text: &str,
    root: SchemaIndex,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let value: Value = serde_json::from_str(text)?;
    validate_value(&value, root, ctx)
}

/// Validate a parsed instance value against the schema at `root`.
///
/// Requires that [`resolve_refs`](crate::resolve_refs) has already run on
/// the context; `$ref` records are validated through their fused fields.
pub fn validate_value(
    value: &Value,
    root: SchemaIndex,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let schema = ctx.schema(root);
    if schema.is_bool_schema {
        return if schema.bool_schema_value {
            Ok(())
        } else {
            Err(SchemaError::BoolSchemaFalse)
        };
    }
    for keyword in schema.keywords.iter() {
        if let Some(validate) = KEYWORD_TABLE[keyword as usize].validate {
            validate(value, schema, ctx)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Type, enum, const
// ---------------------------------------------------------------------------

pub(crate) fn validate_type(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    if schema.types.iter().any(|t| t.satisfied_by(value)) {
        Ok(())
    } else {
        Err(SchemaError::Type)
    }
}

pub(crate) fn validate_enum(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    if schema.enum_values.iter().any(|e| deep_equal(value, e)) {
        Ok(())
    } else {
        Err(SchemaError::Enum)
    }
}

pub(crate) fn validate_const(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(expected) = &schema.const_value else {
        return Ok(());
    };
    if deep_equal(value, expected) {
        Ok(())
    } else {
        Err(SchemaError::Const)
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

// String lengths count Unicode code points, not bytes.

pub(crate) fn validate_max_length(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::String(s) = value else {
        return Ok(());
    };
    if s.chars().count() as u64 > schema.max_length {
        return Err(SchemaError::MaxLength);
    }
    Ok(())
}

pub(crate) fn validate_min_length(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::String(s) = value else {
        return Ok(());
    };
    if (s.chars().count() as u64) < schema.min_length {
        return Err(SchemaError::MinLength);
    }
    Ok(())
}

pub(crate) fn validate_pattern(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::String(s) = value else {
        return Ok(());
    };
    let Some(regex) = &schema.pattern else {
        return Ok(());
    };
    if regex.is_match(s) {
        Ok(())
    } else {
        Err(SchemaError::Pattern)
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

// Non-numbers always pass; integers are compared through f64 promotion.

pub(crate) fn validate_exclusive_maximum(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(n) = value.as_f64() else {
        return Ok(());
    };
    if n >= schema.exclusive_maximum {
        return Err(SchemaError::ExclusiveMaximum);
    }
    Ok(())
}

pub(crate) fn validate_exclusive_minimum(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(n) = value.as_f64() else {
        return Ok(());
    };
    if n <= schema.exclusive_minimum {
        return Err(SchemaError::ExclusiveMinimum);
    }
    Ok(())
}

pub(crate) fn validate_maximum(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(n) = value.as_f64() else {
        return Ok(());
    };
    if n > schema.maximum {
        return Err(SchemaError::Maximum);
    }
    Ok(())
}

pub(crate) fn validate_minimum(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(n) = value.as_f64() else {
        return Ok(());
    };
    if n < schema.minimum {
        return Err(SchemaError::Minimum);
    }
    Ok(())
}

/// Exact integer arithmetic when both sides are integral; otherwise the
/// floating quotient must have a fractional part of exactly zero.
pub(crate) fn validate_multiple_of(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(n) = value.as_f64() else {
        return Ok(());
    };
    let divisor = schema.multiple_of;
    if let Some(i) = value.as_i64() {
        if divisor != 0.0 && divisor.fract() == 0.0 && divisor.abs() <= i64::MAX as f64 {
            return if i % (divisor as i64) == 0 {
                Ok(())
            } else {
                Err(SchemaError::MultipleOf)
            };
        }
    }
    if (n / divisor).fract() == 0.0 {
        Ok(())
    } else {
        Err(SchemaError::MultipleOf)
    }
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

pub(crate) fn validate_required(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    for name in &schema.required {
        if !map.contains_key(name) {
            return Err(SchemaError::Required);
        }
    }
    Ok(())
}

pub(crate) fn validate_dependent_required(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    for (trigger, names) in &schema.dependent_required {
        if !map.contains_key(trigger) {
            continue;
        }
        for name in names {
            if !map.contains_key(name) {
                return Err(SchemaError::DependentRequired);
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_max_properties(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    if map.len() as u64 > schema.max_properties {
        return Err(SchemaError::MaxProperties);
    }
    Ok(())
}

pub(crate) fn validate_min_properties(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    if (map.len() as u64) < schema.min_properties {
        return Err(SchemaError::MinProperties);
    }
    Ok(())
}

/// Validate each named property present in the instance against its child
/// subschema. Properties are not implicitly required; an absent key is
/// simply not descended into. The child's own failure kind propagates.
pub(crate) fn validate_properties(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    for &child in &schema.properties_children {
        if let Some(nested) = map.get(&ctx.schema(child).name) {
            validate_value(nested, child, ctx)?;
        }
    }
    Ok(())
}

/// Whether an instance key is claimed by `properties` or
/// `patternProperties`, and is therefore not "additional".
fn property_is_claimed(key: &str, schema: &Schema, ctx: &Context) -> bool {
    if schema.keywords.contains(SchemaKeyword::Properties)
        && schema
            .properties_children
            .iter()
            .any(|&child| ctx.schema(child).name == key)
    {
        return true;
    }
    schema.keywords.contains(SchemaKeyword::PatternProperties)
        && schema.pattern_regexes.iter().any(|r| r.is_match(key))
}

pub(crate) fn validate_additional_properties(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    let Some(target) = schema.additional_properties else {
        return Ok(());
    };
    for (key, nested) in map {
        if property_is_claimed(key, schema, ctx) {
            continue;
        }
        if validate_value(nested, target, ctx).is_err() {
            return Err(SchemaError::AdditionalProperties);
        }
    }
    Ok(())
}

pub(crate) fn validate_pattern_properties(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    for (regex, &child) in schema
        .pattern_regexes
        .iter()
        .zip(&schema.pattern_properties)
    {
        for (key, nested) in map {
            if regex.is_match(key) && validate_value(nested, child, ctx).is_err() {
                return Err(SchemaError::PatternProperties);
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_property_names(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    let Some(target) = schema.property_names else {
        return Ok(());
    };
    for key in map.keys() {
        let name = Value::String(key.clone());
        if validate_value(&name, target, ctx).is_err() {
            return Err(SchemaError::PropertyNames);
        }
    }
    Ok(())
}

/// For each trigger property present in the instance, the instance as a
/// whole must validate against the corresponding dependent schema.
pub(crate) fn validate_dependent_schemas(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    for &child in &schema.dependent_schemas {
        if !map.contains_key(&ctx.schema(child).name) {
            continue;
        }
        if validate_value(value, child, ctx).is_err() {
            return Err(SchemaError::DependentSchemas);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

pub(crate) fn validate_max_items(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Ok(());
    };
    if items.len() as u64 > schema.max_items {
        return Err(SchemaError::MaxItems);
    }
    Ok(())
}

pub(crate) fn validate_min_items(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Ok(());
    };
    if (items.len() as u64) < schema.min_items {
        return Err(SchemaError::MinItems);
    }
    Ok(())
}

pub(crate) fn validate_unique_items(
    value: &Value,
    schema: &Schema,
    _ctx: &Context,
) -> Result<(), SchemaError> {
    if !schema.unique_items {
        return Ok(());
    }
    let Value::Array(items) = value else {
        return Ok(());
    };
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if deep_equal(a, b) {
                return Err(SchemaError::UniqueItems);
            }
        }
    }
    Ok(())
}

/// Count the elements matching the `contains` subschema and compare against
/// the `minContains`/`maxContains` window. The lower bound defaults to one
/// when `minContains` is absent; the upper bound defaults to unbounded.
pub(crate) fn validate_contains(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Ok(());
    };
    let Some(target) = schema.contains else {
        return Ok(());
    };
    let count = items
        .iter()
        .filter(|el| validate_value(el, target, ctx).is_ok())
        .count() as u64;

    let has_min = schema.keywords.contains(SchemaKeyword::MinContains);
    let min = if has_min { schema.min_contains } else { 1 };
    if count < min {
        // A bare `contains` failure names the keyword that was written.
        return Err(if has_min {
            SchemaError::MinContains
        } else {
            SchemaError::Contains
        });
    }
    if schema.keywords.contains(SchemaKeyword::MaxContains) && count > schema.max_contains {
        return Err(SchemaError::MaxContains);
    }
    Ok(())
}

/// Validate elements past the `prefixItems` prefix against `items`.
pub(crate) fn validate_items(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Ok(());
    };
    let Some(target) = schema.items else {
        return Ok(());
    };
    let prefix_len = if schema.keywords.contains(SchemaKeyword::PrefixItems) {
        schema.prefix_items.len()
    } else {
        0
    };
    for element in items.iter().skip(prefix_len) {
        if validate_value(element, target, ctx).is_err() {
            return Err(SchemaError::Items);
        }
    }
    Ok(())
}

/// Validate element `i` against `prefix_items[i]` for the overlapping
/// prefix. Elements past the prefix are `items`' concern; a shorter array
/// than the prefix is valid.
pub(crate) fn validate_prefix_items(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Ok(());
    };
    for (element, &sub) in items.iter().zip(&schema.prefix_items) {
        if validate_value(element, sub, ctx).is_err() {
            return Err(SchemaError::PrefixItems);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

pub(crate) fn validate_all_of(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    for &sub in &schema.all_of {
        if validate_value(value, sub, ctx).is_err() {
            return Err(SchemaError::AllOf);
        }
    }
    Ok(())
}

pub(crate) fn validate_any_of(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    if schema
        .any_of
        .iter()
        .any(|&sub| validate_value(value, sub, ctx).is_ok())
    {
        Ok(())
    } else {
        Err(SchemaError::AnyOf)
    }
}

pub(crate) fn validate_one_of(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let passing = schema
        .one_of
        .iter()
        .filter(|&&sub| validate_value(value, sub, ctx).is_ok())
        .count();
    if passing == 1 {
        Ok(())
    } else {
        Err(SchemaError::OneOf)
    }
}

pub(crate) fn validate_not(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(sub) = schema.not_schema else {
        return Ok(());
    };
    if validate_value(value, sub, ctx).is_ok() {
        Err(SchemaError::Not)
    } else {
        Ok(())
    }
}

/// `then` and `else` are driven from here; in isolation they have no
/// effect.
pub(crate) fn validate_if_then_else(
    value: &Value,
    schema: &Schema,
    ctx: &Context,
) -> Result<(), SchemaError> {
    let Some(condition) = schema.if_schema else {
        return Ok(());
    };
    if validate_value(value, condition, ctx).is_ok() {
        if schema.keywords.contains(SchemaKeyword::Then) {
            if let Some(then) = schema.then_schema {
                if validate_value(value, then, ctx).is_err() {
                    return Err(SchemaError::IfThen);
                }
            }
        }
    } else if schema.keywords.contains(SchemaKeyword::Else) {
        if let Some(alternative) = schema.else_schema {
            if validate_value(value, alternative, ctx).is_err() {
                return Err(SchemaError::IfElse);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_schema_from_value;
    use crate::resolve::resolve_refs;
    use serde_json::json;

    fn compile(doc: serde_json::Value) -> (Context, SchemaIndex) {
        let mut ctx = Context::new();
        let root = parse_schema_from_value(&doc, &mut ctx).expect("schema parse failed");
        ctx.set_root(root);
        resolve_refs(root, &mut ctx).expect("ref resolution failed");
        (ctx, root)
    }

    fn check(doc: serde_json::Value, instance: serde_json::Value) -> Result<(), SchemaError> {
        let (ctx, root) = compile(doc);
        validate_value(&instance, root, &ctx)
    }

    fn sample_instances() -> Vec<serde_json::Value> {
        vec![
            json!(null),
            json!(true),
            json!(0),
            json!(-3),
            json!(4.5),
            json!("hello"),
            json!([1, 2]),
            json!({"a": 1}),
        ]
    }

    // -- End-to-end scenarios ----------------------------------------------

    #[test]
    fn number_schema_accepts_numbers_only() {
        let schema = json!({"type": "number"});
        assert_eq!(check(schema.clone(), json!(42)), Ok(()));
        assert_eq!(check(schema, json!("foo")), Err(SchemaError::Type));
    }

    #[test]
    fn person_schema_reports_the_failing_bound() {
        let schema = json!({
            "$id": "x",
            "type": "object",
            "properties": {
                "firstName": {"type": "string"},
                "lastName": {"type": "string"},
                "age": {"type": "integer", "minimum": 21}
            }
        });
        let ok = json!({"firstName": "John", "lastName": "Doe", "age": 21});
        assert_eq!(check(schema.clone(), ok), Ok(()));

        let underage = json!({"firstName": "John", "lastName": "Doe", "age": 20});
        assert_eq!(check(schema, underage), Err(SchemaError::Minimum));
    }

    #[test]
    fn properties_are_not_implicitly_required() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "object",
                    "properties": {"first": {"type": "string"}}
                }
            }
        });
        assert_eq!(check(schema, json!({})), Ok(()));
    }

    #[test]
    fn contains_counts_matching_elements() {
        let schema = json!({
            "contains": {"type": "integer"},
            "minContains": 2,
            "maxContains": 3
        });
        assert_eq!(check(schema.clone(), json!([1, "a", 2])), Ok(()));
        assert_eq!(
            check(schema.clone(), json!([1])),
            Err(SchemaError::MinContains)
        );
        assert_eq!(
            check(schema, json!([1, 2, 3, 4])),
            Err(SchemaError::MaxContains)
        );
    }

    #[test]
    fn bare_contains_defaults_to_at_least_one() {
        let schema = json!({"contains": {"type": "integer"}});
        assert_eq!(check(schema.clone(), json!(["a", 1])), Ok(()));
        assert_eq!(check(schema, json!(["a", "b"])), Err(SchemaError::Contains));
    }

    #[test]
    fn min_contains_zero_accepts_the_empty_array() {
        let schema = json!({"contains": {"type": "integer"}, "minContains": 0});
        assert_eq!(check(schema, json!([])), Ok(()));
    }

    #[test]
    fn resolved_ref_validates_like_its_target() {
        let schema = json!({
            "$defs": {
                "personal": {
                    "address": {
                        "type": "object",
                        "properties": {"street": {"type": "string"}}
                    }
                }
            },
            "properties": {"home": {"$ref": "#/$defs/personal/address"}}
        });
        assert_eq!(
            check(schema.clone(), json!({"home": {"street": "Main"}})),
            Ok(())
        );
        assert_eq!(
            check(schema, json!({"home": {"street": 42}})),
            Err(SchemaError::Type)
        );
    }

    #[test]
    fn if_then_else_branches() {
        let schema = json!({
            "if": {"type": "integer"},
            "then": {"minimum": 0},
            "else": {"type": "string"}
        });
        assert_eq!(check(schema.clone(), json!(5)), Ok(()));
        assert_eq!(check(schema.clone(), json!(-1)), Err(SchemaError::IfThen));
        assert_eq!(check(schema.clone(), json!("hi")), Ok(()));
        assert_eq!(check(schema, json!(true)), Err(SchemaError::IfElse));
    }

    #[test]
    fn then_and_else_in_isolation_have_no_effect() {
        assert_eq!(check(json!({"then": {"minimum": 100}}), json!(1)), Ok(()));
        assert_eq!(check(json!({"else": {"minimum": 100}}), json!(1)), Ok(()));
    }

    // -- Boolean-literal schemas -------------------------------------------

    #[test]
    fn boolean_literal_schemas() {
        for instance in sample_instances() {
            assert_eq!(check(json!(true), instance.clone()), Ok(()));
            assert_eq!(
                check(json!(false), instance),
                Err(SchemaError::BoolSchemaFalse)
            );
        }
    }

    // -- Composition algebra ------------------------------------------------

    #[test]
    fn not_inverts_its_subschema() {
        let sub = json!({"type": "number"});
        for instance in sample_instances() {
            let plain = check(sub.clone(), instance.clone()).is_ok();
            let negated = check(json!({"not": sub.clone()}), instance).is_ok();
            assert_eq!(plain, !negated);
        }
    }

    #[test]
    fn all_of_is_conjunction() {
        let s1 = json!({"type": "number"});
        let s2 = json!({"minimum": 1});
        for instance in sample_instances() {
            let expected = check(s1.clone(), instance.clone()).is_ok()
                && check(s2.clone(), instance.clone()).is_ok();
            let combined =
                check(json!({"allOf": [s1.clone(), s2.clone()]}), instance).is_ok();
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn any_of_is_disjunction() {
        let s1 = json!({"type": "string"});
        let s2 = json!({"minimum": 1});
        for instance in sample_instances() {
            let expected = check(s1.clone(), instance.clone()).is_ok()
                || check(s2.clone(), instance.clone()).is_ok();
            let combined =
                check(json!({"anyOf": [s1.clone(), s2.clone()]}), instance).is_ok();
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn one_of_is_exclusive_disjunction() {
        let s1 = json!({"type": "number"});
        let s2 = json!({"minimum": 1});
        for instance in sample_instances() {
            let expected = check(s1.clone(), instance.clone()).is_ok()
                ^ check(s2.clone(), instance.clone()).is_ok();
            let combined =
                check(json!({"oneOf": [s1.clone(), s2.clone()]}), instance).is_ok();
            assert_eq!(combined, expected);
        }
    }

    // -- Strings ------------------------------------------------------------

    #[test]
    fn length_counts_code_points() {
        let schema = json!({"minLength": 2});
        // U+00E9 is one code point.
        assert_eq!(check(schema.clone(), json!("é")), Err(SchemaError::MinLength));
        // 'e' followed by a combining accent is two.
        assert_eq!(check(schema, json!("e\u{301}")), Ok(()));

        let schema = json!({"maxLength": 1});
        assert_eq!(check(schema.clone(), json!("é")), Ok(()));
        assert_eq!(check(schema, json!("ab")), Err(SchemaError::MaxLength));
    }

    #[test]
    fn pattern_is_a_substring_test() {
        let schema = json!({"pattern": "b+c"});
        assert_eq!(check(schema.clone(), json!("abbbcd")), Ok(()));
        assert_eq!(check(schema.clone(), json!("abd")), Err(SchemaError::Pattern));
        // Non-strings pass.
        assert_eq!(check(schema, json!(12)), Ok(()));
    }

    // -- Numbers ------------------------------------------------------------

    #[test]
    fn numeric_bounds() {
        assert_eq!(check(json!({"minimum": 3}), json!(3)), Ok(()));
        assert_eq!(
            check(json!({"exclusiveMinimum": 3}), json!(3)),
            Err(SchemaError::ExclusiveMinimum)
        );
        assert_eq!(check(json!({"maximum": 3}), json!(3)), Ok(()));
        assert_eq!(
            check(json!({"exclusiveMaximum": 3}), json!(3)),
            Err(SchemaError::ExclusiveMaximum)
        );
        // Non-numbers always pass.
        assert_eq!(check(json!({"minimum": 3}), json!("x")), Ok(()));
    }

    #[test]
    fn multiple_of_handles_integer_and_float_divisors() {
        assert_eq!(check(json!({"multipleOf": 3}), json!(9)), Ok(()));
        assert_eq!(
            check(json!({"multipleOf": 3}), json!(10)),
            Err(SchemaError::MultipleOf)
        );
        assert_eq!(check(json!({"multipleOf": 2.5}), json!(7.5)), Ok(()));
        assert_eq!(
            check(json!({"multipleOf": 2.5}), json!(7.0)),
            Err(SchemaError::MultipleOf)
        );
    }

    // -- Objects ------------------------------------------------------------

    #[test]
    fn required_and_property_counts() {
        let schema = json!({"required": ["a", "b"]});
        assert_eq!(check(schema.clone(), json!({"a": 1, "b": 2})), Ok(()));
        assert_eq!(
            check(schema.clone(), json!({"a": 1})),
            Err(SchemaError::Required)
        );
        // Non-objects pass.
        assert_eq!(check(schema, json!([1])), Ok(()));

        assert_eq!(
            check(json!({"minProperties": 1}), json!({})),
            Err(SchemaError::MinProperties)
        );
        assert_eq!(
            check(json!({"maxProperties": 1}), json!({"a": 1, "b": 2})),
            Err(SchemaError::MaxProperties)
        );
    }

    #[test]
    fn dependent_required_triggers_on_presence() {
        let schema = json!({
            "dependentRequired": {"credit_card": ["billing_address"]}
        });
        assert_eq!(check(schema.clone(), json!({"name": "x"})), Ok(()));
        assert_eq!(
            check(
                schema.clone(),
                json!({"credit_card": "4111", "billing_address": "1 Main"})
            ),
            Ok(())
        );
        assert_eq!(
            check(schema, json!({"credit_card": "4111"})),
            Err(SchemaError::DependentRequired)
        );
    }

    #[test]
    fn dependent_schemas_apply_to_the_whole_instance() {
        let schema = json!({
            "dependentSchemas": {
                "credit_card": {"required": ["billing_address"]}
            }
        });
        assert_eq!(check(schema.clone(), json!({"x": 1})), Ok(()));
        assert_eq!(
            check(schema, json!({"credit_card": "4111"})),
            Err(SchemaError::DependentSchemas)
        );
    }

    #[test]
    fn additional_properties_covers_unclaimed_keys() {
        let schema = json!({
            "properties": {"a": {"type": "integer"}},
            "patternProperties": {"^p_": {"type": "string"}},
            "additionalProperties": {"type": "boolean"}
        });
        assert_eq!(
            check(schema.clone(), json!({"a": 1, "p_x": "s", "extra": true})),
            Ok(())
        );
        assert_eq!(
            check(schema, json!({"extra": "not-a-bool"})),
            Err(SchemaError::AdditionalProperties)
        );
    }

    #[test]
    fn pattern_properties_validate_matching_keys() {
        let schema = json!({
            "patternProperties": {"^n_": {"type": "number"}}
        });
        assert_eq!(check(schema.clone(), json!({"n_a": 1, "other": "x"})), Ok(()));
        assert_eq!(
            check(schema, json!({"n_a": "oops"})),
            Err(SchemaError::PatternProperties)
        );
    }

    #[test]
    fn property_names_validate_the_keys_themselves() {
        let schema = json!({"propertyNames": {"maxLength": 3}});
        assert_eq!(check(schema.clone(), json!({"abc": 1})), Ok(()));
        assert_eq!(
            check(schema, json!({"abcd": 1})),
            Err(SchemaError::PropertyNames)
        );
    }

    // -- Arrays -------------------------------------------------------------

    #[test]
    fn item_counts() {
        assert_eq!(
            check(json!({"minItems": 2}), json!([1])),
            Err(SchemaError::MinItems)
        );
        assert_eq!(check(json!({"minItems": 2}), json!([1, 2])), Ok(()));
        assert_eq!(
            check(json!({"maxItems": 1}), json!([1, 2])),
            Err(SchemaError::MaxItems)
        );
    }

    #[test]
    fn unique_items_uses_deep_equality() {
        let schema = json!({"uniqueItems": true});
        assert_eq!(check(schema.clone(), json!([1, "1"])), Ok(()));
        assert_eq!(
            check(schema.clone(), json!([1, 1.0])),
            Err(SchemaError::UniqueItems)
        );
        assert_eq!(
            check(schema.clone(), json!([{"a": 1}, {"a": 1}])),
            Err(SchemaError::UniqueItems)
        );
        // False is a no-op.
        assert_eq!(check(json!({"uniqueItems": false}), json!([1, 1])), Ok(()));
    }

    #[test]
    fn prefix_items_and_items_split_the_array() {
        let schema = json!({
            "prefixItems": [{"type": "string"}, {"type": "integer"}],
            "items": {"type": "boolean"}
        });
        assert_eq!(check(schema.clone(), json!(["id", 3, true, false])), Ok(()));
        assert_eq!(
            check(schema.clone(), json!([7, 3])),
            Err(SchemaError::PrefixItems)
        );
        assert_eq!(
            check(schema.clone(), json!(["id", 3, "not-bool"])),
            Err(SchemaError::Items)
        );
        // Arrays shorter than the prefix are fine.
        assert_eq!(check(schema, json!(["id"])), Ok(()));
    }

    #[test]
    fn items_alone_constrains_every_element() {
        let schema = json!({"items": {"type": "integer"}});
        assert_eq!(check(schema.clone(), json!([1, 2, 3])), Ok(()));
        assert_eq!(check(schema.clone(), json!([1, "x"])), Err(SchemaError::Items));
        // Non-arrays pass.
        assert_eq!(check(schema, json!("abc")), Ok(()));
    }

    // -- Enum and const -----------------------------------------------------

    #[test]
    fn enum_matches_any_element_kind() {
        let schema = json!({"enum": [null, true, 2, "x", [1], {"k": 1}]});
        for ok in [
            json!(null),
            json!(true),
            json!(2),
            json!(2.0),
            json!("x"),
            json!([1]),
            json!({"k": 1}),
        ] {
            assert_eq!(check(schema.clone(), ok), Ok(()));
        }
        assert_eq!(check(schema, json!(3)), Err(SchemaError::Enum));
    }

    #[test]
    fn const_uses_deep_equality() {
        let schema = json!({"const": {"a": [1, 2]}});
        assert_eq!(check(schema.clone(), json!({"a": [1, 2.0]})), Ok(()));
        assert_eq!(
            check(schema, json!({"a": [2, 1]})),
            Err(SchemaError::Const)
        );
    }

    // -- Type unions --------------------------------------------------------

    #[test]
    fn type_union_accepts_any_member() {
        let schema = json!({"type": ["string", "null"]});
        assert_eq!(check(schema.clone(), json!("x")), Ok(()));
        assert_eq!(check(schema.clone(), json!(null)), Ok(()));
        assert_eq!(check(schema, json!(1)), Err(SchemaError::Type));
    }

    #[test]
    fn integral_float_satisfies_declared_integer() {
        let schema = json!({"type": "integer"});
        assert_eq!(check(schema.clone(), json!(5.0)), Ok(()));
        assert_eq!(check(schema, json!(5.5)), Err(SchemaError::Type));
    }
}
