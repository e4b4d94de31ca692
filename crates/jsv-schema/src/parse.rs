//! # Schema Parsing
//!
//! Materializes schema records in the arena from a JSON document. A boolean
//! document becomes a boolean-literal record; an object document gets one
//! record whose fields are filled by walking [`KEYWORD_TABLE`] in table
//! order, recursing into subschemas as the applicator handlers demand.
//!
//! After the table pass, any key with no table entry has its value parsed
//! as a subschema under `other_keys`. That is what lets a `$ref` path
//! descend through arbitrary intermediate containers inside `$defs`; a
//! value that is neither an object nor a boolean is not a schema and fails
//! the parse.
//!
//! Handlers return the first error encountered and the whole parse stops
//! there; nothing is recovered locally.

use regex::Regex;
use serde_json::Value;

use jsv_core::instance::is_integral;
use jsv_core::{InstanceType, SchemaError};

use crate::arena::{Context, SchemaIndex};
use crate::keyword::{SchemaKeyword, KEYWORD_TABLE};
use crate::schema::Schema;

/// Parse a schema document from JSON text and append it to the context.
///
/// Returns the root index of the newly parsed schema.
pub fn parse_schema_from_str(
    text: &str,
    ctx: &mut Context,
) -> Result<SchemaIndex, SchemaError> {
    let value: Value = serde_json::from_str(text)?;
    parse_schema_from_value(&value, ctx)
}

/// Parse a schema document from an already-parsed JSON value.
///
/// Appends one record for the document and one for every nested subschema,
/// and queues any `$ref` paths for [`resolve_refs`](crate::resolve_refs).
pub fn parse_schema_from_value(
    value: &Value,
    ctx: &mut Context,
) -> Result<SchemaIndex, SchemaError> {
    match value {
        Value::Bool(b) => {
            let idx = ctx.alloc_empty();
            let schema = ctx.schema_mut(idx);
            schema.is_bool_schema = true;
            schema.bool_schema_value = *b;
            Ok(idx)
        }
        Value::Object(map) => {
            let idx = ctx.alloc_empty();
            let mut matched_any = false;

            for spec in &KEYWORD_TABLE {
                let Some(raw) = map.get(spec.name) else {
                    continue;
                };
                matched_any = true;
                match spec.parse {
                    Some(parse) => {
                        parse(raw, idx, ctx)?;
                        ctx.schema_mut(idx).keywords.insert(spec.keyword);
                    }
                    None => {
                        tracing::debug!(
                            keyword = spec.name,
                            "recognized keyword has no parse handler; ignoring"
                        );
                    }
                }
            }

            for (key, raw) in map {
                if SchemaKeyword::from_name(key).is_some() {
                    continue;
                }
                let child = parse_schema_from_value(raw, ctx)?;
                ctx.schema_mut(child).name = key.clone();
                ctx.schema_mut(idx).other_keys.insert(key.clone(), child);
            }

            if !matched_any {
                ctx.schema_mut(idx).is_empty_container = true;
            }
            Ok(idx)
        }
        _ => Err(SchemaError::InvalidObjectType),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Copy a string keyword, leaving the field empty when the value is not a
/// string.
fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

/// A non-negative integer bound. Accepts any JSON number whose fractional
/// part is exactly zero.
fn require_index_bound(value: &Value) -> Result<u64, SchemaError> {
    let Value::Number(n) = value else {
        return Err(SchemaError::InvalidIntegerType);
    };
    if let Some(u) = n.as_u64() {
        return Ok(u);
    }
    if let Some(f) = n.as_f64() {
        if is_integral(f) && f >= 0.0 {
            return Ok(f as u64);
        }
    }
    Err(SchemaError::InvalidIntegerType)
}

/// A numeric bound. Integers are accepted transparently.
fn require_number(value: &Value) -> Result<f64, SchemaError> {
    value.as_f64().ok_or(SchemaError::InvalidNumberType)
}

fn require_bool(value: &Value) -> Result<bool, SchemaError> {
    value.as_bool().ok_or(SchemaError::InvalidInstanceType)
}

/// Map a regex compilation failure onto the error taxonomy.
fn regex_error(err: regex::Error) -> SchemaError {
    match err {
        regex::Error::Syntax(msg) => SchemaError::RegexParser(msg),
        regex::Error::CompiledTooBig(limit) => SchemaError::RegexCompiler(format!(
            "compiled pattern exceeds the {limit}-byte size limit"
        )),
        other => SchemaError::RegexCreation(other.to_string()),
    }
}

/// Parse the value as a subschema and assign its index to one field of the
/// referrer.
fn parse_subschema_into(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
    assign: impl FnOnce(&mut Schema, SchemaIndex),
) -> Result<(), SchemaError> {
    let child = parse_schema_from_value(value, ctx)?;
    assign(ctx.schema_mut(idx), child);
    Ok(())
}

/// Parse an array of subschemas, appending each child through `append`.
fn parse_subschema_list(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
    append: impl Fn(&mut Schema, SchemaIndex),
) -> Result<(), SchemaError> {
    let Value::Array(items) = value else {
        return Err(SchemaError::InvalidArrayType);
    };
    for raw in items {
        let child = parse_schema_from_value(raw, ctx)?;
        append(ctx.schema_mut(idx), child);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Core keywords
// ---------------------------------------------------------------------------

pub(crate) fn parse_id(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).id = string_or_empty(value);
    Ok(())
}

pub(crate) fn parse_schema_uri(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).schema_uri = string_or_empty(value);
    Ok(())
}

/// Copy the `$ref` path and queue it for the post-parse resolution pass.
pub(crate) fn parse_ref(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let path = value.as_str().ok_or(SchemaError::InvalidStringType)?;
    ctx.schema_mut(idx).ref_path = path.to_string();
    ctx.record_pending_ref(idx, path.to_string());
    Ok(())
}

pub(crate) fn parse_comment(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).comment = string_or_empty(value);
    Ok(())
}

/// Parse each `$defs` entry as a named subschema.
pub(crate) fn parse_defs(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidObjectType);
    };
    for (name, raw) in map {
        let child = parse_schema_from_value(raw, ctx)?;
        ctx.schema_mut(child).name = name.clone();
        ctx.schema_mut(idx).defs.insert(name.clone(), child);
    }
    Ok(())
}

pub(crate) fn parse_anchor(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).anchor = string_or_empty(value);
    Ok(())
}

// ---------------------------------------------------------------------------
// Applicator keywords
// ---------------------------------------------------------------------------

pub(crate) fn parse_all_of(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_list(value, idx, ctx, |s, child| s.all_of.push(child))
}

pub(crate) fn parse_any_of(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_list(value, idx, ctx, |s, child| s.any_of.push(child))
}

pub(crate) fn parse_one_of(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_list(value, idx, ctx, |s, child| s.one_of.push(child))
}

pub(crate) fn parse_if(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.if_schema = Some(child))
}

pub(crate) fn parse_then(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.then_schema = Some(child))
}

pub(crate) fn parse_else(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.else_schema = Some(child))
}

pub(crate) fn parse_not(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.not_schema = Some(child))
}

/// Parse each `properties` entry as a named child subschema.
///
/// Also records `object` as the parse-time default type; the default only
/// takes effect if the `type` keyword is itself present to flag it.
pub(crate) fn parse_properties(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidObjectType);
    };
    for (name, raw) in map {
        let child = parse_schema_from_value(raw, ctx)?;
        ctx.schema_mut(child).name = name.clone();
        ctx.schema_mut(idx).properties_children.push(child);
    }
    let schema = ctx.schema_mut(idx);
    if schema.types.is_empty() {
        schema.types = vec![InstanceType::Object];
    }
    Ok(())
}

pub(crate) fn parse_additional_properties(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| {
        s.additional_properties = Some(child)
    })
}

/// Compile each `patternProperties` key as a regex and parse its value as a
/// subschema, keeping the two sequences parallel.
pub(crate) fn parse_pattern_properties(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidObjectType);
    };
    for (pattern, raw) in map {
        let regex = Regex::new(pattern).map_err(regex_error)?;
        let child = parse_schema_from_value(raw, ctx)?;
        ctx.schema_mut(child).name = pattern.clone();
        let schema = ctx.schema_mut(idx);
        schema.pattern_regexes.push(regex);
        schema.pattern_properties.push(child);
    }
    Ok(())
}

/// Parse each `dependentSchemas` entry as a child named by its trigger
/// property.
pub(crate) fn parse_dependent_schemas(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidObjectType);
    };
    for (trigger, raw) in map {
        let child = parse_schema_from_value(raw, ctx)?;
        ctx.schema_mut(child).name = trigger.clone();
        ctx.schema_mut(idx).dependent_schemas.push(child);
    }
    Ok(())
}

pub(crate) fn parse_property_names(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.property_names = Some(child))
}

pub(crate) fn parse_contains(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.contains = Some(child))
}

pub(crate) fn parse_items(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_into(value, idx, ctx, |s, child| s.items = Some(child))
}

pub(crate) fn parse_prefix_items(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    parse_subschema_list(value, idx, ctx, |s, child| s.prefix_items.push(child))
}

// ---------------------------------------------------------------------------
// Validator keywords
// ---------------------------------------------------------------------------

/// `type` accepts a single type name or an array of type names.
pub(crate) fn parse_type(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let types = match value {
        Value::String(name) => vec![
            InstanceType::from_name(name).ok_or(SchemaError::InvalidInstanceType)?
        ],
        Value::Array(names) => {
            let mut types = Vec::with_capacity(names.len());
            for raw in names {
                let name = raw.as_str().ok_or(SchemaError::InvalidInstanceType)?;
                types.push(
                    InstanceType::from_name(name)
                        .ok_or(SchemaError::InvalidInstanceType)?,
                );
            }
            types
        }
        _ => return Err(SchemaError::ExpectedArrayOrString),
    };
    ctx.schema_mut(idx).types = types;
    Ok(())
}

pub(crate) fn parse_enum(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Array(values) = value else {
        return Err(SchemaError::InvalidEnumType);
    };
    ctx.schema_mut(idx).enum_values = values.clone();
    Ok(())
}

pub(crate) fn parse_const(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).const_value = Some(value.clone());
    Ok(())
}

pub(crate) fn parse_max_length(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).max_length = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_min_length(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).min_length = require_index_bound(value)?;
    Ok(())
}

/// Compile the `pattern` regex. Matching is an unanchored substring search,
/// so the pattern is stored exactly as written.
pub(crate) fn parse_pattern(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let pattern = value.as_str().ok_or(SchemaError::InvalidStringType)?;
    let regex = Regex::new(pattern).map_err(regex_error)?;
    ctx.schema_mut(idx).pattern = Some(regex);
    Ok(())
}

pub(crate) fn parse_exclusive_maximum(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).exclusive_maximum = require_number(value)?;
    Ok(())
}

pub(crate) fn parse_exclusive_minimum(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).exclusive_minimum = require_number(value)?;
    Ok(())
}

pub(crate) fn parse_maximum(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).maximum = require_number(value)?;
    Ok(())
}

pub(crate) fn parse_minimum(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).minimum = require_number(value)?;
    Ok(())
}

pub(crate) fn parse_multiple_of(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).multiple_of = require_number(value)?;
    Ok(())
}

/// `dependentRequired` maps a trigger property to the properties it
/// requires.
pub(crate) fn parse_dependent_required(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidObjectType);
    };
    for (trigger, raw) in map {
        let Value::Array(names) = raw else {
            return Err(SchemaError::InvalidArrayType);
        };
        let mut required = Vec::with_capacity(names.len());
        for name in names {
            required.push(
                name.as_str()
                    .ok_or(SchemaError::InvalidStringType)?
                    .to_string(),
            );
        }
        ctx.schema_mut(idx)
            .dependent_required
            .insert(trigger.clone(), required);
    }
    Ok(())
}

pub(crate) fn parse_max_properties(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).max_properties = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_min_properties(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).min_properties = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_required(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Array(names) = value else {
        return Err(SchemaError::InvalidArrayType);
    };
    let mut required = Vec::with_capacity(names.len());
    for name in names {
        required.push(
            name.as_str()
                .ok_or(SchemaError::InvalidStringType)?
                .to_string(),
        );
    }
    ctx.schema_mut(idx).required = required;
    Ok(())
}

pub(crate) fn parse_max_items(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).max_items = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_min_items(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).min_items = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_max_contains(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).max_contains = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_min_contains(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).min_contains = require_index_bound(value)?;
    Ok(())
}

pub(crate) fn parse_unique_items(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).unique_items = require_bool(value)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Metadata keywords
// ---------------------------------------------------------------------------

pub(crate) fn parse_title(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).title = string_or_empty(value);
    Ok(())
}

pub(crate) fn parse_description(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).description = string_or_empty(value);
    Ok(())
}

pub(crate) fn parse_default(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).default_value = Some(value.clone());
    Ok(())
}

pub(crate) fn parse_deprecated(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).deprecated = require_bool(value)?;
    Ok(())
}

pub(crate) fn parse_examples(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let Value::Array(values) = value else {
        return Err(SchemaError::InvalidArrayType);
    };
    ctx.schema_mut(idx).examples = values.clone();
    Ok(())
}

pub(crate) fn parse_read_only(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).read_only = require_bool(value)?;
    Ok(())
}

pub(crate) fn parse_write_only(
    value: &Value,
    idx: SchemaIndex,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    ctx.schema_mut(idx).write_only = require_bool(value)?;
    Ok(())
}
