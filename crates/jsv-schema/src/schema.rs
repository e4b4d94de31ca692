//! # Schema Records
//!
//! One [`Schema`] is one arena entry. All inter-schema edges are
//! [`SchemaIndex`] values into the owning [`Context`](crate::Context), never
//! owning references, which is what lets `$ref` fusion copy records freely
//! and keeps cyclic ownership structurally impossible.
//!
//! A record is meaningful in exactly one of two forms: a boolean-literal
//! schema (`is_bool_schema` set, every other field inert) or a normal record
//! whose populated fields are exactly those named by its [`KeywordSet`]. The
//! validator consults only flagged fields.

use std::collections::HashMap;

use regex::Regex;
use serde_json::Value;

use jsv_core::InstanceType;

use crate::arena::SchemaIndex;
use crate::keyword::KeywordSet;

/// A parsed schema record.
///
/// Field groups mirror the keyword vocabulary: identity strings, form flags,
/// applicator edges, validator storage, metadata storage, and the
/// `other_keys` escape hatch for `$ref` descent through non-vocabulary
/// containers inside `$defs`.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    // -- Identity -----------------------------------------------------------
    /// The `$schema` meta-schema URI, empty when absent.
    pub schema_uri: String,
    /// The `$id` value, empty when absent.
    pub id: String,
    /// The `$anchor` value, empty when absent. Parsed but never resolved.
    pub anchor: String,
    /// The `title` value, empty when absent.
    pub title: String,
    /// The `$comment` value, empty when absent.
    pub comment: String,
    /// The `description` value, empty when absent.
    pub description: String,
    /// The `$ref` path, empty when absent. Fused away by ref resolution.
    pub ref_path: String,
    /// Named reusable subschemas from `$defs`.
    pub defs: HashMap<String, SchemaIndex>,
    /// The key this schema was parsed under when it is a named child
    /// (a `properties` entry, a `$defs` entry, a `dependentSchemas` entry).
    pub name: String,

    // -- Form flags ---------------------------------------------------------
    /// This record came from a JSON boolean; no other field is meaningful.
    pub is_bool_schema: bool,
    /// The boolean literal: `true` passes everything, `false` fails
    /// everything.
    pub bool_schema_value: bool,
    /// The schema object contained no recognized vocabulary keyword.
    pub is_empty_container: bool,

    /// Which keywords were present and parsed successfully. The validator
    /// iterates this set and nothing else.
    pub keywords: KeywordSet,

    // -- Applicator storage -------------------------------------------------
    /// Children of `properties`, each with its `name` set to the entry key.
    pub properties_children: Vec<SchemaIndex>,
    /// Subschemas paired index-for-index with `pattern_regexes`.
    pub pattern_properties: Vec<SchemaIndex>,
    /// Compiled `patternProperties` regexes; always the same length as
    /// `pattern_properties`.
    pub pattern_regexes: Vec<Regex>,
    /// The `additionalProperties` subschema.
    pub additional_properties: Option<SchemaIndex>,
    /// The `propertyNames` subschema.
    pub property_names: Option<SchemaIndex>,
    /// The `contains` subschema.
    pub contains: Option<SchemaIndex>,
    /// The `items` subschema, applied past the `prefixItems` prefix.
    pub items: Option<SchemaIndex>,
    /// The `if` subschema.
    pub if_schema: Option<SchemaIndex>,
    /// The `then` subschema, driven from `if`.
    pub then_schema: Option<SchemaIndex>,
    /// The `else` subschema, driven from `if`.
    pub else_schema: Option<SchemaIndex>,
    /// The `not` subschema.
    pub not_schema: Option<SchemaIndex>,
    /// Subschemas of `allOf`.
    pub all_of: Vec<SchemaIndex>,
    /// Subschemas of `anyOf`.
    pub any_of: Vec<SchemaIndex>,
    /// Subschemas of `oneOf`.
    pub one_of: Vec<SchemaIndex>,
    /// Positional subschemas of `prefixItems`.
    pub prefix_items: Vec<SchemaIndex>,
    /// Children of `dependentSchemas`, each named by its trigger property.
    pub dependent_schemas: Vec<SchemaIndex>,

    // -- Validator storage --------------------------------------------------
    /// Declared types; a singleton for the scalar form of `type`.
    pub types: Vec<InstanceType>,
    /// The `const` value.
    pub const_value: Option<Value>,
    /// The `enum` values.
    pub enum_values: Vec<Value>,
    /// Minimum string length in code points.
    pub min_length: u64,
    /// Maximum string length in code points.
    pub max_length: u64,
    /// Minimum array length.
    pub min_items: u64,
    /// Maximum array length.
    pub max_items: u64,
    /// Minimum property count.
    pub min_properties: u64,
    /// Maximum property count.
    pub max_properties: u64,
    /// Minimum count of elements matching `contains`.
    pub min_contains: u64,
    /// Maximum count of elements matching `contains`.
    pub max_contains: u64,
    /// Inclusive lower bound.
    pub minimum: f64,
    /// Inclusive upper bound.
    pub maximum: f64,
    /// Exclusive lower bound.
    pub exclusive_minimum: f64,
    /// Exclusive upper bound.
    pub exclusive_maximum: f64,
    /// Required divisor.
    pub multiple_of: f64,
    /// Property names that must be present.
    pub required: Vec<String>,
    /// Trigger property to properties it requires.
    pub dependent_required: HashMap<String, Vec<String>>,
    /// Whether array elements must be pairwise deep-unequal.
    pub unique_items: bool,
    /// Compiled `pattern` regex.
    pub pattern: Option<Regex>,

    // -- Metadata storage ---------------------------------------------------
    /// The `default` value.
    pub default_value: Option<Value>,
    /// The `examples` values.
    pub examples: Vec<Value>,
    /// The `deprecated` flag.
    pub deprecated: bool,
    /// The `readOnly` flag.
    pub read_only: bool,
    /// The `writeOnly` flag.
    pub write_only: bool,

    // -- Other --------------------------------------------------------------
    /// Subschemas under unrecognized top-level keys, so `$ref` paths can
    /// descend through intermediate containers inside `$defs`.
    pub other_keys: HashMap<String, SchemaIndex>,
}
