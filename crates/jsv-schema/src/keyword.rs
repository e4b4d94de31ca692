//! # Keyword Vocabulary and Dispatch Table
//!
//! [`KEYWORD_TABLE`] is the single source of truth binding a keyword's
//! textual name, its [`SchemaKeyword`] variant, its kind, and its two
//! handlers. The parser walks the whole table per schema object; the
//! validator walks a record's [`KeywordSet`] and indexes the table by
//! discriminant, so absent keywords cost nothing.
//!
//! Table order, enum discriminant order, and bit position are all the same
//! order. That single ordering fixes which keyword observes the input first
//! during parse and which failure wins during validate. A unit test pins the
//! correspondence.
//!
//! A keyword with a parse handler but no validate handler is either metadata
//! or driven by a neighboring keyword (`then` and `else` run inside `if`;
//! `minContains`/`maxContains` run inside `contains`; `$ref` is fused away
//! before validation). A keyword with no parse handler is recognized but
//! unimplemented: the parser logs an advisory and otherwise ignores it.

use serde_json::Value;

use jsv_core::SchemaError;

use crate::arena::{Context, SchemaIndex};
use crate::parse;
use crate::schema::Schema;
use crate::validate;

/// Parse handler: receives the keyword's raw value, the index of the record
/// under construction, and the context for nested appends.
pub(crate) type ParseFn =
    fn(&Value, SchemaIndex, &mut Context) -> Result<(), SchemaError>;

/// Validate handler: receives the instance, the record under evaluation, and
/// the context for recursion into child schemas.
pub(crate) type ValidateFn =
    fn(&Value, &Schema, &Context) -> Result<(), SchemaError>;

/// Every recognized schema keyword, in dispatch-table order.
///
/// The discriminant is simultaneously the bit position in a [`KeywordSet`]
/// and the index into [`KEYWORD_TABLE`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKeyword {
    // Core
    Id,
    SchemaUri,
    Ref,
    Comment,
    Defs,
    Anchor,
    DynamicAnchor,
    DynamicRef,
    Vocabulary,
    // Applicators
    AllOf,
    AnyOf,
    OneOf,
    If,
    Then,
    Else,
    Not,
    Properties,
    AdditionalProperties,
    PatternProperties,
    DependentSchemas,
    PropertyNames,
    Contains,
    Items,
    PrefixItems,
    // Validators
    Type,
    Enum,
    Const,
    MaxLength,
    MinLength,
    Pattern,
    ExclusiveMaximum,
    ExclusiveMinimum,
    Maximum,
    Minimum,
    MultipleOf,
    DependentRequired,
    MaxProperties,
    MinProperties,
    Required,
    MaxItems,
    MinItems,
    MaxContains,
    MinContains,
    UniqueItems,
    // Metadata
    Title,
    Description,
    Default,
    Deprecated,
    Examples,
    ReadOnly,
    WriteOnly,
    // Unevaluated
    UnevaluatedItems,
    UnevaluatedProperties,
}

/// Number of recognized keywords.
pub const KEYWORD_COUNT: usize = 53;

impl SchemaKeyword {
    /// All keywords in dispatch order.
    pub const ALL: [SchemaKeyword; KEYWORD_COUNT] = [
        SchemaKeyword::Id,
        SchemaKeyword::SchemaUri,
        SchemaKeyword::Ref,
        SchemaKeyword::Comment,
        SchemaKeyword::Defs,
        SchemaKeyword::Anchor,
        SchemaKeyword::DynamicAnchor,
        SchemaKeyword::DynamicRef,
        SchemaKeyword::Vocabulary,
        SchemaKeyword::AllOf,
        SchemaKeyword::AnyOf,
        SchemaKeyword::OneOf,
        SchemaKeyword::If,
        SchemaKeyword::Then,
        SchemaKeyword::Else,
        SchemaKeyword::Not,
        SchemaKeyword::Properties,
        SchemaKeyword::AdditionalProperties,
        SchemaKeyword::PatternProperties,
        SchemaKeyword::DependentSchemas,
        SchemaKeyword::PropertyNames,
        SchemaKeyword::Contains,
        SchemaKeyword::Items,
        SchemaKeyword::PrefixItems,
        SchemaKeyword::Type,
        SchemaKeyword::Enum,
        SchemaKeyword::Const,
        SchemaKeyword::MaxLength,
        SchemaKeyword::MinLength,
        SchemaKeyword::Pattern,
        SchemaKeyword::ExclusiveMaximum,
        SchemaKeyword::ExclusiveMinimum,
        SchemaKeyword::Maximum,
        SchemaKeyword::Minimum,
        SchemaKeyword::MultipleOf,
        SchemaKeyword::DependentRequired,
        SchemaKeyword::MaxProperties,
        SchemaKeyword::MinProperties,
        SchemaKeyword::Required,
        SchemaKeyword::MaxItems,
        SchemaKeyword::MinItems,
        SchemaKeyword::MaxContains,
        SchemaKeyword::MinContains,
        SchemaKeyword::UniqueItems,
        SchemaKeyword::Title,
        SchemaKeyword::Description,
        SchemaKeyword::Default,
        SchemaKeyword::Deprecated,
        SchemaKeyword::Examples,
        SchemaKeyword::ReadOnly,
        SchemaKeyword::WriteOnly,
        SchemaKeyword::UnevaluatedItems,
        SchemaKeyword::UnevaluatedProperties,
    ];

    /// The textual spelling of this keyword.
    pub fn name(self) -> &'static str {
        KEYWORD_TABLE[self as usize].name
    }

    /// Look up a keyword by its textual spelling.
    pub fn from_name(name: &str) -> Option<SchemaKeyword> {
        KEYWORD_TABLE
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.keyword)
    }

    /// The vocabulary group this keyword belongs to.
    pub fn kind(self) -> KeywordKind {
        KEYWORD_TABLE[self as usize].kind
    }
}

impl std::fmt::Display for SchemaKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The vocabulary group of a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Identity and structural keywords (`$id`, `$defs`, `$ref`, ...).
    Core,
    /// Keywords whose value is one or more subschemas.
    Applicator,
    /// Keywords that directly constrain a primitive dimension.
    Validator,
    /// Annotation keywords with no validation effect.
    Metadata,
    /// The `unevaluated*` keywords (recognized, not implemented).
    Unevaluated,
}

/// Compact set of the keywords present on one schema record.
///
/// Bit positions are [`SchemaKeyword`] discriminants; iteration yields
/// keywords in ascending discriminant order, which is dispatch priority
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordSet(u64);

impl KeywordSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a keyword as present.
    pub fn insert(&mut self, keyword: SchemaKeyword) {
        self.0 |= 1u64 << (keyword as u64);
    }

    /// Whether a keyword is present.
    pub fn contains(self, keyword: SchemaKeyword) -> bool {
        self.0 & (1u64 << (keyword as u64)) != 0
    }

    /// Whether no keyword is present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of keywords present.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the present keywords in dispatch order.
    pub fn iter(self) -> impl Iterator<Item = SchemaKeyword> {
        SchemaKeyword::ALL
            .into_iter()
            .filter(move |&k| self.contains(k))
    }
}

/// One dispatch-table entry.
pub(crate) struct KeywordSpec {
    /// Textual keyword spelling as it appears in schema documents.
    pub name: &'static str,
    /// The enum variant; `KEYWORD_TABLE[k as usize].keyword == k`.
    pub keyword: SchemaKeyword,
    /// Vocabulary group.
    pub kind: KeywordKind,
    /// Parse handler; `None` means recognized but unimplemented.
    pub parse: Option<ParseFn>,
    /// Validate handler; `None` means no direct validation effect.
    pub validate: Option<ValidateFn>,
}

/// The dispatch table. One entry per recognized keyword, in discriminant
/// order.
pub(crate) static KEYWORD_TABLE: [KeywordSpec; KEYWORD_COUNT] = [
    // -- Core ---------------------------------------------------------------
    KeywordSpec {
        name: "$id",
        keyword: SchemaKeyword::Id,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_id),
        validate: None,
    },
    KeywordSpec {
        name: "$schema",
        keyword: SchemaKeyword::SchemaUri,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_schema_uri),
        validate: None,
    },
    KeywordSpec {
        name: "$ref",
        keyword: SchemaKeyword::Ref,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_ref),
        validate: None,
    },
    KeywordSpec {
        name: "$comment",
        keyword: SchemaKeyword::Comment,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_comment),
        validate: None,
    },
    KeywordSpec {
        name: "$defs",
        keyword: SchemaKeyword::Defs,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_defs),
        validate: None,
    },
    KeywordSpec {
        name: "$anchor",
        keyword: SchemaKeyword::Anchor,
        kind: KeywordKind::Core,
        parse: Some(parse::parse_anchor),
        validate: None,
    },
    KeywordSpec {
        name: "$dynamicAnchor",
        keyword: SchemaKeyword::DynamicAnchor,
        kind: KeywordKind::Core,
        parse: None,
        validate: None,
    },
    KeywordSpec {
        name: "$dynamicRef",
        keyword: SchemaKeyword::DynamicRef,
        kind: KeywordKind::Core,
        parse: None,
        validate: None,
    },
    KeywordSpec {
        name: "$vocabulary",
        keyword: SchemaKeyword::Vocabulary,
        kind: KeywordKind::Core,
        parse: None,
        validate: None,
    },
    // -- Applicators --------------------------------------------------------
    KeywordSpec {
        name: "allOf",
        keyword: SchemaKeyword::AllOf,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_all_of),
        validate: Some(validate::validate_all_of),
    },
    KeywordSpec {
        name: "anyOf",
        keyword: SchemaKeyword::AnyOf,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_any_of),
        validate: Some(validate::validate_any_of),
    },
    KeywordSpec {
        name: "oneOf",
        keyword: SchemaKeyword::OneOf,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_one_of),
        validate: Some(validate::validate_one_of),
    },
    KeywordSpec {
        name: "if",
        keyword: SchemaKeyword::If,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_if),
        validate: Some(validate::validate_if_then_else),
    },
    KeywordSpec {
        name: "then",
        keyword: SchemaKeyword::Then,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_then),
        validate: None,
    },
    KeywordSpec {
        name: "else",
        keyword: SchemaKeyword::Else,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_else),
        validate: None,
    },
    KeywordSpec {
        name: "not",
        keyword: SchemaKeyword::Not,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_not),
        validate: Some(validate::validate_not),
    },
    KeywordSpec {
        name: "properties",
        keyword: SchemaKeyword::Properties,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_properties),
        validate: Some(validate::validate_properties),
    },
    KeywordSpec {
        name: "additionalProperties",
        keyword: SchemaKeyword::AdditionalProperties,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_additional_properties),
        validate: Some(validate::validate_additional_properties),
    },
    KeywordSpec {
        name: "patternProperties",
        keyword: SchemaKeyword::PatternProperties,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_pattern_properties),
        validate: Some(validate::validate_pattern_properties),
    },
    KeywordSpec {
        name: "dependentSchemas",
        keyword: SchemaKeyword::DependentSchemas,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_dependent_schemas),
        validate: Some(validate::validate_dependent_schemas),
    },
    KeywordSpec {
        name: "propertyNames",
        keyword: SchemaKeyword::PropertyNames,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_property_names),
        validate: Some(validate::validate_property_names),
    },
    KeywordSpec {
        name: "contains",
        keyword: SchemaKeyword::Contains,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_contains),
        validate: Some(validate::validate_contains),
    },
    KeywordSpec {
        name: "items",
        keyword: SchemaKeyword::Items,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_items),
        validate: Some(validate::validate_items),
    },
    KeywordSpec {
        name: "prefixItems",
        keyword: SchemaKeyword::PrefixItems,
        kind: KeywordKind::Applicator,
        parse: Some(parse::parse_prefix_items),
        validate: Some(validate::validate_prefix_items),
    },
    // -- Validators ---------------------------------------------------------
    KeywordSpec {
        name: "type",
        keyword: SchemaKeyword::Type,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_type),
        validate: Some(validate::validate_type),
    },
    KeywordSpec {
        name: "enum",
        keyword: SchemaKeyword::Enum,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_enum),
        validate: Some(validate::validate_enum),
    },
    KeywordSpec {
        name: "const",
        keyword: SchemaKeyword::Const,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_const),
        validate: Some(validate::validate_const),
    },
    KeywordSpec {
        name: "maxLength",
        keyword: SchemaKeyword::MaxLength,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_max_length),
        validate: Some(validate::validate_max_length),
    },
    KeywordSpec {
        name: "minLength",
        keyword: SchemaKeyword::MinLength,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_min_length),
        validate: Some(validate::validate_min_length),
    },
    KeywordSpec {
        name: "pattern",
        keyword: SchemaKeyword::Pattern,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_pattern),
        validate: Some(validate::validate_pattern),
    },
    KeywordSpec {
        name: "exclusiveMaximum",
        keyword: SchemaKeyword::ExclusiveMaximum,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_exclusive_maximum),
        validate: Some(validate::validate_exclusive_maximum),
    },
    KeywordSpec {
        name: "exclusiveMinimum",
        keyword: SchemaKeyword::ExclusiveMinimum,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_exclusive_minimum),
        validate: Some(validate::validate_exclusive_minimum),
    },
    KeywordSpec {
        name: "maximum",
        keyword: SchemaKeyword::Maximum,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_maximum),
        validate: Some(validate::validate_maximum),
    },
    KeywordSpec {
        name: "minimum",
        keyword: SchemaKeyword::Minimum,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_minimum),
        validate: Some(validate::validate_minimum),
    },
    KeywordSpec {
        name: "multipleOf",
        keyword: SchemaKeyword::MultipleOf,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_multiple_of),
        validate: Some(validate::validate_multiple_of),
    },
    KeywordSpec {
        name: "dependentRequired",
        keyword: SchemaKeyword::DependentRequired,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_dependent_required),
        validate: Some(validate::validate_dependent_required),
    },
    KeywordSpec {
        name: "maxProperties",
        keyword: SchemaKeyword::MaxProperties,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_max_properties),
        validate: Some(validate::validate_max_properties),
    },
    KeywordSpec {
        name: "minProperties",
        keyword: SchemaKeyword::MinProperties,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_min_properties),
        validate: Some(validate::validate_min_properties),
    },
    KeywordSpec {
        name: "required",
        keyword: SchemaKeyword::Required,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_required),
        validate: Some(validate::validate_required),
    },
    KeywordSpec {
        name: "maxItems",
        keyword: SchemaKeyword::MaxItems,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_max_items),
        validate: Some(validate::validate_max_items),
    },
    KeywordSpec {
        name: "minItems",
        keyword: SchemaKeyword::MinItems,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_min_items),
        validate: Some(validate::validate_min_items),
    },
    KeywordSpec {
        name: "maxContains",
        keyword: SchemaKeyword::MaxContains,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_max_contains),
        validate: None,
    },
    KeywordSpec {
        name: "minContains",
        keyword: SchemaKeyword::MinContains,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_min_contains),
        validate: None,
    },
    KeywordSpec {
        name: "uniqueItems",
        keyword: SchemaKeyword::UniqueItems,
        kind: KeywordKind::Validator,
        parse: Some(parse::parse_unique_items),
        validate: Some(validate::validate_unique_items),
    },
    // -- Metadata -----------------------------------------------------------
    KeywordSpec {
        name: "title",
        keyword: SchemaKeyword::Title,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_title),
        validate: None,
    },
    KeywordSpec {
        name: "description",
        keyword: SchemaKeyword::Description,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_description),
        validate: None,
    },
    KeywordSpec {
        name: "default",
        keyword: SchemaKeyword::Default,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_default),
        validate: None,
    },
    KeywordSpec {
        name: "deprecated",
        keyword: SchemaKeyword::Deprecated,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_deprecated),
        validate: None,
    },
    KeywordSpec {
        name: "examples",
        keyword: SchemaKeyword::Examples,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_examples),
        validate: None,
    },
    KeywordSpec {
        name: "readOnly",
        keyword: SchemaKeyword::ReadOnly,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_read_only),
        validate: None,
    },
    KeywordSpec {
        name: "writeOnly",
        keyword: SchemaKeyword::WriteOnly,
        kind: KeywordKind::Metadata,
        parse: Some(parse::parse_write_only),
        validate: None,
    },
    // -- Unevaluated --------------------------------------------------------
    KeywordSpec {
        name: "unevaluatedItems",
        keyword: SchemaKeyword::UnevaluatedItems,
        kind: KeywordKind::Unevaluated,
        parse: None,
        validate: None,
    },
    KeywordSpec {
        name: "unevaluatedProperties",
        keyword: SchemaKeyword::UnevaluatedProperties,
        kind: KeywordKind::Unevaluated,
        parse: None,
        validate: None,
    },
];
