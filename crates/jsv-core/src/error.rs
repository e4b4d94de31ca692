//! # Error Hierarchy
//!
//! One flat error enumeration for the entire validation pipeline, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Variants are grouped by origin: JSON decoding, schema-shape errors raised
//! while parsing a schema document, regex compilation, per-keyword validation
//! failures, boolean-literal schemas, and reference resolution. The enum is
//! `Clone + PartialEq + Eq` so callers and tests can compare kinds directly;
//! variants that wrap an underlying library failure flatten it to its display
//! string to keep that property.

use thiserror::Error;

/// Every error the schema pipeline can produce.
///
/// Validation reports exactly one failing keyword — the first one encountered
/// in dispatch order for the schema under evaluation — and never attempts to
/// enumerate all failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    // -- JSON decoding ------------------------------------------------------
    /// The schema or instance text is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    // -- Schema-shape errors (parse phase) ----------------------------------
    /// A `type` entry names no known instance type.
    #[error("schema declares an unknown instance type")]
    InvalidInstanceType,

    /// A keyword that requires a number was given another JSON kind.
    #[error("schema keyword requires a number")]
    InvalidNumberType,

    /// A keyword that requires a non-negative integer was given another JSON
    /// kind, a negative value, or a number with a fractional part.
    #[error("schema keyword requires a non-negative integer")]
    InvalidIntegerType,

    /// A keyword that requires an object was given another JSON kind, or the
    /// schema document itself is neither an object nor a boolean.
    #[error("schema keyword requires an object")]
    InvalidObjectType,

    /// A keyword that requires a string was given another JSON kind.
    #[error("schema keyword requires a string")]
    InvalidStringType,

    /// A keyword that requires an array was given another JSON kind.
    #[error("schema keyword requires an array")]
    InvalidArrayType,

    /// The `enum` keyword was given something other than an array.
    #[error("enum requires an array of values")]
    InvalidEnumType,

    /// The `type` keyword was given something other than a string or an array
    /// of strings.
    #[error("type requires a string or an array of strings")]
    ExpectedArrayOrString,

    // -- Regex compilation --------------------------------------------------
    /// Regex compilation failed for a reason other than syntax or size.
    #[error("regex creation failed: {0}")]
    RegexCreation(String),

    /// The pattern is not a valid regular expression.
    #[error("regex syntax error: {0}")]
    RegexParser(String),

    /// The pattern compiled to a program exceeding the size limit.
    #[error("regex compilation error: {0}")]
    RegexCompiler(String),

    // -- Validation failures, one kind per keyword --------------------------
    /// The instance does not match the schema's declared type.
    #[error("instance does not match the declared type")]
    Type,

    /// The instance equals no element of the enumeration.
    #[error("instance matches no enum value")]
    Enum,

    /// The instance does not equal the constant.
    #[error("instance does not equal the const value")]
    Const,

    /// String is shorter than `minLength` code points.
    #[error("string is shorter than minLength")]
    MinLength,

    /// String is longer than `maxLength` code points.
    #[error("string is longer than maxLength")]
    MaxLength,

    /// String contains no match for the pattern.
    #[error("string does not match the pattern")]
    Pattern,

    /// Number is below the inclusive minimum.
    #[error("number is below the minimum")]
    Minimum,

    /// Number is above the inclusive maximum.
    #[error("number is above the maximum")]
    Maximum,

    /// Number is not strictly above the exclusive minimum.
    #[error("number does not exceed the exclusive minimum")]
    ExclusiveMinimum,

    /// Number is not strictly below the exclusive maximum.
    #[error("number is not below the exclusive maximum")]
    ExclusiveMaximum,

    /// Number is not an exact multiple of `multipleOf`.
    #[error("number is not a multiple of multipleOf")]
    MultipleOf,

    /// A required property is missing from the object.
    #[error("object is missing a required property")]
    Required,

    /// A property named by `dependentRequired` is missing while its trigger
    /// property is present.
    #[error("object is missing a dependently required property")]
    DependentRequired,

    /// Object has fewer properties than `minProperties`.
    #[error("object has fewer properties than minProperties")]
    MinProperties,

    /// Object has more properties than `maxProperties`.
    #[error("object has more properties than maxProperties")]
    MaxProperties,

    /// Array has fewer elements than `minItems`.
    #[error("array has fewer elements than minItems")]
    MinItems,

    /// Array has more elements than `maxItems`.
    #[error("array has more elements than maxItems")]
    MaxItems,

    /// Array contains two deep-equal elements while `uniqueItems` is true.
    #[error("array elements are not unique")]
    UniqueItems,

    /// No array element matches the `contains` subschema.
    #[error("array contains no element matching the contains subschema")]
    Contains,

    /// Fewer elements match `contains` than `minContains`.
    #[error("array has fewer matching elements than minContains")]
    MinContains,

    /// More elements match `contains` than `maxContains`.
    #[error("array has more matching elements than maxContains")]
    MaxContains,

    /// An element past the prefix failed the `items` subschema.
    #[error("array element does not match the items subschema")]
    Items,

    /// An element within the prefix failed its positional subschema.
    #[error("array element does not match its prefixItems subschema")]
    PrefixItems,

    /// A subschema listed in `allOf` failed.
    #[error("instance fails a subschema of allOf")]
    AllOf,

    /// Every subschema listed in `anyOf` failed.
    #[error("instance fails every subschema of anyOf")]
    AnyOf,

    /// The number of passing `oneOf` subschemas is not exactly one.
    #[error("instance does not match exactly one subschema of oneOf")]
    OneOf,

    /// The `if` subschema passed but `then` failed.
    #[error("instance matches if but fails then")]
    IfThen,

    /// The `if` subschema failed and `else` also failed.
    #[error("instance fails if and also fails else")]
    IfElse,

    /// The `not` subschema succeeded.
    #[error("instance matches the not subschema")]
    Not,

    /// The instance failed a `dependentSchemas` subschema whose trigger
    /// property is present.
    #[error("instance fails a dependent schema")]
    DependentSchemas,

    /// A property matched by neither `properties` nor `patternProperties`
    /// failed the `additionalProperties` subschema.
    #[error("additional property fails its subschema")]
    AdditionalProperties,

    /// A property name failed the `propertyNames` subschema.
    #[error("property name fails the propertyNames subschema")]
    PropertyNames,

    /// A property matched by a `patternProperties` regex failed the paired
    /// subschema.
    #[error("pattern property fails its subschema")]
    PatternProperties,

    // -- Boolean-literal schemas --------------------------------------------
    /// The schema is the literal `false`, which rejects every instance.
    #[error("schema is the literal false")]
    BoolSchemaFalse,

    // -- Reference resolution -----------------------------------------------
    /// The `$ref` path is not a supported relative fragment pointer.
    #[error("unsupported $ref shape; only #/$defs/... fragments are resolved")]
    RefNonSchema,

    /// A segment of the `$ref` path names no schema under its container.
    #[error("$ref path segment does not resolve to a schema")]
    RefSchemaNotFound,

    /// The first `$ref` path segment names no entry in the root's `$defs`.
    #[error("$ref path not found in $defs")]
    RefPathNotFoundInDefs,
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_parse_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let kind = SchemaError::from(err);
        assert!(matches!(kind, SchemaError::JsonParse(_)));
        assert!(format!("{kind}").starts_with("JSON parse error"));
    }

    #[test]
    fn validation_kinds_compare_directly() {
        assert_eq!(SchemaError::Minimum, SchemaError::Minimum);
        assert_ne!(SchemaError::Minimum, SchemaError::Maximum);
    }

    #[test]
    fn display_names_the_keyword() {
        assert!(format!("{}", SchemaError::MinContains).contains("minContains"));
        assert!(format!("{}", SchemaError::MultipleOf).contains("multipleOf"));
        assert!(format!("{}", SchemaError::BoolSchemaFalse).contains("false"));
    }

    #[test]
    fn ref_errors_are_distinct() {
        assert_ne!(SchemaError::RefNonSchema, SchemaError::RefSchemaNotFound);
        assert_ne!(
            SchemaError::RefSchemaNotFound,
            SchemaError::RefPathNotFoundInDefs
        );
    }
}
