//! # jsv-schema — JSON Schema 2020-12 Validation Core
//!
//! A two-phase pipeline over a pooled schema representation:
//!
//! 1. **Parse.** [`parse_schema_from_str`] / [`parse_schema_from_value`]
//!    walk the keyword dispatch table and materialize one [`Schema`] record
//!    per (sub)schema in the [`Context`]'s arena. `$ref` paths are queued,
//!    not chased.
//! 2. **Resolve.** [`resolve_refs`] rewrites each referring record in place
//!    with a copy of its `#/$defs/...` target, so validation needs no
//!    indirection.
//!
//! [`validate_value`] / [`validate_str`] then check any number of instances
//! against a root index, short-circuiting on the first failing keyword and
//! reporting exactly one [`SchemaError`] kind.
//!
//! ## Design
//!
//! All inter-schema edges are arena indices ([`SchemaIndex`]), never owning
//! references, which keeps `$ref` fusion a plain record copy and makes
//! cyclic ownership impossible. Each record carries a [`KeywordSet`] bit-set
//! of the keywords that actually appeared; the validator iterates that set
//! and nothing else, so absent keywords cost nothing.
//!
//! After resolution the context is read-only: validation takes `&Context`,
//! and independent validations may run on separate threads.

#![recursion_limit = "256"]

pub mod arena;
pub mod keyword;
pub mod parse;
pub mod resolve;
pub mod schema;
pub mod validate;

pub use arena::{Context, SchemaIndex};
pub use keyword::{KeywordKind, KeywordSet, SchemaKeyword, KEYWORD_COUNT};
pub use parse::{parse_schema_from_str, parse_schema_from_value};
pub use resolve::resolve_refs;
pub use schema::Schema;
pub use validate::{validate_str, validate_value};

// Re-export the foundational types so callers need only this crate.
pub use jsv_core::{deep_equal, InstanceType, SchemaError};
