#![deny(missing_docs)]

//! # jsv-core — Foundational Types for the jsv Validator
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde_json`
//! and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One flat error enumeration.** Every failure in the pipeline — schema
//!    parsing, regex compilation, reference resolution, instance validation —
//!    is a variant of [`SchemaError`]. Both phases short-circuit on the first
//!    error and propagate it unchanged, so a caller always receives exactly
//!    one failing kind.
//!
//! 2. **[`InstanceType`] captures 2020-12 numeric subtyping.** A JSON integer
//!    satisfies `number`; a float whose fractional part is exactly zero
//!    satisfies `integer`. Both rules live in one place,
//!    [`InstanceType::satisfied_by`], so no keyword handler re-derives them.
//!
//! 3. **[`deep_equal`] is the sole structural-equality path.** `enum`,
//!    `const`, and `uniqueItems` all compare through it, including the
//!    integer–float cross-equality rule.

pub mod equality;
pub mod error;
pub mod instance;

pub use equality::deep_equal;
pub use error::SchemaError;
pub use instance::InstanceType;
