//! # Reference Resolution
//!
//! Runs once after the root schema is parsed and before any validation. Each
//! pending `$ref` path is resolved by JSON-pointer descent from the root —
//! through `$defs` for the first segment, then through `other_keys` for any
//! deeper segments — and the referring record is overwritten in place with a
//! copy of the target record. After a successful pass no indirection remains
//! at validate time.
//!
//! Only relative fragment pointers of the form `#/$defs/...` (and the bare
//! `#`, which refers to the document itself and is left alone) are
//! supported. Cross-document references and anchor references are rejected.

use jsv_core::SchemaError;

use crate::arena::{Context, SchemaIndex};

/// Resolve every pending `$ref` against the given root schema.
///
/// On success, every referrer has its target's fields fused in. The
/// referrer keeps its own `name`, which its parent applicator relies on to
/// associate the record with an instance key.
pub fn resolve_refs(root: SchemaIndex, ctx: &mut Context) -> Result<(), SchemaError> {
    let pending = ctx.take_pending_refs();
    for (referrer, path) in pending {
        resolve_one(root, referrer, &path, ctx)?;
    }
    Ok(())
}

fn resolve_one(
    root: SchemaIndex,
    referrer: SchemaIndex,
    path: &str,
    ctx: &mut Context,
) -> Result<(), SchemaError> {
    let mut segments = path.split('/');
    if segments.next() != Some("#") {
        return Err(SchemaError::RefNonSchema);
    }

    // A bare "#" points at the document itself; the referrer stays as-is.
    let Some(container) = segments.next() else {
        return Ok(());
    };
    if container != "$defs" {
        return Err(SchemaError::RefNonSchema);
    }

    let name = segments.next().ok_or(SchemaError::RefPathNotFoundInDefs)?;
    let mut target = *ctx
        .schema(root)
        .defs
        .get(name)
        .ok_or(SchemaError::RefPathNotFoundInDefs)?;

    // Deeper segments descend through non-vocabulary containers.
    for segment in segments {
        target = *ctx
            .schema(target)
            .other_keys
            .get(segment)
            .ok_or(SchemaError::RefSchemaNotFound)?;
    }

    let mut fused = ctx.schema(target).clone();
    fused.name = ctx.schema(referrer).name.clone();
    *ctx.schema_mut(referrer) = fused;
    Ok(())
}
