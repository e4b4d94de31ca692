//! # Schema Arena and Context
//!
//! The [`Context`] owns every schema record produced by a parse, the list of
//! `$ref` paths still awaiting resolution, and the index of the root schema.
//! Records are addressed exclusively through [`SchemaIndex`] values, which
//! stay valid across arena growth because the arena only ever appends.
//!
//! The context is single-threaded while parsing. Once parsing and ref
//! resolution are done, validation takes the context by shared reference
//! only, so independent validations may run concurrently.

use crate::schema::Schema;

/// Opaque handle to one record in a context's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaIndex(pub(crate) usize);

impl std::fmt::Display for SchemaIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "schema#{}", self.0)
    }
}

/// Owner of the schema arena, the pending-refs list, and the root index.
///
/// Dropped atomically: every record, compiled regex, and owned value in the
/// arena is released together.
#[derive(Debug, Default)]
pub struct Context {
    arena: Vec<Schema>,
    pending_refs: Vec<(SchemaIndex, String)>,
    root: Option<SchemaIndex>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with arena capacity reserved for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            pending_refs: Vec::new(),
            root: None,
        }
    }

    /// Append a zero-initialized record and return its index.
    pub fn alloc_empty(&mut self) -> SchemaIndex {
        let idx = SchemaIndex(self.arena.len());
        self.arena.push(Schema::default());
        idx
    }

    /// Borrow the record at `idx`.
    ///
    /// Indices are only ever minted by [`Context::alloc_empty`] on this
    /// context, so the lookup is infallible for any index the caller
    /// legitimately holds.
    pub fn schema(&self, idx: SchemaIndex) -> &Schema {
        &self.arena[idx.0]
    }

    /// Mutably borrow the record at `idx`.
    pub fn schema_mut(&mut self, idx: SchemaIndex) -> &mut Schema {
        &mut self.arena[idx.0]
    }

    /// Queue a `$ref` path for the post-parse resolution pass.
    pub fn record_pending_ref(&mut self, referrer: SchemaIndex, path: String) {
        self.pending_refs.push((referrer, path));
    }

    /// Drain the pending-refs list for resolution.
    pub(crate) fn take_pending_refs(&mut self) -> Vec<(SchemaIndex, String)> {
        std::mem::take(&mut self.pending_refs)
    }

    /// Number of `$ref` paths still awaiting resolution.
    pub fn pending_ref_count(&self) -> usize {
        self.pending_refs.len()
    }

    /// Record which schema is the document root.
    pub fn set_root(&mut self, idx: SchemaIndex) {
        self.root = Some(idx);
    }

    /// The root schema index, if one has been registered.
    pub fn root(&self) -> Option<SchemaIndex> {
        self.root
    }

    /// Number of records in the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the arena holds no records.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
