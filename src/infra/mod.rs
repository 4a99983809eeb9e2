// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in any
// specific business layer:
//
//   vocab_store.rs — Vocabulary persistence
//                    Saves a built vocabulary set as JSON and
//                    loads it back, so vocabularies built on the
//                    train split can encode a held-out split in
//                    a later process with identical ids.
//
// Why is this a separate layer?
//   Persistence is used by multiple use cases but belongs to
//   none of them. Keeping it here makes it easy to swap the
//   storage backend (e.g. a file store for an object store)
//   without touching the pipeline.

/// Vocabulary set saving and loading
pub mod vocab_store;
