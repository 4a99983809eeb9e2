// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - UdposCorpus implements CorpusSource
//   - Conll2000Corpus also implements CorpusSource
//   - The orchestration layer only sees CorpusSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.

use std::path::Path;

use crate::domain::row::TaggedRow;
use crate::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the raw rows of a named corpus
/// split from files under a root directory.
///
/// Implementations:
///   - UdposCorpus      → Universal Dependencies POS-tagged treebank
///   - Conll2000Corpus  → CoNLL-2000 chunking corpus
///
/// Fetching is a blocking call performed once per split; the
/// orchestrator keeps the returned rows in memory for the lifetime
/// of the datasets built from them.
pub trait CorpusSource: std::fmt::Debug {
    /// The registered name of this corpus (e.g. "UDPOS")
    fn name(&self) -> &'static str;

    /// Every split name this corpus recognises
    fn valid_splits(&self) -> &'static [&'static str];

    /// The splits materialised when the caller does not pick any
    fn default_splits(&self) -> &'static [&'static str];

    /// Read all rows of one split from disk.
    /// Fails with `InvalidSplit` for an unrecognised split name and
    /// with `Io`/`Malformed` for unreadable or misshapen files.
    fn fetch(&self, root: &Path, split: &str) -> Result<Vec<TaggedRow>>;
}
