// ============================================================
// Layer 4 — Tagging Dataset
// ============================================================
// An immutable, randomly-indexable view over one split's rows.
//
// The dataset owns its rows but shares the vocabulary set and
// transform pipeline by reference (Arc) with every other split
// from the same setup call — vocabs() hands that same reference
// back so callers can reuse it for a held-out split later.
//
// Transforms are applied lazily on access: nothing is tensorised
// up front, trading repeated lookup cost for lower peak memory.
// Lookups are O(1) amortised, so recomputing per access is cheap,
// and item access is a pure function of fixed state — safe to
// call from any number of readers at once.

use std::sync::Arc;

use burn::data::dataset::Dataset;
use burn::prelude::*;

use crate::data::transform::TransformPipeline;
use crate::data::vocab::Vocab;
use crate::domain::row::TaggedRow;
use crate::error::{DataError, Result};

/// One encoded example: a length-C list of integer tensors,
/// index-aligned to the corpus columns.
pub type EncodedRow<B> = Vec<Tensor<B, 1, Int>>;

// ─── TaggingDataset ───────────────────────────────────────────────────────────
/// Random-access dataset of integer-encoded tagged rows.
#[derive(Debug)]
pub struct TaggingDataset<B: Backend> {
    /// This split's raw rows, fully materialised
    rows: Vec<TaggedRow>,

    /// Vocabulary set shared with every sibling split
    vocabs: Arc<Vec<Vocab>>,

    /// Per-column transforms shared with every sibling split
    transforms: Arc<TransformPipeline<B>>,
}

impl<B: Backend> TaggingDataset<B> {
    /// Wrap one split's rows around the shared vocabularies and
    /// transforms.
    ///
    /// Validates the first row's column count against the
    /// vocabulary count; an empty split is a valid length-0 view
    /// (there is nothing to check it against).
    pub fn new(
        rows: Vec<TaggedRow>,
        vocabs: Arc<Vec<Vocab>>,
        transforms: Arc<TransformPipeline<B>>,
    ) -> Result<Self> {
        if let Some(first) = rows.first() {
            if first.column_count() != vocabs.len() {
                return Err(DataError::VocabColumnMismatch {
                    vocabs:  vocabs.len(),
                    columns: first.column_count(),
                });
            }
        }
        Ok(Self { rows, vocabs, transforms })
    }

    /// Number of rows in this split
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the split holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Encode the row at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` for `index >= len()`
    /// - `RowShapeMismatch` if this row's column count disagrees
    ///   with the transform pipeline (a heterogeneous row that
    ///   slipped past construction — caught here, at access time)
    pub fn get_item(&self, index: usize) -> Result<EncodedRow<B>> {
        let row = self.rows.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })?;
        self.transforms.encode_row(row)
    }

    /// The raw (untransformed) row at `index`, if it exists
    pub fn row(&self, index: usize) -> Option<&TaggedRow> {
        self.rows.get(index)
    }

    /// The shared vocabulary set — the same Arc every sibling
    /// split holds, not a copy. Hand this to a later setup call
    /// to encode a held-out split with identical ids.
    pub fn vocabs(&self) -> Arc<Vec<Vocab>> {
        Arc::clone(&self.vocabs)
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// Plugs the view into Burn's data tooling (DataLoader et al.).
// The trait's Option-based contract maps error cases to None.
impl<B: Backend> Dataset<EncodedRow<B>> for TaggingDataset<B> {
    fn get(&self, index: usize) -> Option<EncodedRow<B>> {
        self.get_item(index).ok()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
