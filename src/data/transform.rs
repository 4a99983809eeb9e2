// ============================================================
// Layer 4 — Transform Pipeline
// ============================================================
// Converts one raw column value (a token sequence) into an
// integer tensor, per column:
//
//   tokens ──vocab lookup──▶ ids ──from_ints──▶ Tensor<B, 1, Int>
//
// The pipeline owns the shared vocabulary set and the tensor
// device, and is index-aligned to the columns: column i is
// always encoded with vocabulary i. Lookups go through the
// vocabulary's default index, so tokens unseen at construction
// time encode to the <unk> id rather than failing.
//
// Encoding is pure and side-effect free — the pipeline holds no
// mutable state, so concurrent readers need no locking.
//
// B is the Burn Backend (e.g. NdArray, Wgpu) — generic so the
// same pipeline works on any device.

use std::sync::Arc;

use burn::prelude::*;

use crate::data::vocab::Vocab;
use crate::domain::row::TaggedRow;
use crate::error::{DataError, Result};

// ─── TransformPipeline ────────────────────────────────────────────────────────
/// Per-column token-sequence → integer-tensor transforms, sharing
/// one vocabulary set by reference.
#[derive(Debug, Clone)]
pub struct TransformPipeline<B: Backend> {
    /// Shared, read-only vocabulary set — index-aligned to columns
    vocabs: Arc<Vec<Vocab>>,

    /// The device to create tensors on
    device: B::Device,
}

impl<B: Backend> TransformPipeline<B> {
    /// Create a pipeline over an existing vocabulary set
    pub fn new(vocabs: Arc<Vec<Vocab>>, device: B::Device) -> Self {
        Self { vocabs, device }
    }

    /// Number of per-column transforms (== number of vocabularies)
    pub fn len(&self) -> usize {
        self.vocabs.len()
    }

    /// Whether the pipeline covers no columns at all
    pub fn is_empty(&self) -> bool {
        self.vocabs.is_empty()
    }

    /// Encode one column's token sequence with that column's
    /// vocabulary.
    ///
    /// # Errors
    /// - `IndexOutOfRange` if `index` does not name a column
    /// - `UnknownToken` only when the vocabulary has no default
    ///   index — builder-made vocabularies always do
    pub fn encode_column(&self, index: usize, tokens: &[String]) -> Result<Tensor<B, 1, Int>> {
        let vocab = self.vocabs.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.vocabs.len(),
        })?;

        // Token → id, falling back to the default index for
        // anything unseen during vocabulary construction.
        // Burn uses i32 for Int tensor construction.
        let ids: Vec<i32> = tokens
            .iter()
            .map(|token| {
                vocab
                    .id_or_default(token)
                    .map(|id| id as i32)
                    .ok_or_else(|| DataError::UnknownToken(token.clone()))
            })
            .collect::<Result<_>>()?;

        Ok(Tensor::<B, 1, Int>::from_ints(ids.as_slice(), &self.device))
    }

    /// Encode a whole row, one tensor per column.
    /// Validates the row's column count against the pipeline length
    /// before touching any vocabulary.
    pub fn encode_row(&self, row: &TaggedRow) -> Result<Vec<Tensor<B, 1, Int>>> {
        if row.column_count() != self.len() {
            return Err(DataError::RowShapeMismatch {
                expected: self.len(),
                found:    row.column_count(),
            });
        }

        row.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| self.encode_column(idx, column))
            .collect()
    }
}
