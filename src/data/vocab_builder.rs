// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Builds one independent Vocab per column of a raw corpus.
//
// How it works:
//   1. Infer the column count C from the first row
//   2. Transpose the rows into C column streams
//      (every row is visited once per column — O(C·N) tokens)
//   3. Build a Vocab over each stream with <unk> and <pad>
//      reserved, then bind the fallback to <unk>
//
// Precondition: `rows` must be non-empty — the column count
// cannot be inferred from nothing, and guessing a zero-column
// vocabulary set would just defer the failure. An empty input
// is rejected with an explicit error instead.

use crate::data::vocab::{Vocab, PAD_TOKEN, UNK_TOKEN};
use crate::domain::row::TaggedRow;
use crate::error::{DataError, Result};

/// Build one vocabulary per column, in column order.
///
/// Every returned Vocab contains `<unk>` (id 0) and `<pad>` (id 1)
/// and has its default index bound to `<unk>`, so downstream
/// lookups of unseen tokens resolve silently to the unknown id.
///
/// # Errors
/// - `EmptyCorpus` if `rows` is empty
/// - `RowShapeMismatch` if any row's column count differs from
///   the first row's
pub fn build_vocab(rows: &[TaggedRow]) -> Result<Vec<Vocab>> {
    let first = rows.first().ok_or(DataError::EmptyCorpus)?;
    let total_columns = first.column_count();

    // ── Transpose rows into per-column token streams ──────────────────────────
    let mut columns: Vec<Vec<&str>> = (0..total_columns).map(|_| Vec::new()).collect();

    for row in rows {
        if row.column_count() != total_columns {
            return Err(DataError::RowShapeMismatch {
                expected: total_columns,
                found:    row.column_count(),
            });
        }
        for (idx, column) in row.columns.iter().enumerate() {
            for token in column {
                columns[idx].push(token.as_str());
            }
        }
    }

    // ── One Vocab per column, fallback bound to <unk> ─────────────────────────
    let mut vocabs = Vec::with_capacity(total_columns);
    for column in &columns {
        let mut vocab = Vocab::from_tokens(column.iter().copied(), &[UNK_TOKEN, PAD_TOKEN]);
        vocab.set_default_token(UNK_TOKEN)?;
        vocabs.push(vocab);
    }

    tracing::debug!(
        "Built {} vocabularies ({} rows, sizes {:?})",
        vocabs.len(),
        rows.len(),
        vocabs.iter().map(|v| v.len()).collect::<Vec<_>>(),
    );

    Ok(vocabs)
}
