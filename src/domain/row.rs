// ============================================================
// Layer 3 — TaggedRow Domain Type
// ============================================================
// Represents one example of a sequence-tagging corpus in domain
// terms: an ordered set of columns, where each column holds the
// token sequence for one annotation layer.
//
// Example (UDPOS-style, 3 columns):
//   column 0: ["The", "dog",  "barks"]   ← words
//   column 1: ["DET", "NOUN", "VERB"]    ← POS tags
//   column 2: ["DT",  "NN",   "VBZ"]     ← PTB tags
//
// All rows of one split must carry the same number of columns —
// that count is what the vocabulary set and transform pipeline
// are aligned to. The invariant is enforced downstream (at
// vocabulary construction and again at item access), not here;
// a TaggedRow is plain data.
//
// Token-granularity corpora (one word per row) are the same
// shape with length-1 sequences in every column.

use serde::{Deserialize, Serialize};

/// One labelled example: C columns, each a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRow {
    /// Columns in corpus order — words first, then one column
    /// per tag layer
    pub columns: Vec<Vec<String>>,
}

impl TaggedRow {
    /// Create a new TaggedRow from its columns
    pub fn new(columns: Vec<Vec<String>>) -> Self {
        Self { columns }
    }

    /// Build a token-granularity row: one single-token column per
    /// entry. Convenient for corpora (and tests) where each row is
    /// one word plus its tags.
    pub fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            columns: tokens.iter().map(|t| vec![t.to_string()]).collect(),
        }
    }

    /// Number of columns in this row
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The token sequence of one column, if it exists
    pub fn column(&self, index: usize) -> Option<&[String]> {
        self.columns.get(index).map(|c| c.as_slice())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        let row = TaggedRow::new(vec![
            vec!["The".to_string(), "dog".to_string()],
            vec!["DET".to_string(), "NOUN".to_string()],
        ]);
        assert_eq!(row.column_count(), 2);
    }

    #[test]
    fn test_from_tokens_is_single_token_columns() {
        let row = TaggedRow::from_tokens(&["The", "DET"]);
        assert_eq!(row.column_count(), 2);
        assert_eq!(row.column(0), Some(&["The".to_string()][..]));
        assert_eq!(row.column(1), Some(&["DET".to_string()][..]));
    }

    #[test]
    fn test_missing_column_is_none() {
        let row = TaggedRow::from_tokens(&["The", "DET"]);
        assert!(row.column(2).is_none());
    }
}
