// ============================================================
// Layer 4 — CoNLL-2000 Corpus Source
// ============================================================
// The CoNLL-2000 shared task corpus for text chunking.
// Three space-separated columns per token line: word, POS tag,
// chunk tag (BIO scheme). No validation split was published —
// only train and test exist.
//
// Expected layout under the root directory:
//
//   root/
//     conll2000/
//       train.txt
//       test.txt

use std::path::Path;

use crate::corpus::reader::{read_tag_file, ColumnSeparator};
use crate::domain::row::TaggedRow;
use crate::domain::traits::CorpusSource;
use crate::error::{DataError, Result};

const SPLITS: &[&str] = &["train", "test"];

/// Reads the CoNLL-2000 chunking files from disk.
#[derive(Debug)]
pub struct Conll2000Corpus;

impl CorpusSource for Conll2000Corpus {
    fn name(&self) -> &'static str {
        "CoNLL2000Chunking"
    }

    fn valid_splits(&self) -> &'static [&'static str] {
        SPLITS
    }

    fn default_splits(&self) -> &'static [&'static str] {
        SPLITS
    }

    fn fetch(&self, root: &Path, split: &str) -> Result<Vec<TaggedRow>> {
        if !SPLITS.contains(&split) {
            return Err(DataError::InvalidSplit {
                dataset: self.name().to_string(),
                split:   split.to_string(),
                valid:   SPLITS,
            });
        }
        let path = root.join("conll2000").join(format!("{split}.txt"));
        read_tag_file(&path, ColumnSeparator::Whitespace)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_valid_split_exists() {
        let corpus = Conll2000Corpus;
        assert_eq!(corpus.valid_splits(), &["train", "test"]);

        let err = corpus.fetch(Path::new("."), "valid").unwrap_err();
        assert!(matches!(err, DataError::InvalidSplit { .. }));
    }
}
