// ============================================================
// Layer 4 — UDPOS Corpus Source
// ============================================================
// Universal Dependencies English Web Treebank, POS-tagged.
// Three columns per token line: word, universal POS tag, PTB tag.
//
// Expected layout under the root directory (the layout the
// published archive extracts to — note the split called "valid"
// here lives in a file named "dev"):
//
//   root/
//     en-ud-v2/
//       en-ud-tag.v2.train.txt
//       en-ud-tag.v2.dev.txt
//       en-ud-tag.v2.test.txt

use std::path::Path;

use crate::corpus::reader::{read_tag_file, ColumnSeparator};
use crate::domain::row::TaggedRow;
use crate::domain::traits::CorpusSource;
use crate::error::{DataError, Result};

const SPLITS: &[&str] = &["train", "valid", "test"];

/// Reads the UDPOS tag files from disk.
/// Implements the CorpusSource trait from Layer 3.
#[derive(Debug)]
pub struct UdposCorpus;

impl UdposCorpus {
    fn file_name(split: &str) -> String {
        // The archive names the validation file "dev"
        let part = if split == "valid" { "dev" } else { split };
        format!("en-ud-tag.v2.{part}.txt")
    }
}

impl CorpusSource for UdposCorpus {
    fn name(&self) -> &'static str {
        "UDPOS"
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
        let path = root.join("en-ud-v2").join(Self::file_name(split));
        read_tag_file(&path, ColumnSeparator::Tab)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_split_names() {
        let corpus = UdposCorpus;
        assert_eq!(corpus.valid_splits(), &["train", "valid", "test"]);
    }

    #[test]
    fn test_valid_split_maps_to_dev_file() {
        assert_eq!(UdposCorpus::file_name("valid"), "en-ud-tag.v2.dev.txt");
        assert_eq!(UdposCorpus::file_name("train"), "en-ud-tag.v2.train.txt");
    }

    #[test]
    fn test_unknown_split_is_rejected() {
        let corpus = UdposCorpus;
        let err    = corpus.fetch(Path::new("."), "dev").unwrap_err();
        assert!(matches!(err, DataError::InvalidSplit { .. }));
    }
}
