// ============================================================
// Layer 4 — Tag File Reader
// ============================================================
// Reads the column-per-field text format shared by POS/chunking
// corpora:
//
//   - one token per line, its annotations in further fields
//   - blank line ends a sentence
//   - lines starting with '#' are comments
//
// Example (tab-separated, 3 columns):
//
//   The     DET   DT
//   dog     NOUN  NN
//   barks   VERB  VBZ
//           ← blank line: sentence boundary
//   ...
//
// Each sentence block becomes one TaggedRow by transposing the
// lines into per-column token sequences. The block's first line
// fixes the column count; any later line in the same block with
// a different field count is malformed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use crate::domain::row::TaggedRow;
use crate::error::{DataError, Result};

/// How one line is split into column fields
#[derive(Debug, Clone, Copy)]
pub enum ColumnSeparator {
    /// Exactly one tab between fields (UDPOS-style)
    Tab,
    /// Any run of whitespace (CoNLL-2000-style)
    Whitespace,
}

impl ColumnSeparator {
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Self::Tab        => line.split('\t').collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }
}

/// Read every sentence block of a tag file into TaggedRows.
pub fn read_tag_file(path: &Path, separator: ColumnSeparator) -> Result<Vec<TaggedRow>> {
    let file = File::open(path).map_err(|err| DataError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut columns: Vec<Vec<String>> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| DataError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let line = line.trim();

        // Blank line: close the current sentence block
        if line.is_empty() {
            if !columns.is_empty() {
                rows.push(TaggedRow::new(mem::take(&mut columns)));
            }
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let fields = separator.split(line);

        // First line of a block fixes the column count
        if columns.is_empty() {
            columns = vec![Vec::new(); fields.len()];
        }
        if fields.len() != columns.len() {
            return Err(DataError::Malformed {
                path:   path.to_path_buf(),
                line:   number + 1,
                reason: format!(
                    "expected {} columns, found {}",
                    columns.len(),
                    fields.len()
                ),
            });
        }

        for (idx, field) in fields.iter().enumerate() {
            columns[idx].push(field.to_string());
        }
    }

    // Don't forget a final block without a trailing blank line
    if !columns.is_empty() {
        rows.push(TaggedRow::new(columns));
    }

    tracing::debug!("Read {} sentences from '{}'", rows.len(), path.display());
    Ok(rows)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Write `content` to a unique temp file and return its path.
    /// std::env::temp_dir keeps the tests free of extra deps.
    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("seqtag_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_blank_lines_separate_sentences() {
        let path = temp_file(
            "blocks.txt",
            "The\tDET\ndog\tNOUN\n\nIt\tPRON\nbarks\tVERB\n",
        );
        let rows = read_tag_file(&path, ColumnSeparator::Tab).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].column_count(), 2);
        assert_eq!(
            rows[0].column(0),
            Some(&["The".to_string(), "dog".to_string()][..])
        );
        assert_eq!(
            rows[1].column(1),
            Some(&["PRON".to_string(), "VERB".to_string()][..])
        );
    }

    #[test]
    fn test_final_block_without_trailing_blank_line() {
        let path = temp_file("no_trailing.txt", "word\tNOUN");
        let rows = read_tag_file(&path, ColumnSeparator::Tab).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_comments_are_skipped() {
        let path = temp_file("comments.txt", "# sent_id = 1\nword\tNOUN\n\n");
        let rows = read_tag_file(&path, ColumnSeparator::Tab).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column(0), Some(&["word".to_string()][..]));
    }

    #[test]
    fn test_whitespace_separator() {
        let path = temp_file("spaces.txt", "Confidence NN B-NP\nin IN B-PP\n\n");
        let rows = read_tag_file(&path, ColumnSeparator::Whitespace).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].column_count(), 3);
        assert_eq!(
            rows[0].column(2),
            Some(&["B-NP".to_string(), "B-PP".to_string()][..])
        );
    }

    #[test]
    fn test_ragged_line_is_malformed() {
        let path = temp_file("ragged.txt", "The\tDET\ndog\tNOUN\tNN\n\n");
        let err  = read_tag_file(&path, ColumnSeparator::Tab).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, DataError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_tag_file(
            Path::new("/nonexistent/seqtag/file.txt"),
            ColumnSeparator::Tab,
        )
        .unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
