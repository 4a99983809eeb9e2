// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists a vocabulary set (one Vocab per column) as a single
// pretty-printed JSON file in a configured directory.
//
// The round-trip preserves everything lookups depend on: token
// ids, ordering, and the default (fallback) index — a split
// encoded after a load gets exactly the ids it would have got
// before the save.
//
// File naming convention:
//   {dir}/vocabs.json

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::data::vocab::Vocab;

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    /// Create a new VocabStore rooted at a directory.
    /// The directory itself is created lazily on save.
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Full path of the JSON file this store reads and writes
    pub fn path(&self) -> PathBuf {
        self.dir.join("vocabs.json")
    }

    /// Whether a vocabulary set has been saved here before
    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Write the vocabulary set as pretty JSON
    pub fn save(&self, vocabs: &[Vocab]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create directory '{}'", self.dir.display()))?;

        let path = self.path();
        let json = serde_json::to_string_pretty(vocabs)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write vocabularies to '{}'", path.display()))?;

        tracing::info!(
            "Saved {} vocabularies to '{}'",
            vocabs.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a previously saved vocabulary set.
    /// Returns an Arc so the caller can share it across datasets
    /// without copying.
    pub fn load(&self) -> Result<Arc<Vec<Vocab>>> {
        let path = self.path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read vocabularies from '{}'", path.display()))?;
        let vocabs: Vec<Vocab> = serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse vocabularies in '{}'", path.display()))?;

        tracing::info!(
            "Loaded {} vocabularies from '{}'",
            vocabs.len(),
            path.display()
        );
        Ok(Arc::new(vocabs))
    }
}
