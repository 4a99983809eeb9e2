// ============================================================
// Layer 2 — BuildVocabUseCase
// ============================================================
// Builds the per-column vocabularies of a corpus from its train
// split and persists them for later runs:
//
//   Step 1: Resolve the corpus        (Layer 4 - corpus)
//   Step 2: Fetch the train rows      (Layer 4 - corpus)
//   Step 3: Build the vocabularies    (Layer 4 - data)
//   Step 4: Save them as JSON         (Layer 6 - infra)
//
// A later `inspect --vocab-dir ...` (or any external consumer of
// the saved file) then encodes valid/test splits with the exact
// ids fixed here.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::corpus;
use crate::data::vocab_builder::build_vocab;
use crate::infra::vocab_store::VocabStore;

// ─── Configuration ────────────────────────────────────────────────────────────
/// Everything a vocabulary-building run needs.
/// Serialisable so a run's inputs can be recorded alongside its
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildVocabConfig {
    pub dataset: String,
    pub root:    String,
    pub out_dir: String,
}

// ─── BuildVocabUseCase ────────────────────────────────────────────────────────
pub struct BuildVocabUseCase {
    config: BuildVocabConfig,
}

impl BuildVocabUseCase {
    /// Create a new BuildVocabUseCase with the given configuration
    pub fn new(config: BuildVocabConfig) -> Self {
        Self { config }
    }

    /// Execute the build end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Resolve the corpus ────────────────────────────────────────
        let corpus = corpus::lookup(&cfg.dataset)?;

        // ── Step 2: Fetch the train rows ──────────────────────────────────────
        tracing::info!("Fetching '{}' train split from '{}'", cfg.dataset, cfg.root);
        let rows = corpus.fetch(Path::new(&cfg.root), "train")?;
        tracing::info!("Fetched {} training rows", rows.len());

        // ── Step 3: Build one vocabulary per column ───────────────────────────
        let vocabs = build_vocab(&rows)?;
        for (idx, vocab) in vocabs.iter().enumerate() {
            tracing::info!("Column {}: {} entries", idx, vocab.len());
        }

        // ── Step 4: Persist for later runs ────────────────────────────────────
        VocabStore::new(&cfg.out_dir).save(&vocabs)?;

        Ok(())
    }
}
