// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Materialises one split of a corpus as a TaggingDataset and
// reports on a single encoded row:
//
//   Step 1: Load saved vocabularies, if a directory was given
//   Step 2: Set up the requested split   (Layer 4 - data)
//   Step 3: Encode the requested row and render a report
//
// Inspecting a non-train split requires --vocab-dir, because
// fresh vocabularies can only be built when train is requested —
// the same rule the library enforces.
//
// Returns the report as a String; Layer 1 decides how to show it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

use crate::data::setup::{setup_datasets, SplitSelection};
use crate::infra::vocab_store::VocabStore;

// Inspection is a read-only CPU path — the plain ndarray backend
// is all it needs.
type InspectBackend = burn::backend::NdArray;

// ─── Configuration ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    pub dataset:   String,
    pub root:      String,
    pub split:     String,
    pub index:     usize,
    pub vocab_dir: Option<String>,
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    /// Create a new InspectUseCase with the given configuration
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Execute the inspection and return a printable report
    pub fn execute(&self) -> Result<String> {
        let cfg = &self.config;

        // ── Step 1: Load saved vocabularies when supplied ─────────────────────
        let vocabs = match &cfg.vocab_dir {
            Some(dir) => Some(VocabStore::new(dir.as_str()).load()?),
            None      => None,
        };

        // ── Step 2: Set up the requested split ────────────────────────────────
        let device   = Default::default();
        let datasets = setup_datasets::<InspectBackend>(
            &cfg.dataset,
            Path::new(&cfg.root),
            vocabs,
            SplitSelection::One(cfg.split.clone()),
            &device,
        )?;
        let dataset = datasets
            .get(&cfg.split)
            .context("requested split missing from setup result")?;

        // ── Step 3: Encode the requested row and render ───────────────────────
        let encoded = dataset.get_item(cfg.index)?;
        let row     = dataset
            .row(cfg.index)
            .context("row disappeared between encode and report")?;
        let vocabs  = dataset.vocabs();

        let mut report = String::new();
        writeln!(
            report,
            "{} '{}': {} rows, {} columns",
            cfg.dataset,
            cfg.split,
            dataset.len(),
            vocabs.len()
        )?;
        writeln!(report, "Row {}:", cfg.index)?;

        for (idx, tensor) in encoded.iter().enumerate() {
            let ids = tensor
                .clone()
                .into_data()
                .convert::<i32>()
                .to_vec::<i32>()
                .map_err(|e| anyhow::anyhow!("Cannot read tensor data: {e:?}"))?;
            let tokens = row.column(idx).unwrap_or(&[]);
            writeln!(
                report,
                "  column {} ({} entries): {:?} -> {:?}",
                idx,
                vocabs[idx].len(),
                tokens,
                ids
            )?;
        }

        Ok(report)
    }
}
