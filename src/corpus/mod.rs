// ============================================================
// Layer 4 — Corpus Sources
// ============================================================
// On-disk readers for the supported sequence-tagging corpora,
// plus the name registry the orchestrator resolves against.
//
// Downloading is out of scope: each source reads files the
// caller has already placed under the root directory, in the
// layout its module documents.

/// Shared blank-line-block tag file parser
pub mod reader;

/// Universal Dependencies POS-tagged treebank
pub mod udpos;

/// CoNLL-2000 chunking corpus
pub mod conll2000;

use crate::domain::traits::CorpusSource;
use crate::error::{DataError, Result};

pub use conll2000::Conll2000Corpus;
pub use udpos::UdposCorpus;

/// Registered name of the UDPOS corpus
pub const UDPOS: &str = "UDPOS";

/// Registered name of the CoNLL-2000 chunking corpus
pub const CONLL2000_CHUNKING: &str = "CoNLL2000Chunking";

/// Every registered dataset name
pub const DATASET_NAMES: &[&str] = &[UDPOS, CONLL2000_CHUNKING];

/// Resolve a dataset name to its corpus source.
pub fn lookup(name: &str) -> Result<Box<dyn CorpusSource>> {
    match name {
        UDPOS               => Ok(Box::new(UdposCorpus)),
        CONLL2000_CHUNKING  => Ok(Box::new(Conll2000Corpus)),
        other               => Err(DataError::UnknownDataset(other.to_string())),
    }
}
