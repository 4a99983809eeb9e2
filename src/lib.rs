//! seqtag — per-column vocabularies and tensor datasets for
//! sequence-tagging corpora.
//!
//! The crate turns raw multi-column token streams (word / POS /
//! chunk-tag files) into consistent per-column symbol tables and
//! exposes each corpus split as a randomly-indexable dataset of
//! integer-encoded tensors, built on Burn's `Dataset` trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use seqtag::{udpos, SplitSelection};
//!
//! type B = burn::backend::NdArray;
//!
//! let device   = Default::default();
//! let datasets = udpos::<B>(Path::new(".data"), None, SplitSelection::Default, &device)?;
//!
//! // Vocabularies are built on train and shared by identity with
//! // every other returned split
//! let train = datasets.get("train").unwrap();
//! let item  = train.get_item(0)?;
//! # Ok::<(), seqtag::DataError>(())
//! ```

pub mod error;

pub mod domain;

pub mod corpus;

pub mod data;

pub mod infra;

pub mod application;

pub mod cli;

pub use error::{DataError, Result};

pub use domain::row::TaggedRow;
pub use domain::traits::CorpusSource;

pub use data::dataset::{EncodedRow, TaggingDataset};
pub use data::setup::{
    conll2000_chunking, setup_datasets, setup_from_rows, udpos, SplitDatasets, SplitSelection,
};
pub use data::transform::TransformPipeline;
pub use data::vocab::{Vocab, PAD_TOKEN, UNK_TOKEN};
pub use data::vocab_builder::build_vocab;
