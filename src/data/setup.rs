// ============================================================
// Layer 4 — Dataset Orchestrator
// ============================================================
// Turns a dataset name, a root directory, and a split selection
// into one TaggingDataset per requested split, in order:
//
//   Step 1: Resolve the corpus in the registry
//   Step 2: Normalise the split selection against its valid set
//   Step 3: Fetch raw rows per split (fully into memory)
//   Step 4: Build vocabularies from train, or validate supplied ones
//   Step 5: Construct the shared transform pipeline
//   Step 6: Wrap each split into a TaggingDataset
//
// All raw rows are materialised eagerly — vocabulary construction
// and cross-split reuse need a concrete in-memory row set. The
// expensive part (token → id → tensor) stays lazy in the datasets.
//
// Every dataset returned from one call shares the IDENTICAL
// vocabulary set and transform pipeline (the same Arcs, not
// copies) — that is what lets callers pull the vocabularies off
// the train dataset and feed them to a later call for a held-out
// split.

use std::path::Path;
use std::sync::Arc;

use burn::prelude::*;

use crate::corpus;
use crate::data::dataset::TaggingDataset;
use crate::data::transform::TransformPipeline;
use crate::data::vocab::Vocab;
use crate::data::vocab_builder::build_vocab;
use crate::domain::row::TaggedRow;
use crate::domain::traits::CorpusSource;
use crate::error::{DataError, Result};

// ─── SplitSelection ───────────────────────────────────────────────────────────
/// Which splits to materialise: the corpus default set, one split
/// by name, or an explicit ordered list.
#[derive(Debug, Clone)]
pub enum SplitSelection {
    /// The corpus's full default split set
    Default,
    /// A single named split
    One(String),
    /// An explicit list, materialised in the given order
    Many(Vec<String>),
}

impl From<&str> for SplitSelection {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for SplitSelection {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Vec<String>> for SplitSelection {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<&[&str]> for SplitSelection {
    fn from(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

// ─── SplitDatasets ────────────────────────────────────────────────────────────
/// The datasets of one setup call, ordered by request. All of them
/// share the identical vocabulary set and transform pipeline.
#[derive(Debug)]
pub struct SplitDatasets<B: Backend> {
    datasets: Vec<(String, TaggingDataset<B>)>,
}

impl<B: Backend> SplitDatasets<B> {
    /// Look a dataset up by split name
    pub fn get(&self, split: &str) -> Option<&TaggingDataset<B>> {
        self.datasets
            .iter()
            .find(|(name, _)| name == split)
            .map(|(_, dataset)| dataset)
    }

    /// Split names in request order
    pub fn names(&self) -> Vec<&str> {
        self.datasets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate (name, dataset) pairs in request order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaggingDataset<B>)> {
        self.datasets
            .iter()
            .map(|(name, dataset)| (name.as_str(), dataset))
    }

    /// Number of splits materialised
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether no splits were materialised
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Unwrap a single-split request into its one dataset.
    /// None when more (or fewer) than one split was requested.
    pub fn into_single(mut self) -> Option<TaggingDataset<B>> {
        if self.datasets.len() == 1 {
            self.datasets.pop().map(|(_, dataset)| dataset)
        } else {
            None
        }
    }
}

impl<B: Backend> IntoIterator for SplitDatasets<B> {
    type Item = (String, TaggingDataset<B>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.datasets.into_iter()
    }
}

// ─── Orchestration ────────────────────────────────────────────────────────────

/// Resolve the selection against the corpus's valid split names.
/// Fails before any row is fetched when a name is unrecognised.
fn resolve_splits(corpus: &dyn CorpusSource, selection: &SplitSelection) -> Result<Vec<String>> {
    let requested: Vec<String> = match selection {
        SplitSelection::Default => corpus
            .default_splits()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        SplitSelection::One(name)   => vec![name.clone()],
        SplitSelection::Many(names) => names.clone(),
    };

    for name in &requested {
        if !corpus.valid_splits().contains(&name.as_str()) {
            return Err(DataError::InvalidSplit {
                dataset: corpus.name().to_string(),
                split:   name.clone(),
                valid:   corpus.valid_splits(),
            });
        }
    }

    Ok(requested)
}

/// Build per-split datasets from already-fetched rows.
///
/// This is the vocabulary-resolution core, split out from the
/// disk-facing `setup_datasets` so in-memory corpora (and tests)
/// can use it directly:
///
///   - no vocabularies supplied → "train" must be present in
///     `raw`; vocabularies are built from its rows
///   - vocabularies supplied → their count must match the column
///     count of the first non-empty split (when every requested
///     split is empty there is nothing to validate against)
pub fn setup_from_rows<B: Backend>(
    raw: Vec<(String, Vec<TaggedRow>)>,
    vocabs: Option<Arc<Vec<Vocab>>>,
    device: &B::Device,
) -> Result<SplitDatasets<B>> {
    // ── Step 4: Resolve the vocabulary set ────────────────────────────────────
    let vocabs = match vocabs {
        None => {
            let (_, train_rows) = raw
                .iter()
                .find(|(name, _)| name == "train")
                .ok_or(DataError::MissingTrainSplit)?;
            tracing::info!("Building vocabularies from the train split");
            Arc::new(build_vocab(train_rows)?)
        }
        Some(vocabs) => {
            if let Some(first) = raw.iter().find_map(|(_, rows)| rows.first()) {
                if vocabs.len() != first.column_count() {
                    return Err(DataError::VocabColumnMismatch {
                        vocabs:  vocabs.len(),
                        columns: first.column_count(),
                    });
                }
            }
            vocabs
        }
    };

    // ── Step 5: One shared transform pipeline ─────────────────────────────────
    let transforms = Arc::new(TransformPipeline::<B>::new(
        Arc::clone(&vocabs),
        device.clone(),
    ));

    // ── Step 6: Wrap every split around the shared handles ────────────────────
    let mut datasets = Vec::with_capacity(raw.len());
    for (name, rows) in raw {
        tracing::debug!("Building dataset for split '{}' ({} rows)", name, rows.len());
        let dataset = TaggingDataset::new(rows, Arc::clone(&vocabs), Arc::clone(&transforms))?;
        datasets.push((name, dataset));
    }

    Ok(SplitDatasets { datasets })
}

/// Set up per-split datasets for a registered corpus.
///
/// `vocabs` of None builds fresh vocabularies from the train split
/// (which must then be among the requested splits); `Some` reuses a
/// set obtained from an earlier call's `vocabs()`, validated against
/// the data's column count.
pub fn setup_datasets<B: Backend>(
    dataset_name: &str,
    root: &Path,
    vocabs: Option<Arc<Vec<Vocab>>>,
    split: SplitSelection,
    device: &B::Device,
) -> Result<SplitDatasets<B>> {
    // ── Step 1: Registry lookup ───────────────────────────────────────────────
    let corpus = corpus::lookup(dataset_name)?;

    // ── Step 2: Normalise the split selection ─────────────────────────────────
    let requested = resolve_splits(corpus.as_ref(), &split)?;
    tracing::info!("Setting up {} splits {:?}", dataset_name, requested);

    // ── Step 3: Fetch raw rows, fully into memory ─────────────────────────────
    let mut raw = Vec::with_capacity(requested.len());
    for name in requested {
        let rows = corpus.fetch(root, &name)?;
        tracing::debug!("Fetched split '{}': {} rows", name, rows.len());
        raw.push((name, rows));
    }

    setup_from_rows(raw, vocabs, device)
}

// ─── Public Entry Points ──────────────────────────────────────────────────────

/// Universal Dependencies English Web Treebank (POS tagging).
///
/// Splits: train, valid, test (all three by default). If "train"
/// is not among the requested splits, a vocabulary set from an
/// earlier call must be supplied to encode the others.
///
/// `root` is the directory the corpus files live under; see the
/// corpus module for the expected file layout.
pub fn udpos<B: Backend>(
    root: &Path,
    vocabs: Option<Arc<Vec<Vocab>>>,
    split: SplitSelection,
    device: &B::Device,
) -> Result<SplitDatasets<B>> {
    setup_datasets::<B>(corpus::UDPOS, root, vocabs, split, device)
}

/// CoNLL-2000 chunking corpus.
///
/// Splits: train, test (both by default). As with UDPOS, requests
/// without "train" need a supplied vocabulary set.
pub fn conll2000_chunking<B: Backend>(
    root: &Path,
    vocabs: Option<Arc<Vec<Vocab>>>,
    split: SplitSelection,
    device: &B::Device,
) -> Result<SplitDatasets<B>> {
    setup_datasets::<B>(corpus::CONLL2000_CHUNKING, root, vocabs, split, device)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn device() -> <TestBackend as Backend>::Device {
        Default::default()
    }

    fn ids_of(tensor: Tensor<TestBackend, 1, Int>) -> Vec<i32> {
        tensor.into_data().convert::<i32>().to_vec::<i32>().unwrap()
    }

    fn train_rows() -> Vec<TaggedRow> {
        vec![
            TaggedRow::from_tokens(&["The", "DET"]),
            TaggedRow::from_tokens(&["dog", "NOUN"]),
        ]
    }

    #[test]
    fn test_train_only_builds_vocabs_and_encodes() {
        let datasets = setup_from_rows::<TestBackend>(
            vec![("train".to_string(), train_rows())],
            None,
            &device(),
        )
        .unwrap();

        let train  = datasets.get("train").unwrap();
        let vocabs = train.vocabs();
        assert_eq!(vocabs.len(), 2);
        assert_eq!(vocabs[0].len(), 4); // <unk>, <pad>, The, dog
        assert_eq!(vocabs[1].len(), 4); // <unk>, <pad>, DET, NOUN

        let item = train.get_item(0).unwrap();
        assert_eq!(
            ids_of(item[0].clone()),
            vec![vocabs[0].id("The").unwrap() as i32]
        );
        assert_eq!(
            ids_of(item[1].clone()),
            vec![vocabs[1].id("DET").unwrap() as i32]
        );
    }

    #[test]
    fn test_no_vocabs_without_train_is_a_config_error() {
        let err = setup_from_rows::<TestBackend>(
            vec![("test".to_string(), train_rows())],
            None,
            &device(),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::MissingTrainSplit));
    }

    #[test]
    fn test_supplied_vocab_count_must_match_columns() {
        // 2 vocabularies built on 2-column data…
        let vocabs = Arc::new(build_vocab(&train_rows()).unwrap());

        // …reused against 3-column data must fail before any
        // dataset is constructed
        let three_col = vec![("test".to_string(), vec![
            TaggedRow::from_tokens(&["a", "b", "c"]),
        ])];
        let err = setup_from_rows::<TestBackend>(three_col, Some(vocabs), &device())
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::VocabColumnMismatch { vocabs: 2, columns: 3 }
        ));
    }

    #[test]
    fn test_all_splits_share_the_same_vocab_instance() {
        let datasets = setup_from_rows::<TestBackend>(
            vec![
                ("train".to_string(), train_rows()),
                ("valid".to_string(), vec![TaggedRow::from_tokens(&["cat", "NOUN"])]),
            ],
            None,
            &device(),
        )
        .unwrap();

        let train_vocabs = datasets.get("train").unwrap().vocabs();
        let valid_vocabs = datasets.get("valid").unwrap().vocabs();
        // Identity, not equality: the same allocation
        assert!(Arc::ptr_eq(&train_vocabs, &valid_vocabs));
    }

    #[test]
    fn test_reused_vocabs_encode_unseen_tokens_as_unk() {
        // Build on train…
        let train = setup_from_rows::<TestBackend>(
            vec![("train".to_string(), train_rows())],
            None,
            &device(),
        )
        .unwrap();
        let vocabs = train.get("train").unwrap().vocabs();

        // …then encode a test split containing an unseen word
        let test = setup_from_rows::<TestBackend>(
            vec![("test".to_string(), vec![
                TaggedRow::from_tokens(&["zebra", "NOUN"]),
            ])],
            Some(Arc::clone(&vocabs)),
            &device(),
        )
        .unwrap();

        let item   = test.get("test").unwrap().get_item(0).unwrap();
        let unk_id = vocabs[0].id(crate::data::vocab::UNK_TOKEN).unwrap() as i32;
        assert_eq!(ids_of(item[0].clone()), vec![unk_id]);

        // The supplied set is handed back untouched
        assert!(Arc::ptr_eq(&vocabs, &test.get("test").unwrap().vocabs()));
    }

    #[test]
    fn test_all_empty_splits_with_supplied_vocabs() {
        // Nothing to validate the count against — a length-0 view
        // per split is returned rather than an error
        let vocabs   = Arc::new(build_vocab(&train_rows()).unwrap());
        let datasets = setup_from_rows::<TestBackend>(
            vec![("test".to_string(), Vec::new())],
            Some(vocabs),
            &device(),
        )
        .unwrap();
        assert_eq!(datasets.get("test").unwrap().len(), 0);
    }

    #[test]
    fn test_datasets_keep_request_order() {
        let datasets = setup_from_rows::<TestBackend>(
            vec![
                ("valid".to_string(), vec![TaggedRow::from_tokens(&["cat", "NOUN"])]),
                ("train".to_string(), train_rows()),
            ],
            None,
            &device(),
        )
        .unwrap();
        assert_eq!(datasets.names(), vec!["valid", "train"]);
    }

    #[test]
    fn test_into_single() {
        let datasets = setup_from_rows::<TestBackend>(
            vec![("train".to_string(), train_rows())],
            None,
            &device(),
        )
        .unwrap();
        assert!(datasets.into_single().is_some());
    }

    #[test]
    fn test_unknown_dataset_name_is_rejected() {
        let err = setup_datasets::<TestBackend>(
            "NoSuchCorpus",
            Path::new("."),
            None,
            SplitSelection::Default,
            &device(),
        )
        .unwrap_err();
        assert!(matches!(err, DataError::UnknownDataset(name) if name == "NoSuchCorpus"));
    }

    #[test]
    fn test_invalid_split_name_is_rejected_before_fetch() {
        // "dev" is not a valid UDPOS split name ("valid" is) —
        // rejected up front, no file access attempted
        let err = udpos::<TestBackend>(
            Path::new("/nonexistent"),
            None,
            SplitSelection::One("dev".to_string()),
            &device(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidSplit { split, .. } if split == "dev"
        ));
    }

    #[test]
    fn test_split_selection_conversions() {
        assert!(matches!(SplitSelection::from("train"), SplitSelection::One(_)));
        assert!(matches!(
            SplitSelection::from(&["train", "test"][..]),
            SplitSelection::Many(names) if names.len() == 2
        ));
    }
}
