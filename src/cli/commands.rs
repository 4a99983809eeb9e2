// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `build-vocab` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)

use clap::{Args, Subcommand};

use crate::application::build_vocab_use_case::BuildVocabConfig;
use crate::application::inspect_use_case::InspectConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build per-column vocabularies from a corpus train split
    BuildVocab(BuildVocabArgs),

    /// Materialise one split and print an encoded row
    Inspect(InspectArgs),
}

/// All arguments for the `build-vocab` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct BuildVocabArgs {
    /// Registered dataset name (UDPOS or CoNLL2000Chunking)
    #[arg(long, default_value = "UDPOS")]
    pub dataset: String,

    /// Directory the corpus files live under
    #[arg(long, default_value = ".data")]
    pub root: String,

    /// Directory to write vocabs.json into
    #[arg(long, default_value = "vocabs")]
    pub out: String,
}

/// Convert CLI BuildVocabArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<BuildVocabArgs> for BuildVocabConfig {
    fn from(a: BuildVocabArgs) -> Self {
        BuildVocabConfig {
            dataset: a.dataset,
            root:    a.root,
            out_dir: a.out,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Registered dataset name (UDPOS or CoNLL2000Chunking)
    #[arg(long, default_value = "UDPOS")]
    pub dataset: String,

    /// Directory the corpus files live under
    #[arg(long, default_value = ".data")]
    pub root: String,

    /// Which split to materialise
    #[arg(long, default_value = "train")]
    pub split: String,

    /// Which row to encode and print
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Directory holding a previously saved vocabs.json.
    /// Required when the split is not train.
    #[arg(long)]
    pub vocab_dir: Option<String>,
}

impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            dataset:   a.dataset,
            root:      a.root,
            split:     a.split,
            index:     a.index,
            vocab_dir: a.vocab_dir,
        }
    }
}
