// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `build-vocab` — builds and saves per-column vocabularies
//   2. `inspect`     — materialises a split and prints one row

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildVocabArgs, Commands, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "seqtag",
    version = "0.1.0",
    about = "Build per-column vocabularies from sequence-tagging corpora and inspect the encoded datasets."
)]
pub struct Cli {
    /// The subcommand to run (build-vocab or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::BuildVocab(args) => Self::run_build_vocab(args),
            Commands::Inspect(args)    => Self::run_inspect(args),
        }
    }

    /// Handles the `build-vocab` subcommand
    fn run_build_vocab(args: BuildVocabArgs) -> Result<()> {
        use crate::application::build_vocab_use_case::BuildVocabUseCase;

        tracing::info!("Building vocabularies for dataset: {}", args.dataset);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = BuildVocabUseCase::new(args.into());
        use_case.execute()?;

        println!("Vocabulary build complete.");
        Ok(())
    }

    /// Handles the `inspect` subcommand
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(args.into());
        let report   = use_case.execute()?;

        println!("{report}");
        Ok(())
    }
}
