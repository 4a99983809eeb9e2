// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw corpus rows all the
// way to indexable tensor datasets.
//
// The pipeline flows in this order:
//
//   corpus files (via Layer 4 corpus sources)
//       │
//       ▼
//   build_vocab        → one symbol table per column
//       │
//       ▼
//   TransformPipeline  → token sequence → id tensor, per column
//       │
//       ▼
//   TaggingDataset     → implements Burn's Dataset trait,
//       │                 applies transforms lazily per item
//       ▼
//   setup_datasets     → orchestrates the above per split
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.

/// Per-column symbol table with unknown-token fallback
pub mod vocab;

/// Builds one vocabulary per corpus column
pub mod vocab_builder;

/// Per-column token → integer-tensor transforms
pub mod transform;

/// Immutable random-access view over one split
pub mod dataset;

/// Split resolution, vocabulary policy, and dataset assembly
pub mod setup;
