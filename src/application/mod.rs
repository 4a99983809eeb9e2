// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (building vocabularies or inspecting a split).
//
// Rules for this layer:
//   - No encoding or tensor math here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.

// Build and persist per-column vocabularies from a train split
pub mod build_vocab_use_case;

// Materialise one split and report on an encoded row
pub mod inspect_use_case;
