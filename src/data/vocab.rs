// ============================================================
// Layer 4 — Vocabulary (Symbol Table)
// ============================================================
// Maps tokens to dense non-negative integer ids and back.
//
// How ids are assigned:
//   - Reserved tokens come first, in the order given
//     (by convention <unk> = 0, <pad> = 1)
//   - Remaining tokens follow by descending corpus frequency;
//     ties keep first-appearance order, so construction is
//     fully deterministic for a given token stream
//
// The default index is the open-vocabulary fallback: once it is
// bound to <unk>, looking up a token that was never seen during
// construction resolves to the <unk> id instead of failing.
// This is a deliberate design choice, not an error path.
//
// A Vocabulary is built once, then shared read-only — there is
// no way to add tokens after construction.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Reserved token for anything outside the vocabulary
pub const UNK_TOKEN: &str = "<unk>";

/// Reserved token for sequence padding
pub const PAD_TOKEN: &str = "<pad>";

// ─── Vocab ────────────────────────────────────────────────────────────────────
/// One column's token ↔ id mapping with unknown-token fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocab {
    /// Forward mapping: token string → id
    token_ids: AHashMap<String, u32>,

    /// Reverse mapping: ids are dense, so position == id
    tokens: Vec<String>,

    /// Id returned for tokens not in the forward mapping.
    /// None until bound via set_default_token.
    default_index: Option<u32>,
}

impl Vocab {
    /// Build a vocabulary from a token stream.
    ///
    /// `specials` are inserted first in the given order and are
    /// exempt from frequency ordering; every remaining distinct
    /// token follows by descending frequency (first seen wins ties).
    /// The default index is NOT set here — callers bind it
    /// explicitly, normally to `<unk>`.
    pub fn from_tokens<I, S>(stream: I, specials: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Count frequencies while remembering first-seen positions
        // so the sort below stays deterministic
        let mut counts: AHashMap<String, (usize, usize)> = AHashMap::new();
        let mut seen = 0usize;

        for token in stream {
            let entry = counts
                .entry(token.as_ref().to_string())
                .or_insert_with(|| {
                    seen += 1;
                    (0, seen)
                });
            entry.0 += 1;
        }

        // Frequency descending, then first appearance
        let mut ordered: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        let mut vocab = Self {
            token_ids: AHashMap::new(),
            tokens: Vec::new(),
            default_index: None,
        };

        for special in specials {
            vocab.push(special);
        }
        for (token, _) in &ordered {
            // push() skips tokens already present, so a special
            // occurring in the data keeps its reserved id
            vocab.push(token);
        }

        vocab
    }

    /// Insert a token if absent; returns its id either way
    fn push(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_ids.get(token) {
            return id;
        }
        let id = self.tokens.len() as u32;
        self.tokens.push(token.to_string());
        self.token_ids.insert(token.to_string(), id);
        id
    }

    /// Bind the default (fallback) index to an existing token.
    /// Fails if the token is not in the vocabulary.
    pub fn set_default_token(&mut self, token: &str) -> Result<u32> {
        let id = self
            .id(token)
            .ok_or_else(|| DataError::UnknownToken(token.to_string()))?;
        self.default_index = Some(id);
        Ok(id)
    }

    /// Exact lookup — None if the token was never seen
    #[inline]
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_ids.get(token).copied()
    }

    /// Lookup with unknown-token fallback.
    /// None only when the token is absent AND no default index is set.
    #[inline]
    pub fn id_or_default(&self, token: &str) -> Option<u32> {
        self.id(token).or(self.default_index)
    }

    /// Reverse lookup: the token string for an id
    #[inline]
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|s| s.as_str())
    }

    /// The fallback id, if one has been bound
    pub fn default_index(&self) -> Option<u32> {
        self.default_index
    }

    /// Whether the token has an id of its own
    pub fn contains(&self, token: &str) -> bool {
        self.token_ids.contains_key(token)
    }

    /// Number of distinct tokens (reserved ones included)
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the vocabulary holds no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specials_come_first() {
        let vocab = Vocab::from_tokens(["dog", "dog", "cat"], &[UNK_TOKEN, PAD_TOKEN]);
        assert_eq!(vocab.id(UNK_TOKEN), Some(0));
        assert_eq!(vocab.id(PAD_TOKEN), Some(1));
        assert!(vocab.contains("dog"));
        assert!(vocab.contains("cat"));
    }

    #[test]
    fn test_frequency_orders_ids() {
        // "b" appears 3 times, "a" twice, "c" once →
        // after the two specials: b=2, a=3, c=4
        let vocab = Vocab::from_tokens(
            ["a", "b", "c", "b", "a", "b"],
            &[UNK_TOKEN, PAD_TOKEN],
        );
        assert_eq!(vocab.id("b"), Some(2));
        assert_eq!(vocab.id("a"), Some(3));
        assert_eq!(vocab.id("c"), Some(4));
    }

    #[test]
    fn test_frequency_tie_keeps_first_seen_order() {
        // same count each — ids follow appearance order
        let vocab = Vocab::from_tokens(["x", "y", "z"], &[UNK_TOKEN, PAD_TOKEN]);
        assert_eq!(vocab.id("x"), Some(2));
        assert_eq!(vocab.id("y"), Some(3));
        assert_eq!(vocab.id("z"), Some(4));
    }

    #[test]
    fn test_unknown_token_resolves_to_unk() {
        let mut vocab = Vocab::from_tokens(["dog"], &[UNK_TOKEN, PAD_TOKEN]);
        vocab.set_default_token(UNK_TOKEN).unwrap();

        // An unseen token must resolve to the same id as an
        // explicit <unk> lookup
        assert_eq!(vocab.id_or_default("zebra"), vocab.id(UNK_TOKEN));
        // Known tokens are unaffected by the fallback
        assert_eq!(vocab.id_or_default("dog"), vocab.id("dog"));
    }

    #[test]
    fn test_no_default_index_means_no_fallback() {
        let vocab = Vocab::from_tokens(["dog"], &[UNK_TOKEN, PAD_TOKEN]);
        assert_eq!(vocab.default_index(), None);
        assert_eq!(vocab.id_or_default("zebra"), None);
    }

    #[test]
    fn test_set_default_token_requires_membership() {
        let mut vocab = Vocab::from_tokens(["dog"], &[PAD_TOKEN]);
        assert!(vocab.set_default_token(UNK_TOKEN).is_err());
    }

    #[test]
    fn test_reverse_lookup() {
        let vocab = Vocab::from_tokens(["dog"], &[UNK_TOKEN, PAD_TOKEN]);
        let id    = vocab.id("dog").unwrap();
        assert_eq!(vocab.token(id), Some("dog"));
        assert_eq!(vocab.token(99), None);
    }

    #[test]
    fn test_duplicate_specials_in_data_keep_reserved_id() {
        // <pad> occurring in the data must not get a second id
        let vocab = Vocab::from_tokens([PAD_TOKEN, "dog"], &[UNK_TOKEN, PAD_TOKEN]);
        assert_eq!(vocab.id(PAD_TOKEN), Some(1));
        assert_eq!(vocab.len(), 3);
    }
}
