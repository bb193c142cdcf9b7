//! Candidate word generation.
//!
//! The search walks the trie and the tile layout together: from the current
//! trie node it may take any letter of any tile except the tile it just used,
//! as long as the trie has an edge for that letter. Every complete word of at
//! least the minimum length reached this way is a candidate.
//!
//! The number of paths grows quickly with the number of tiles and the overlap
//! between their alphabets. Callers handling untrusted layouts should set
//! [`SearchLimits::max_candidates`] or [`SearchLimits::max_word_length`].

use crate::error::{PuzzleError, Result};
use crate::tile::TileLayout;
use crate::trie::{NodeId, Trie};
use crate::MIN_WORD_LENGTH;
use log::{debug, trace};
use std::collections::HashSet;

/// Bounds applied to a candidate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Shortest word recorded as a candidate.
    pub min_word_length: usize,
    /// Stop descending once a word reaches this many letters.
    pub max_word_length: Option<usize>,
    /// Fail once more than this many candidates have been found.
    pub max_candidates: Option<usize>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: None,
            max_candidates: None,
        }
    }
}

/// Depth-first search over tile letters constrained by a trie.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSearch {
    limits: SearchLimits,
}

impl CandidateSearch {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Seed the search from every letter of every tile and collect all
    /// candidates in discovery order. Words reachable by several paths are
    /// reported once per path.
    pub fn generate(&self, trie: &Trie, layout: &TileLayout) -> Result<Vec<String>> {
        let mut found = Vec::new();
        if !self.seed(trie, layout, &mut found) {
            // max_candidates is necessarily set when the search stops early
            let limit = self.limits.max_candidates.unwrap_or(found.len());
            return Err(PuzzleError::CandidateLimit { limit });
        }
        debug!("Found {} candidate words for {}", found.len(), layout);
        Ok(found)
    }

    /// Returns false if the candidate limit stopped the search.
    fn seed(&self, trie: &Trie, layout: &TileLayout, found: &mut Vec<String>) -> bool {
        for tile in layout.tiles() {
            for &c in &tile.letters {
                let Some(node) = trie.child(trie.root(), c) else {
                    continue;
                };
                trace!("Seeding search at '{}' from tile {}", c, tile.index);
                let before = found.len();
                if !self.search(trie, node, c.to_string(), 1, layout, tile.index, found) {
                    return false;
                }
                trace!("Seed '{}' produced {} words", c, found.len() - before);
            }
        }
        true
    }

    fn over_limit(&self, found: &[String]) -> bool {
        self.limits
            .max_candidates
            .is_some_and(|limit| found.len() > limit)
    }

    /// Explore every letter reachable from `node` without reusing `last_tile`.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        trie: &Trie,
        node: NodeId,
        word: String,
        len: usize,
        layout: &TileLayout,
        last_tile: usize,
        found: &mut Vec<String>,
    ) -> bool {
        let is_leaf = !trie.has_children(node);
        if trie.is_end_of_word(node) && len >= self.limits.min_word_length {
            if is_leaf {
                found.push(word);
                return !self.over_limit(found);
            }
            found.push(word.clone());
            if self.over_limit(found) {
                return false;
            }
        }

        if is_leaf {
            return true;
        }
        if let Some(max) = self.limits.max_word_length {
            if len >= max {
                return true;
            }
        }

        for tile in layout.tiles() {
            if tile.index == last_tile {
                continue;
            }
            for &c in &tile.letters {
                if let Some(next) = trie.child(node, c) {
                    let mut extended = word.clone();
                    extended.push(c);
                    if !self.search(trie, next, extended, len + 1, layout, tile.index, found) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Every dictionary word of at least four letters that can be chained from
/// the layout, in discovery order, duplicates included.
pub fn generate_candidates(trie: &Trie, layout: &TileLayout) -> Vec<String> {
    let mut found = Vec::new();
    CandidateSearch::default().seed(trie, layout, &mut found);
    debug!("Found {} candidate words for {}", found.len(), layout);
    found
}

/// Drop repeated words, keeping the first occurrence of each.
pub fn dedup_preserving_order(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
