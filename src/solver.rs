//! Pairing candidate words into full solutions.
//!
//! A solution is an ordered pair of candidates where the first word ends with
//! the letter the second word starts with, the two words are together at least
//! as long as the puzzle has letters, and between them they use every distinct
//! letter on the tiles. Letter coverage is checked by presence, not count.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::search::{dedup_preserving_order, CandidateSearch};
use crate::tile::TileLayout;
use crate::trie::Trie;
use log::{debug, info};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;

/// Two chained candidate words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionPair {
    pub first: String,
    pub second: String,
}

impl SolutionPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Combined number of letters in both words.
    pub fn letter_count(&self) -> usize {
        self.first.chars().count() + self.second.chars().count()
    }
}

impl fmt::Display for SolutionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Result of solving one puzzle
#[derive(Debug, Clone)]
pub struct Solution {
    pub candidates: Vec<String>,
    pub pairs: Vec<SolutionPair>,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        !self.pairs.is_empty()
    }

    /// The pair with the fewest letters, earliest first on ties.
    pub fn shortest(&self) -> Option<&SolutionPair> {
        self.pairs.iter().min_by_key(|p| p.letter_count())
    }
}

/// Per-word facts needed while pairing.
struct WordInfo<'a> {
    word: &'a str,
    first: char,
    last: char,
    len: usize,
}

fn word_infos(candidates: &[String]) -> Vec<WordInfo<'_>> {
    let mut infos: Vec<WordInfo> = candidates
        .iter()
        .filter_map(|w| {
            let first = w.chars().next()?;
            let last = w.chars().last()?;
            Some(WordInfo {
                word: w.as_str(),
                first,
                last,
                len: w.chars().count(),
            })
        })
        .collect();
    // stable, so equal-length words keep discovery order
    infos.sort_by_key(|w| Reverse(w.len));
    infos
}

/// Ordered pairs of distinct list positions whose words chain and are long
/// enough together. The same word appearing twice in `candidates` can pair
/// with itself.
pub fn chained_pairs(candidates: &[String], required_len: usize) -> Vec<SolutionPair> {
    let infos = word_infos(candidates);
    let mut pairs = Vec::new();
    for (i, a) in infos.iter().enumerate() {
        for (j, b) in infos.iter().enumerate() {
            if i != j && a.last == b.first && a.len + b.len >= required_len {
                pairs.push(SolutionPair::new(a.word, b.word));
            }
        }
    }
    pairs
}

/// Every chained pair that also covers all distinct required letters.
pub fn find_solutions(candidates: &[String], required_chars: &[char]) -> Vec<SolutionPair> {
    let required: BTreeSet<char> = required_chars.iter().copied().collect();
    let chained = chained_pairs(candidates, required_chars.len());
    debug!(
        "{} chained pairs before letter coverage check",
        chained.len()
    );

    chained
        .into_iter()
        .filter(|pair| {
            let used: BTreeSet<char> = pair.first.chars().chain(pair.second.chars()).collect();
            used == required
        })
        .collect()
}

/// Owns the dictionary trie and solves puzzles against it.
#[derive(Debug, Clone)]
pub struct PuzzleSolver {
    trie: Trie,
    config: SolverConfig,
}

impl PuzzleSolver {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, SolverConfig::default())
    }

    pub fn with_config<I, S>(words: I, config: SolverConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Trie::from_words(words);
        debug!(
            "Built trie with {} words in {} nodes",
            trie.word_count(),
            trie.node_count()
        );
        Self { trie, config }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Candidate words for `layout`, deduplicated if the config asks for it.
    pub fn candidates(&self, layout: &TileLayout) -> Result<Vec<String>> {
        let search = CandidateSearch::new(self.config.search_limits());
        let words = search.generate(&self.trie, layout)?;
        if self.config.dedup_candidates {
            Ok(dedup_preserving_order(words))
        } else {
            Ok(words)
        }
    }

    pub fn solve(&self, layout: &TileLayout) -> Result<Solution> {
        let candidates = self.candidates(layout)?;
        let pairs = find_solutions(&candidates, &layout.required_chars());
        info!(
            "{}: {} candidates, {} solutions",
            layout,
            candidates.len(),
            pairs.len()
        );
        Ok(Solution { candidates, pairs })
    }

    /// Solve independent puzzles in parallel. Results keep the input order.
    pub fn solve_batch(&self, layouts: &[TileLayout]) -> Vec<Result<Solution>> {
        layouts.par_iter().map(|layout| self.solve(layout)).collect()
    }
}
