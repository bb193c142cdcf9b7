//! # Letterbox Solver
//!
//! Solves tile-chain word puzzles: given a handful of letter tiles, find two
//! dictionary words that chain end-to-start, never take consecutive letters
//! from the same tile, and together use every letter on the board.
//!
//! A dictionary is loaded into a [`Trie`], candidate words are enumerated by a
//! depth-first walk over the tiles ([`generate_candidates`]), and candidates
//! are paired up by [`find_solutions`].

pub mod config;
pub mod dictionary;
pub mod error;
pub mod search;
pub mod solver;
pub mod tile;
pub mod trie;

pub use config::SolverConfig;
pub use dictionary::{load_dictionary, read_dictionary};
pub use error::{PuzzleError, Result};
pub use search::{generate_candidates, CandidateSearch, SearchLimits};
pub use solver::{chained_pairs, find_solutions, PuzzleSolver, Solution, SolutionPair};
pub use tile::{read_layouts, Tile, TileLayout, TileShape};
pub use trie::{NodeId, Trie};

/// Shortest word accepted as a candidate
pub const MIN_WORD_LENGTH: usize = 4;

/// Number of tiles in a standard puzzle
pub const TILE_COUNT: usize = 4;

/// Letters per tile in a standard puzzle
pub const TILE_SIZE: usize = 3;
