use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Unable to read dictionary '{}': {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Expected {expected} tiles, got {got}")]
    TileCount { expected: usize, got: usize },

    #[error("Tile {tile} is not a valid {expected}-character string (got {got} characters)")]
    TileSize {
        tile: usize,
        expected: usize,
        got: usize,
    },

    #[error("Tile {tile} is empty")]
    EmptyTile { tile: usize },

    #[error("Candidate search exceeded the limit of {limit} words")]
    CandidateLimit { limit: usize },

    #[error("Invalid puzzle on line {line}: {message}")]
    BatchLine { line: usize, message: String },
}

impl From<toml::de::Error> for PuzzleError {
    fn from(err: toml::de::Error) -> Self {
        PuzzleError::Config(format!("TOML parse error: {}", err))
    }
}
