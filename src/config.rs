use crate::error::{PuzzleError, Result};
use crate::search::SearchLimits;
use crate::tile::TileShape;
use crate::{MIN_WORD_LENGTH, TILE_COUNT, TILE_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default word list, one word per line.
pub const DEFAULT_DICTIONARY: &str = "words_alpha.txt";

/// Solver settings, optionally loaded from a TOML file.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```toml
/// dictionary = "/usr/share/dict/words"
/// max_candidates = 50000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub dictionary: PathBuf,
    pub min_word_length: usize,
    pub max_word_length: Option<usize>,
    pub max_candidates: Option<usize>,
    pub tile_count: usize,
    pub tile_size: usize,
    /// Collapse words found along several tile paths into one candidate.
    pub dedup_candidates: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: None,
            max_candidates: None,
            tile_count: TILE_COUNT,
            tile_size: TILE_SIZE,
            dedup_candidates: false,
        }
    }
}

impl SolverConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PuzzleError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: SolverConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(PuzzleError::Config(
                "min_word_length must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_word_length {
            if max < self.min_word_length {
                return Err(PuzzleError::Config(format!(
                    "max_word_length ({}) is shorter than min_word_length ({})",
                    max, self.min_word_length
                )));
            }
        }
        if self.tile_count == 0 || self.tile_size == 0 {
            return Err(PuzzleError::Config(
                "tile_count and tile_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            min_word_length: self.min_word_length,
            max_word_length: self.max_word_length,
            max_candidates: self.max_candidates,
        }
    }

    pub fn tile_shape(&self) -> TileShape {
        TileShape {
            count: self.tile_count,
            size: self.tile_size,
        }
    }
}
