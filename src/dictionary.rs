//! Word list loading.

use crate::error::{PuzzleError, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one word per line. Lines are trimmed and lowercased; blank lines are
/// skipped. No length filter is applied here.
pub fn read_dictionary<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words.push(word.to_lowercase());
    }
    Ok(words)
}

pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PuzzleError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;

    let words = read_dictionary(BufReader::new(file)).map_err(|e| match e {
        PuzzleError::Io(source) => PuzzleError::Dictionary {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    if words.is_empty() {
        warn!("Dictionary '{}' contains no words", path.display());
    } else {
        info!("Loaded {} words from '{}'", words.len(), path.display());
    }
    Ok(words)
}
