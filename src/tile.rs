//! Tiles and the puzzle layout they form.
//!
//! A word is a legal chain for a layout when every letter can be taken from
//! some tile and no two consecutive letters come from the same tile.

use crate::error::{PuzzleError, Result};
use crate::{TILE_COUNT, TILE_SIZE};
use std::collections::BTreeSet;
use std::fmt;
use std::io::BufRead;

/// One group of letters at a fixed position in the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub letters: Vec<char>,
}

impl Tile {
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.letters.iter().collect();
        write!(f, "{}", s)
    }
}

/// Expected number of tiles and letters per tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileShape {
    pub count: usize,
    pub size: usize,
}

impl Default for TileShape {
    fn default() -> Self {
        Self {
            count: TILE_COUNT,
            size: TILE_SIZE,
        }
    }
}

/// The ordered tiles of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    tiles: Vec<Tile>,
}

impl TileLayout {
    /// Build a layout from any number of tiles of any size.
    /// Tiles keep their given letters; an empty tile simply offers no letters.
    pub fn new<I, S>(tiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles = tiles
            .into_iter()
            .enumerate()
            .map(|(index, s)| Tile {
                index,
                letters: s.as_ref().chars().collect(),
            })
            .collect();
        Self { tiles }
    }

    /// Parse user input, lowercasing it and checking the tile count and size.
    pub fn parse_with_shape<S: AsRef<str>>(tiles: &[S], shape: TileShape) -> Result<Self> {
        if tiles.len() != shape.count {
            return Err(PuzzleError::TileCount {
                expected: shape.count,
                got: tiles.len(),
            });
        }

        let mut lowered = Vec::with_capacity(tiles.len());
        for (tile, s) in tiles.iter().enumerate() {
            let s = s.as_ref().trim().to_lowercase();
            let got = s.chars().count();
            if got == 0 {
                return Err(PuzzleError::EmptyTile { tile });
            }
            if got != shape.size {
                return Err(PuzzleError::TileSize {
                    tile,
                    expected: shape.size,
                    got,
                });
            }
            lowered.push(s);
        }

        Ok(Self::new(lowered))
    }

    /// Parse using the standard four tiles of three letters.
    pub fn parse<S: AsRef<str>>(tiles: &[S]) -> Result<Self> {
        Self::parse_with_shape(tiles, TileShape::default())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Every letter of every tile, repeats included, in layout order.
    pub fn required_chars(&self) -> Vec<char> {
        self.tiles
            .iter()
            .flat_map(|t| t.letters.iter().copied())
            .collect()
    }

    pub fn distinct_chars(&self) -> BTreeSet<char> {
        self.tiles
            .iter()
            .flat_map(|t| t.letters.iter().copied())
            .collect()
    }

    pub fn total_len(&self) -> usize {
        self.tiles.iter().map(|t| t.letters.len()).sum()
    }

    /// Find a sequence of tile indices spelling `word` with no tile used
    /// twice in a row. Returns the first such sequence in tile order.
    pub fn chain_for(&self, word: &str) -> Option<Vec<usize>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }
        let mut path = Vec::with_capacity(letters.len());
        // (position, previous tile) states already known to lead nowhere;
        // slot `len()` stands for "no previous tile"
        let mut dead = vec![false; letters.len() * (self.tiles.len() + 1)];
        if self.extend_chain(&letters, 0, None, &mut path, &mut dead) {
            Some(path)
        } else {
            None
        }
    }

    pub fn is_valid_chain(&self, word: &str) -> bool {
        self.chain_for(word).is_some()
    }

    fn extend_chain(
        &self,
        letters: &[char],
        pos: usize,
        last: Option<usize>,
        path: &mut Vec<usize>,
        dead: &mut [bool],
    ) -> bool {
        let Some(&c) = letters.get(pos) else {
            return true;
        };
        let state = pos * (self.tiles.len() + 1) + last.unwrap_or(self.tiles.len());
        if dead[state] {
            return false;
        }
        for tile in &self.tiles {
            if Some(tile.index) == last || !tile.contains(c) {
                continue;
            }
            path.push(tile.index);
            if self.extend_chain(letters, pos + 1, Some(tile.index), path, dead) {
                return true;
            }
            path.pop();
        }
        dead[state] = true;
        false
    }
}

impl fmt::Display for TileLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// Read one puzzle per line, tiles separated by whitespace. Blank lines and
/// lines starting with `#` are skipped.
pub fn read_layouts<R: BufRead>(reader: R, shape: TileShape) -> Result<Vec<TileLayout>> {
    let mut layouts = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tiles: Vec<&str> = line.split_whitespace().collect();
        let layout =
            TileLayout::parse_with_shape(&tiles, shape).map_err(|e| PuzzleError::BatchLine {
                line: i + 1,
                message: e.to_string(),
            })?;
        layouts.push(layout);
    }
    Ok(layouts)
}
