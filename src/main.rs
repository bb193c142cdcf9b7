//! Letterbox CLI
//!
//! Command-line front end for the tile-chain puzzle solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterbox_solver::{load_dictionary, read_layouts, PuzzleSolver, SolverConfig, TileLayout};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about = "Find two-word solutions to tile-chain word puzzles", long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single puzzle
    Solve {
        /// The puzzle tiles, e.g. `dse ima nrg oyc`
        #[arg(required = true)]
        tiles: Vec<String>,

        /// Also list every candidate word
        #[arg(long)]
        candidates: bool,

        /// Only print the shortest solution
        #[arg(long)]
        shortest: bool,
    },
    /// List the candidate words for a puzzle
    Words {
        #[arg(required = true)]
        tiles: Vec<String>,
    },
    /// Solve one puzzle per line of a file
    Batch { file: PathBuf },
    /// Check whether a word can be played on a puzzle
    Check {
        word: String,
        #[arg(required = true)]
        tiles: Vec<String>,
    },
}

fn load_config(args: &Args) -> Result<SolverConfig> {
    let mut config = match &args.config {
        Some(path) => SolverConfig::load_from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(dictionary) = &args.dictionary {
        config.dictionary = dictionary.clone();
    }
    config.validate()?;
    Ok(config)
}

fn build_solver(config: SolverConfig) -> Result<PuzzleSolver> {
    let words = load_dictionary(&config.dictionary)?;
    Ok(PuzzleSolver::with_config(words, config))
}

fn parse_tiles(tiles: &[String], config: &SolverConfig) -> Result<TileLayout> {
    TileLayout::parse_with_shape(tiles, config.tile_shape()).context("Invalid puzzle tiles")
}

/// Tiles, dictionary size and required letters, one item per line.
fn puzzle_summary(solver: &PuzzleSolver, layout: &TileLayout) -> String {
    let mut out = String::from("Tiles:\n");
    for tile in layout.tiles() {
        out.push_str(&format!("  {}\n", tile));
    }
    out.push_str(&format!(
        "Total words in the dictionary: {}\n",
        solver.trie().word_count()
    ));
    let required: String = layout.required_chars().iter().collect();
    out.push_str(&format!("All characters: {}\n", required));
    out
}

fn run_solve(
    solver: &PuzzleSolver,
    layout: &TileLayout,
    candidates: bool,
    shortest: bool,
) -> Result<()> {
    print!("{}", puzzle_summary(solver, layout));

    let solution = solver.solve(layout)?;

    if candidates {
        println!();
        println!("Candidate words ({}):", solution.candidates.len());
        for word in &solution.candidates {
            println!("  {}", word);
        }
    }

    println!();
    if !solution.is_solved() {
        println!("No solutions found.");
        return Ok(());
    }

    if shortest {
        if let Some(pair) = solution.shortest() {
            println!("Shortest solution: {} ({} letters)", pair, pair.letter_count());
        }
        return Ok(());
    }

    println!("Solutions ({}):", solution.pairs.len());
    for pair in &solution.pairs {
        println!("  {}", pair);
    }
    Ok(())
}

fn run_batch(solver: &PuzzleSolver, file: &Path) -> Result<()> {
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("Unable to open '{}'", file.display()))?,
    );
    let layouts = read_layouts(reader, solver.config().tile_shape())?;
    info!("Solving {} puzzles", layouts.len());

    let start = Instant::now();
    let results = solver.solve_batch(&layouts);
    let elapsed = start.elapsed();

    let mut solved = 0;
    for (layout, result) in layouts.iter().zip(results) {
        match result {
            Ok(solution) => {
                if solution.is_solved() {
                    solved += 1;
                }
                let best = solution
                    .shortest()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:>6} candidates {:>6} solutions  {}",
                    layout.to_string(),
                    solution.candidates.len(),
                    solution.pairs.len(),
                    best
                );
            }
            Err(e) => println!("{:<20} error: {}", layout.to_string(), e),
        }
    }

    println!();
    println!("Solved {} of {} puzzles in {:.2?}", solved, layouts.len(), elapsed);
    Ok(())
}

fn run_check(solver: &PuzzleSolver, word: &str, layout: &TileLayout) {
    let word = word.to_lowercase();
    match layout.chain_for(&word) {
        Some(chain) => {
            let tiles: Vec<String> = chain.iter().map(|i| i.to_string()).collect();
            println!("'{}' chains through tiles {}", word, tiles.join(" "));
        }
        None => println!("'{}' cannot be chained on {}", word, layout),
    }
    if solver.is_word(&word) {
        println!("'{}' is in the dictionary", word);
    } else {
        println!("'{}' is not in the dictionary", word);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    match &args.command {
        Command::Solve {
            tiles,
            candidates,
            shortest,
        } => {
            let layout = parse_tiles(tiles, &config)?;
            let solver = build_solver(config)?;
            run_solve(&solver, &layout, *candidates, *shortest)?;
        }
        Command::Words { tiles } => {
            let layout = parse_tiles(tiles, &config)?;
            let solver = build_solver(config)?;
            for word in solver.candidates(&layout)? {
                println!("{}", word);
            }
        }
        Command::Batch { file } => {
            let solver = build_solver(config)?;
            run_batch(&solver, file)?;
        }
        Command::Check { word, tiles } => {
            let layout = parse_tiles(tiles, &config)?;
            let solver = build_solver(config)?;
            run_check(&solver, word, &layout);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_summary_reports_dictionary_size() {
        let solver = PuzzleSolver::new(["region", "nomad", "corned"]);
        let layout = TileLayout::new(["dse", "ima", "nrg", "oyc"]);
        let summary = puzzle_summary(&solver, &layout);

        assert_eq!(
            summary,
            "Tiles:\n  dse\n  ima\n  nrg\n  oyc\n\
             Total words in the dictionary: 3\n\
             All characters: dseimanrgoyc\n"
        );
    }
}
