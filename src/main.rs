//! Sliding-Tile Cube Solver
//!
//! Solves the 26-tile sliding puzzle on a 3x3x3 cube: one blank cell moves
//! East/West, North/South or Up/Down until the initial configuration matches
//! the goal. The solver runs A* with a 3D Manhattan-distance heuristic and
//! reports a shortest move sequence.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tilecube::error::Error;
use tilecube::grid::Grid;
use tilecube::moves::scramble;
use tilecube::puzzle::{describe_blank, Puzzle};
use tilecube::solver::SearchOutcome;
use tilecube::{input, report};

/// Solves 3x3x3 sliding-tile puzzles with A* search.
#[derive(Parser)]
#[command(name = "tilecube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and write the report.
    Solve {
        /// Input file: three initial layers then three goal layers.
        input: PathBuf,
        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a puzzle file and show both configurations.
    Check {
        input: PathBuf,
    },
    /// Print a random puzzle file whose goal is the ordered cube.
    Scramble {
        /// Number of random blank moves away from the goal.
        #[arg(short, long, default_value_t = 20)]
        moves: usize,
        /// Seed for reproducible scrambles.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve { input, output } => run_solve(&input, output.as_deref()),
        Command::Check { input } => run_check(&input),
        Command::Scramble { moves, seed } => {
            scrambled_puzzle_text(moves, seed).map(|text| print!("{text}"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves the puzzle in `path` and writes the report.
fn run_solve(path: &Path, output: Option<&Path>) -> Result<(), Error> {
    let puzzle = input::load(path)?;

    // an unsolvable pair would only end after exhausting the reachable half
    // of 27! states
    if !puzzle.is_solvable() {
        warn!("parity check failed for {}", path.display());
        return Err(Error::Unsolvable);
    }

    let solution = match puzzle.solve() {
        SearchOutcome::Solved(solution) => solution,
        SearchOutcome::Unreachable { nodes_generated } => {
            return Err(Error::Unreachable { nodes_generated })
        }
    };

    let text = report::render(&puzzle, &solution);
    match output {
        Some(path) => {
            report::save(path, &text)?;
            println!(
                "Solved in {} moves ({} nodes generated)",
                solution.depth, solution.nodes_generated
            );
            println!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Validates a puzzle file and prints a summary.
fn run_check(path: &Path) -> Result<(), Error> {
    let puzzle = input::load(path)?;

    println!("Initial (blank at {}):", describe_blank(puzzle.initial()));
    print!("{}", puzzle.initial());
    println!("Goal (blank at {}):", describe_blank(puzzle.goal()));
    print!("{}", puzzle.goal());
    println!("Manhattan estimate: {}", puzzle.initial_estimate());
    println!(
        "Solvable: {}",
        if puzzle.is_solvable() { "yes" } else { "no" }
    );
    Ok(())
}

/// Builds an input file by walking randomly away from the ordered cube.
fn scrambled_puzzle_text(moves: usize, seed: u64) -> Result<String, Error> {
    let goal = Grid::solved();
    let (initial, _) = scramble(&goal, moves, &mut StdRng::seed_from_u64(seed));
    let puzzle = Puzzle::new(initial, goal)?;
    Ok(input::to_text(&puzzle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scramble_output_parses_and_solves() {
        let text = scrambled_puzzle_text(12, 3).unwrap();
        let puzzle = input::parse(&text).unwrap();
        assert_eq!(*puzzle.goal(), Grid::solved());
        assert!(puzzle.is_solvable());

        let solution = puzzle.solve().into_solution().unwrap();
        assert!(solution.depth <= 12);
    }

    #[test]
    fn test_scramble_is_seeded() {
        assert_eq!(
            scrambled_puzzle_text(25, 9).unwrap(),
            scrambled_puzzle_text(25, 9).unwrap()
        );
    }
}
