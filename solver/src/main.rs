use std::fs;
use std::num::NonZero;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use binairo::search::{BacktrackSearch, SearchOutcome, DEFAULT_REPORT_EVERY};
use binairo::BoardBuilder;
use clap::Parser;
use log::info;

mod presets;

#[derive(Parser)]
#[command(name = "binairo", version, about = "Backtracking solver for Binairo (binary) puzzles")]
struct Args {
    /// Puzzle file: `0` and `1` are givens, `X` is unknown, `#` starts a comment.
    #[arg(value_name = "FILE", required_unless_present = "preset", conflicts_with = "preset")]
    puzzle: Option<PathBuf>,

    /// Solve one of the built-in example puzzles by zero-based index instead.
    #[arg(short = 'p', long, value_name = "INDEX")]
    preset: Option<usize>,

    /// Dump a progress snapshot every this many trial steps.
    #[arg(long, value_name = "STEPS", default_value_t = DEFAULT_REPORT_EVERY)]
    report_every: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let report_every = NonZero::new(args.report_every)
        .ok_or_else(|| anyhow!("--report-every must be positive"))?;

    let text = match (&args.puzzle, args.preset) {
        (Some(path), None) => {
            info!("reading puzzle from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("cannot read puzzle file `{}`", path.display()))?
        }
        (None, Some(index)) => {
            info!("using built-in puzzle {index}");
            presets::PRESETS
                .get(index)
                .ok_or_else(|| {
                    anyhow!(
                        "the built-in puzzles are numbered 0 to {}",
                        presets::PRESETS.len() - 1
                    )
                })?
                .to_string()
        }
        // clap guarantees exactly one of the two is given
        _ => unreachable!(),
    };

    let mut board = BoardBuilder::from_text(&text)
        .build()
        .map_err(|reasons| anyhow!("puzzle is malformed: {reasons:?}"))?;

    let (cols, rows) = board.dims();
    println!("Puzzle to solve, {cols} by {rows}:");
    println!("{board}");

    let started = Instant::now();
    let report = BacktrackSearch::from(&mut board)
        .report_every(report_every)
        .run_with(|progress| {
            println!("({}) at {}", progress.steps, progress.cursor);
            println!("{}", progress.board);
        });
    let elapsed = started.elapsed();

    match report.outcome {
        SearchOutcome::Solved => {
            println!("Solved!");
            println!("{board}");
        }
        SearchOutcome::Exhausted => println!("No solution found"),
    }
    println!("{} steps in {:?}", report.steps, elapsed);

    Ok(())
}
