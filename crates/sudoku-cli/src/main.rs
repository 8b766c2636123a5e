//! Batch command-line Su Doku solver.
//!
//! Reads one or more puzzles from a file or standard input, solves each with
//! the engine, and writes every puzzle followed by its solution.

mod input;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sudoku_core::{Board, LogTracer, Solver};

use input::PuzzleReader;

/// A Su Doku solver.
///
/// A puzzle is nine lines of nine digits between 0 and 9, where 0 marks an
/// open spot. Multiple puzzles can be solved from a single input, separated
/// by one blank line each.
#[derive(Debug, Parser)]
#[command(name = "sudoku", version)]
struct Args {
    /// Input puzzle file. Defaults to standard input.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file for the solutions. Defaults to standard output.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbosely log the steps taken to the solution.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Trace);
    }
    builder.init();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let solver = if args.verbose {
        Solver::with_tracer(Box::new(LogTracer))
    } else {
        Solver::new()
    };

    run(&solver, reader, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Drive the batch: parse, solve, and render every puzzle on the stream.
fn run(
    solver: &Solver,
    reader: impl BufRead,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    let mut puzzles = PuzzleReader::new(reader);
    let mut game = 1;

    while let Some(rows) = puzzles.next_puzzle().context("reading puzzles")? {
        let mut board = Board::from_rows(rows)?;

        writeln!(writer, "Game {}", game)?;
        write!(writer, "{}", board)?;

        if solver.solve(&mut board)? {
            writeln!(writer, "Solution:")?;
            write!(writer, "{}", board)?;
        } else {
            writeln!(writer, "Game {} has no solution", game)?;
        }
        game += 1;
    }

    Ok(())
}
