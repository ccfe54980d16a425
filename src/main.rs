use anyhow::Context;
use clap::Parser;
use std::{collections::BTreeMap, path::PathBuf};

use rxword::{Consistency, Layout, Puzzle, SolveOptions, puzzle::parse_fixed};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Puzzle file: one `PATTERN<TAB>POS,POS,...` per line
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Answer layout, e.g. "12,13 22-24 31-36"
    #[arg(short, long, value_name = "GROUPS")]
    layout: Option<Layout>,

    /// Letter known in advance at a position, e.g. 43=K
    #[arg(short, long = "fix", value_name = "POS=CHAR", value_parser = parse_fixed)]
    fixed: Vec<(i64, char)>,

    /// Require every crossing query to accept a letter
    #[arg(short, long)]
    strict: bool,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut puzzle = Puzzle::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let options = SolveOptions {
        fixed: args.fixed.into_iter().collect::<BTreeMap<_, _>>(),
        consistency: if args.strict {
            Consistency::All
        } else {
            Consistency::Any
        },
    };

    let tally = puzzle.solve(&options);
    let ranking = tally.ranking();
    log::info!(
        "{} queries, {} ranked position(s)",
        puzzle.queries().len(),
        ranking.len()
    );

    let layout = args.layout.unwrap_or_else(|| Layout::all(&ranking));
    println!("{}", layout.render(&ranking));
    Ok(())
}
