use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use wordgrid::benchmark::{self, timed_search};
use wordgrid::config::{BenchmarkPlan, SearchConfig};
use wordgrid::utils::{loader, serialization};
use wordgrid::{Adjacency, Backing, BoardSearcher};

/// Boggle word search and dictionary container benchmark
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every word on a grid
    Search {
        /// Adjacency rule: 4way or 8way
        rule: String,
        /// Grid file, one row per line
        grid: PathBuf,
        /// Word list, one word per line
        dictionary: PathBuf,
        /// Dictionary backing: sorted, ordered, hash, linear or fst
        #[arg(short, long)]
        backing: Option<String>,
        /// JSON search configuration; flags given here take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Only print the word count and run time
        #[arg(short, long)]
        quiet: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Explore starting cells on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Time every combination of rule, grid, dictionary and backing
    Bench {
        /// JSON benchmark plan
        #[arg(short, long)]
        plan: Option<PathBuf>,
        /// Grid files, used when no plan is given
        #[arg(short, long)]
        grid: Vec<PathBuf>,
        /// Word lists, used when no plan is given
        #[arg(short, long)]
        dictionary: Vec<PathBuf>,
        /// Searches per combination
        #[arg(short, long)]
        trials: Option<usize>,
        /// Print the measurements as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordgrid::logging::init_logger(cli.verbose);

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Search {
            rule,
            grid,
            dictionary,
            backing,
            config,
            quiet,
            json,
            sequential,
        } => {
            let mut search = match config {
                Some(path) => SearchConfig::from_file(&path)
                    .with_context(|| format!("loading search config {}", path.display()))?,
                None => SearchConfig::default(),
            };
            search.adjacency = rule.parse::<Adjacency>()?;
            if let Some(backing) = backing {
                search.backing = backing.parse::<Backing>()?;
            }
            search.quiet |= quiet;
            search.parallel &= !sequential;
            run_search(&search, &grid, &dictionary, json)
        }
        Command::Bench {
            plan,
            grid,
            dictionary,
            trials,
            json,
        } => {
            let mut plan = match plan {
                Some(path) => BenchmarkPlan::from_file(&path)
                    .with_context(|| format!("loading benchmark plan {}", path.display()))?,
                None => BenchmarkPlan::default(),
            };
            plan.grids.extend(grid);
            plan.dictionaries.extend(dictionary);
            if let Some(trials) = trials {
                plan.trials = trials;
            }
            run_bench(&plan, json)
        }
    }
}

fn run_search(
    config: &SearchConfig,
    grid: &Path,
    dictionary: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let words = loader::load_words(dictionary)?;
    let dictionary = config.backing.build(words)?;
    let board = loader::load_grid(grid)?;
    let searcher = BoardSearcher::new(board, dictionary).with_parallelism(config.parallel);

    let report = timed_search(&searcher, config.adjacency);
    if json {
        println!("{}", serialization::to_json(&report)?);
        return Ok(());
    }
    if !config.quiet {
        println!("Words Found:");
        for word in report.words.iter() {
            println!("{}", word);
        }
        println!("Total Words found: {}", report.count);
    }
    println!("Run Time: {:.9} seconds", report.elapsed_secs);
    Ok(())
}

fn run_bench(plan: &BenchmarkPlan, json: bool) -> anyhow::Result<()> {
    if plan.grids.is_empty() || plan.dictionaries.is_empty() {
        anyhow::bail!("benchmark needs at least one grid and one dictionary");
    }
    info!(runs = plan.total_runs(), "starting benchmark");

    let start = Instant::now();
    let measurements = benchmark::run(plan)?;
    if json {
        println!("{}", serialization::to_json(&measurements)?);
    } else {
        for m in measurements.iter() {
            println!(
                "{} {} {} {}: {} words, mean {:.9}s (min {:.9}s, max {:.9}s)",
                m.adjacency,
                m.grid.display(),
                m.dictionary.display(),
                m.backing,
                m.words_found,
                m.mean_secs,
                m.min_secs,
                m.max_secs
            );
        }
    }
    println!("TOTAL RUN TIME: {}", benchmark::format_duration(start.elapsed()));
    Ok(())
}
