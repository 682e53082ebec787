//! `hanoi`: solve the Tower of Hanoi with IDDFS and A* and compare them.
//!
//! ```text
//! hanoi                                  # prompts for disks and algorithm
//! hanoi --disks 3 --algorithm both
//! hanoi -n 8 -a astar --random-start --seed 7 --no-path
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use hanoi_search::astar::{AStarConfig, AStarRunner};
use hanoi_search::hanoi::{Hanoi, Move, Peg, State, MAX_DISKS};
use hanoi_search::iddfs::{IddfsConfig, IddfsRunner};
use hanoi_search::report::{Comparison, Report};
use hanoi_search::search::{SearchProblem, SearchResult};

/// Past this many disks IDDFS rarely finishes in reasonable time.
const IDDFS_PRACTICAL_DISKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Iddfs,
    Astar,
    Both,
}

impl Algorithm {
    fn runs_iddfs(self) -> bool {
        matches!(self, Algorithm::Iddfs | Algorithm::Both)
    }

    fn runs_astar(self) -> bool {
        matches!(self, Algorithm::Astar | Algorithm::Both)
    }
}

#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi with IDDFS and A*, and compare them")]
struct Cli {
    /// Number of disks (prompted for when omitted)
    #[arg(long, short = 'n')]
    disks: Option<usize>,

    /// Algorithm to run (menu when omitted)
    #[arg(long, short, value_enum)]
    algorithm: Option<Algorithm>,

    /// Start from a random legal configuration instead of a full tower
    #[arg(long)]
    random_start: bool,

    /// RNG seed for --random-start
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Deepest bound IDDFS may try
    #[arg(long)]
    max_depth: Option<usize>,

    /// Most frontier entries A* may expand
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Do not list the moves of the solution
    #[arg(long)]
    no_path: bool,

    /// Log filter, e.g. "debug" or "hanoi_search=trace" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,
}

/// Filter from `--log-level`, else `RUST_LOG`, else "warn".
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(level: Option<&str>) {
    let filter = log_filter(level);

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn parse_disks(input: &str) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_DISKS).contains(n))
}

fn parse_menu_choice(input: &str) -> Option<Algorithm> {
    match input {
        "1" => Some(Algorithm::Iddfs),
        "2" => Some(Algorithm::Astar),
        "3" => Some(Algorithm::Both),
        _ => None,
    }
}

/// Asks `prompt` until `parse` accepts the answer.
fn prompt_until<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> anyhow::Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a valid answer was given");
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        writeln!(output, "{retry}")?;
    }
}

fn ask_disks<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<usize> {
    prompt_until(
        input,
        output,
        "Number of disks: ",
        &format!("Please enter a whole number of disks between 1 and {MAX_DISKS}.\n"),
        parse_disks,
    )
}

fn ask_algorithm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Algorithm> {
    writeln!(output, "\nSelect the algorithms to run:")?;
    writeln!(output, "1. Iterative deepening DFS (IDDFS)")?;
    writeln!(output, "2. A*")?;
    writeln!(output, "3. Both (compare)")?;
    prompt_until(
        input,
        output,
        "Your choice (1, 2 or 3): ",
        "Invalid choice.",
        parse_menu_choice,
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let disks = match cli.disks {
        Some(n) if (1..=MAX_DISKS).contains(&n) => n,
        Some(n) => bail!("--disks must be between 1 and {MAX_DISKS}, got {n}"),
        None => ask_disks(&mut input, &mut out)?,
    };
    writeln!(out, "\nDisks: {disks}")?;

    let algorithm = match cli.algorithm {
        Some(algorithm) => algorithm,
        None => ask_algorithm(&mut input, &mut out)?,
    };

    let start = if cli.random_start {
        State::random(disks, &mut StdRng::seed_from_u64(cli.seed))
    } else {
        State::tower(disks, Peg::Origin)
    };
    let problem = Hanoi::with_states(start, State::tower(disks, Peg::Destination))
        .context("failed to build the puzzle")?;
    if cli.random_start {
        writeln!(out, "\nStart:\n{}", problem.start())?;
        writeln!(out, "Shortest solution: {} moves", problem.optimal_moves())?;
    }

    if algorithm.runs_iddfs() && disks > IDDFS_PRACTICAL_DISKS {
        warn!(disks, "IDDFS cost grows doubly exponentially with the disk count");
    }

    let mut iddfs_config = IddfsConfig::default();
    if let Some(depth) = cli.max_depth {
        iddfs_config = iddfs_config.with_max_depth(depth);
    }
    let mut astar_config = AStarConfig::default();
    if let Some(n) = cli.max_expansions {
        astar_config = astar_config.with_max_expansions(n);
    }

    let mut runs: Vec<(&str, SearchResult<Move>)> = Vec::new();
    if algorithm.runs_iddfs() {
        writeln!(out, "\n--- Running IDDFS ---")?;
        out.flush()?;
        runs.push(("IDDFS", IddfsRunner::run(&problem, &iddfs_config)));
    }
    if algorithm.runs_astar() {
        writeln!(out, "\n--- Running A* ---")?;
        out.flush()?;
        runs.push(("A*", AStarRunner::run(&problem, &astar_config)));
    }
    info!(disks, ?algorithm, runs = runs.len(), "search finished");

    writeln!(out, "\nRESULTS")?;
    for (name, result) in &runs {
        writeln!(out, "\n{}", Report::new(name, result).with_path(!cli.no_path))?;
    }
    if runs.len() > 1 {
        let comparison = runs
            .iter()
            .fold(Comparison::new(), |cmp, (name, result)| cmp.with_run(name, result));
        writeln!(out, "\n{comparison}")?;
    }
    Ok(())
}
