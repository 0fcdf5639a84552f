use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use plate_parity::expression::{DEFAULT_MAX_EXPONENT, DEFAULT_MAX_FACTORIAL_ARG};
use plate_parity::solver::constants::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_DIGITS};
use plate_parity::{
    DigitSequence, OperatorKind, PlateSolver, Rules, SearchMode, Solution, SolverConfig,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How printed solutions are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Split position, then generation order
    Discovery,
    /// Shortest rendering first
    Shortest,
}

/// Plate Parity - find the equation hidden in a license plate
#[derive(Parser, Debug)]
#[command(name = "plate-parity")]
#[command(
    about = "Place one '=' and some operators between a plate's digits so both sides are equal"
)]
#[command(version)]
pub struct CliArgs {
    /// Plate digits in order, e.g. 4312
    pub plate: String,

    /// Maximum number of solutions to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Stop at the first solution found
    #[arg(long)]
    pub first: bool,

    /// Order of printed solutions
    #[arg(long, value_enum, default_value = "discovery")]
    pub order: Order,

    /// Refuse plates with more digits than this. Longer plates also need a
    /// larger --max-candidates
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    pub max_digits: usize,

    /// Abort when one digit range could produce more candidates than this
    #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES)]
    pub max_candidates: usize,

    /// Largest exponent allowed for '^'
    #[arg(long, default_value_t = DEFAULT_MAX_EXPONENT)]
    pub max_exponent: u32,

    /// Largest operand allowed for '!'
    #[arg(long, default_value_t = DEFAULT_MAX_FACTORIAL_ARG)]
    pub max_factorial: u32,

    /// Abort the search after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Disallow '^'
    #[arg(long)]
    pub no_power: bool,

    /// Disallow '!'
    #[arg(long)]
    pub no_factorial: bool,

    /// Disallow '|x|'
    #[arg(long)]
    pub no_abs: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digits: DigitSequence,
    pub solver: SolverConfig,
    pub limit: usize,
    pub order: Order,
    pub log_level: LogLevel,
}

impl CliArgs {
    fn rules(&self) -> Rules {
        let mut rules = Rules::default()
            .with_max_exponent(self.max_exponent)
            .with_max_factorial_arg(self.max_factorial);
        for (disabled, op) in [
            (self.no_power, OperatorKind::Power),
            (self.no_factorial, OperatorKind::Factorial),
            (self.no_abs, OperatorKind::AbsoluteValue),
        ] {
            if disabled {
                rules = rules.without(op);
            }
        }
        rules
    }

    pub fn into_config(self) -> Result<CliConfig> {
        let digits = DigitSequence::parse(self.plate.trim()).context("Invalid plate")?;

        let mut solver = SolverConfig::default()
            .with_rules(self.rules())
            .with_max_digits(self.max_digits)
            .with_max_candidates(self.max_candidates)
            .with_mode(if self.first {
                SearchMode::First
            } else {
                SearchMode::All
            });
        if let Some(ms) = self.timeout_ms {
            solver = solver.with_deadline(Duration::from_millis(ms));
        }

        Ok(CliConfig {
            digits,
            solver,
            limit: self.limit,
            order: self.order,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Lines to print for a finished search
pub fn render(solutions: &[Solution], order: Order, limit: usize) -> Vec<String> {
    if solutions.is_empty() {
        return vec!["No solutions under current rules.".to_string()];
    }

    let mut ordered: Vec<&Solution> = solutions.iter().collect();
    if order == Order::Shortest {
        ordered.sort_by_key(|s| s.canonical().len());
    }

    let mut lines = vec![format!("Found {} solution(s):", solutions.len())];
    lines.extend(
        ordered
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, s)| format!("{:3}. {}", i + 1, s)),
    );
    lines
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = PlateSolver::new(config.solver);

    info!("Searching plate {}", config.digits);

    let solutions = solver
        .run(&config.digits)
        .with_context(|| format!("Could not finish searching plate {}", config.digits))?;

    if solutions.is_empty() {
        warn!("No balanced equation found");
    }

    for line in render(&solutions, config.order, config.limit) {
        println!("{}", line);
    }
    Ok(())
}
