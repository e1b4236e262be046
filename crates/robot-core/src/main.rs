//! Village Mail Robot
//!
//! Runs one robot over a random village world and journals every move.
//!
//! Examples:
//!   mail_robot --robot random --seed 7
//!   mail_robot --config robot.toml --jsonl --journal run.jsonl
//!   mail_robot --compare 100

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use robot_core::config::{RobotConfig, DEFAULT_CONFIG_PATH};
use robot_core::journal::open_journal;
use robot_core::stats::CompareOptions;
use robot_core::{compare_robots, run_configured, JournalFormat, RobotError, RobotKind};

/// Command line arguments for the mail robot
#[derive(Parser, Debug)]
#[command(name = "mail_robot")]
#[command(about = "Deliver parcels around a small village")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Robot to run
    #[arg(long)]
    robot: Option<RobotKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parcels in the starting world
    #[arg(long)]
    parcels: Option<usize>,

    /// Give up after this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Write the journal to a file instead of stdout
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Write the journal as JSON lines
    #[arg(long)]
    jsonl: bool,

    /// Print the run report as JSON when finished
    #[arg(long)]
    report: bool,

    /// Compare every robot over this many random worlds instead of a single run
    #[arg(long)]
    compare: Option<usize>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&self, config: &mut RobotConfig) {
        if let Some(robot) = self.robot {
            config.simulation.robot = robot;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(parcels) = self.parcels {
            config.simulation.parcel_count = parcels;
        }
        if self.max_turns.is_some() {
            config.simulation.max_turns = self.max_turns;
        }
        if self.journal.is_some() {
            config.journal.path = self.journal.clone();
        }
        if self.jsonl {
            config.journal.format = JournalFormat::Jsonl;
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.print_config {
        print!("{}", robot_core::default_config_toml());
        return ExitCode::SUCCESS;
    }

    let loaded = match &args.config {
        Some(path) => RobotConfig::load_or_default(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            RobotConfig::from_file(DEFAULT_CONFIG_PATH)
        }
        None => Ok(RobotConfig::default()),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: could not load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    let result = match args.compare {
        Some(runs) => compare(&config, runs),
        None => run_once(&config, args.report),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_once(config: &RobotConfig, print_report: bool) -> Result<(), RobotError> {
    let mut journal = open_journal(config.journal.path.as_deref(), config.journal.format)?;
    let report = run_configured(config, &mut journal)?;

    if print_report {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Warning: Could not serialize run report: {}", e),
        }
    }
    Ok(())
}

fn compare(config: &RobotConfig, runs: usize) -> Result<(), RobotError> {
    let graph = config.road_graph()?;
    let mut options = CompareOptions {
        runs,
        parcel_count: config.simulation.parcel_count,
        seed: config.simulation.seed,
        start_place: config.simulation.start_place.clone(),
        ..CompareOptions::default()
    };
    if let Some(limit) = config.simulation.max_turns {
        options.max_turns = limit;
    }

    let stats = compare_robots(&graph, &config.route_robot(), &options)?;

    println!("Robot comparison over {} worlds", runs);
    println!("==============================");
    for robot in &stats {
        println!(
            "{:<8} avg {:>7.2} turns  (min {}, max {}, unfinished {})",
            robot.robot, robot.average_turns, robot.min_turns, robot.max_turns, robot.unfinished
        );
    }
    Ok(())
}
