//! Rueel wheel simulator CLI.
//!
//! Spins a bankroll against a betting strategy and prints the outcome.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                              # Reference run: 1000 scraps, half on Yellow
//!   cargo run -- --strategy all-in -t 100  # All-in for at most 100 spins
//!   cargo run -- -n 500 --seed 42          # 500 reproducible runs, aggregated

use rueel::build_info;
use rueel::simulator::{run_batch, run_simulation, SimConfig};
use rueel::utils::logging::{default_filter, init_tracing};
use rueel::StrategyKind;
use std::env;
use std::process::ExitCode;

struct CliOptions {
    config: SimConfig,
    num_runs: u32,
    json: bool,
    verbose: bool,
}

enum Command {
    Run(CliOptions),
    Help,
    Version,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'rueel --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(default_filter(options.verbose));

    let output = if options.num_runs > 1 {
        run_batch(&options.config, options.num_runs).map(|batch| {
            if options.json {
                batch.to_json()
            } else {
                batch.to_text()
            }
        })
    } else {
        run_simulation(&options.config).map(|report| {
            if options.json {
                report.to_json()
            } else {
                report.to_text()
            }
        })
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Simulation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i + 1)
        .ok_or_else(|| format!("Missing value for {}", flag))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions {
        config: SimConfig::reference(),
        num_runs: 1,
        json: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-s" | "--seed" => {
                options.config.seed = Some(parse_value(args, i, flag)?);
                i += 1;
            }
            "-n" | "--runs" => {
                options.num_runs = parse_value(args, i, flag)?;
                i += 1;
            }
            "--start" => {
                options.config.starting_scraps = parse_value(args, i, flag)?;
                i += 1;
            }
            "-g" | "--goal" => {
                options.config.scraps_goal = parse_value(args, i, flag)?;
                i += 1;
            }
            "-t" | "--iterations" => {
                // Zero or below means no cap
                let cap: i64 = parse_value(args, i, flag)?;
                options.config.max_iterations = cap.max(0) as u64;
                i += 1;
            }
            "--strategy" => {
                let name: String = parse_value(args, i, flag)?;
                options.config.strategy =
                    StrategyKind::from_name(&name).map_err(|e| e.to_string())?;
                i += 1;
            }
            "--json" => options.json = true,
            "-v" | "--verbose" => options.verbose = true,
            "--version" => return Ok(Command::Version),
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    if options.num_runs == 0 {
        return Err("--runs must be at least 1".to_string());
    }

    Ok(Command::Run(options))
}

fn print_help() {
    println!("Rueel - wheel-of-fortune betting simulator");
    println!();
    println!("USAGE:");
    println!("    rueel [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -n, --runs <N>          Number of runs to aggregate (default: 1)");
    println!("        --start <SCRAPS>    Starting scraps (default: 1000)");
    println!("    -g, --goal <SCRAPS>     Stop once scraps reach this (0 = no goal)");
    println!("    -t, --iterations <N>    Stop after N spins (0 or less = no cap, default: 10,000,000)");
    println!("        --strategy <NAME>   all-in | half (default: half)");
    println!("        --json              Print the report as JSON");
    println!("    -v, --verbose           Debug logging on stderr (RUEEL_LOG overrides)");
    println!("        --version           Show version information");
    println!("    -h, --help              Show this help");
}
