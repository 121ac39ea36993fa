//! Battle simulator CLI.
//!
//! Fights many silent battles with the default roster and prints how they went.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 1000 battles
//!   cargo run --bin simulate -- -n 100         # 100 battles
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use boss_fight::simulator::{run_simulation, SimConfig};
use boss_fight::{init_logging, BattleError, Result};
use std::env;
use std::str::FromStr;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &SimConfig) -> Result<()> {
    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              BOSS FIGHT BATTLE SIMULATOR                      ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Battles:        {}", config.num_runs);
        println!("  Max Rounds:     {}", config.max_rounds);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(config);
    println!("{}", report.to_text());

    if config.write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json()?)?;
        println!("JSON report saved to: {}", filename);
    }
    Ok(())
}

fn parse_value<T: FromStr>(args: &[String], i: usize) -> Result<T> {
    let flag = &args[i];
    let value = args.get(i + 1).ok_or_else(|| BattleError::InvalidArgument {
        flag: flag.clone(),
        value: String::new(),
    })?;
    value.parse().map_err(|_| BattleError::InvalidArgument {
        flag: flag.clone(),
        value: value.clone(),
    })
}

fn parse_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, i)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i)?);
                i += 1;
            }
            "-r" | "--max-rounds" => {
                config.max_rounds = parse_value(args, i)?;
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                config.write_json = true;
            }
            "--quick" => {
                config = SimConfig {
                    seed: config.seed,
                    write_json: config.write_json,
                    ..SimConfig::quick()
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                return Err(BattleError::InvalidArgument {
                    flag: "argument".to_string(),
                    value: other.to_string(),
                });
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Boss Fight Battle Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of battles (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -r, --max-rounds <R>  Rounds before a battle times out (default: 1000)");
    println!("    -v, --verbose         One line per battle");
    println!("    -q, --quiet           Report only");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (100 battles)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                   # Default run");
    println!("    cargo run --bin simulate -- -n 100         # 100 battles");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --quick --json # Quick check, saved");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = parse_args(&args(&[])).unwrap();
        assert_eq!(config.num_runs, 1000);
        assert_eq!(config.seed, None);
        assert!(!config.write_json);
    }

    #[test]
    fn test_parses_values() {
        let config = parse_args(&args(&["-n", "25", "--seed", "9", "-r", "50", "--json"])).unwrap();
        assert_eq!(config.num_runs, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_rounds, 50);
        assert!(config.write_json);
    }

    #[test]
    fn test_quick_keeps_seed() {
        let config = parse_args(&args(&["--seed", "3", "--quick"])).unwrap();
        assert_eq!(config.num_runs, 100);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_rejects_bad_number() {
        let err = parse_args(&args(&["-n", "many"])).unwrap_err();
        assert!(matches!(err, BattleError::InvalidArgument { ref value, .. } if value == "many"));
    }

    #[test]
    fn test_rejects_missing_value() {
        assert!(parse_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(parse_args(&args(&["--turbo"])).is_err());
    }
}
