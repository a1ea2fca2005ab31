//! Command-line interface entry point for `careerguide`

mod args;
mod commands;

use args::{Cli, Command};
use career_guide::config::Config;
use career_guide::info;
use career_guide::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Data { subcommand } => {
            commands::data::run(subcommand, &config);
        }
        Command::Browse { subcommand } => {
            commands::browse::run(subcommand, &config);
        }
        Command::Recommend {
            subjects,
            score,
            json,
        } => {
            commands::recommend::run(&subjects, score, json, &config);
        }
        Command::Report {
            name,
            board,
            stream,
            subjects,
            score,
            format,
            output,
        } => {
            let profile = career_guide::report::StudentProfile {
                name,
                board,
                stream,
                subject_combination: subjects,
                expected_score: score,
            };
            commands::report::run(&profile, &format, output.as_deref(), &config);
        }
        Command::Admin {
            username,
            password,
            subcommand,
        } => {
            commands::admin::run(&username, &password, subcommand, &config);
        }
    }
}
