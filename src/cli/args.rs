//! CLI argument definitions for `careerguide`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use career_guide::config::ConfigOverrides;
use career_guide::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Expected score argument: a whole percentage
fn score_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=100)
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum DataSubcommand {
    /// Write the bundled sample documents into the data directory.
    ///
    /// Existing documents are kept unless --force is given.
    Init {
        /// Overwrite documents that already exist
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum BrowseSubcommand {
    /// List education boards
    Boards,
    /// List streams offered by a board
    Streams {
        /// Board name (e.g., "CBSE")
        #[arg(value_name = "BOARD")]
        board: String,
    },
    /// List subject combinations under a stream
    Subjects {
        /// Stream name (e.g., "Science")
        #[arg(value_name = "STREAM")]
        stream: String,
    },
    /// List course categories for a subject combination
    Categories {
        /// Subject combination label
        #[arg(value_name = "SUBJECTS")]
        subjects: String,
    },
    /// List courses in a category
    Courses {
        /// Category name
        #[arg(value_name = "CATEGORY")]
        category: String,
    },
    /// List every course reachable from a subject combination
    Available {
        /// Subject combination label
        #[arg(value_name = "SUBJECTS")]
        subjects: String,
    },
    /// Show the minimum score for a course
    Eligibility {
        /// Course name
        #[arg(value_name = "COURSE")]
        course: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminSubcommand {
    /// Show catalog counts
    Overview,
    /// Add an education board
    AddBoard {
        /// Board name
        board: String,
    },
    /// Remove an education board
    RemoveBoard {
        /// Board name
        board: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Offer a stream under a board
    AddStream {
        /// Board name
        board: String,
        /// Stream name
        stream: String,
    },
    /// Stop offering a stream under a board
    RemoveStream {
        /// Board name
        board: String,
        /// Stream name
        stream: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a subject combination to a stream
    AddSubject {
        /// Stream name
        stream: String,
        /// Subject combination label
        subjects: String,
    },
    /// Remove a subject combination and its category mapping
    RemoveSubject {
        /// Stream name
        stream: String,
        /// Subject combination label
        subjects: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Map a category to a subject combination
    AddCategory {
        /// Subject combination label
        subjects: String,
        /// Category name
        category: String,
    },
    /// Unmap a category from a subject combination
    RemoveCategory {
        /// Subject combination label
        subjects: String,
        /// Category name
        category: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a course to a category
    AddCourse {
        /// Category name
        category: String,
        /// Course name
        course: String,
    },
    /// Remove a course and its eligibility rule
    RemoveCourse {
        /// Category name
        category: String,
        /// Course name
        course: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create or update a course's minimum score
    SetEligibility {
        /// Course name
        course: String,
        /// Minimum percentage (0-100)
        #[arg(value_parser = score_parser())]
        min_score: u8,
    },
    /// Remove a course's eligibility rule (reverts to the default of 50)
    RemoveEligibility {
        /// Course name
        course: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the data directory.
    Data {
        #[command(subcommand)]
        subcommand: DataSubcommand,
    },
    /// Browse boards, streams, subject combinations, categories and courses.
    Browse {
        #[command(subcommand)]
        subcommand: BrowseSubcommand,
    },
    /// Recommend courses for a subject combination and expected score.
    Recommend {
        /// Subject combination label (e.g., "Mathematics + Computer Science")
        #[arg(short, long, value_name = "SUBJECTS")]
        subjects: String,

        /// Expected percentage (0-100)
        #[arg(long, value_name = "SCORE", value_parser = score_parser())]
        score: u8,

        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a career recommendation report.
    ///
    /// Writes the student profile, recommended courses and alternate
    /// career options to a Markdown, HTML or PDF file.
    Report {
        /// Student name
        #[arg(short, long)]
        name: String,

        /// Education board
        #[arg(short, long)]
        board: String,

        /// Stream within the board
        #[arg(long)]
        stream: String,

        /// Subject combination label
        #[arg(short, long, value_name = "SUBJECTS")]
        subjects: String,

        /// Expected percentage (0-100)
        #[arg(long, value_name = "SCORE", value_parser = score_parser())]
        score: u8,

        /// Report format: markdown (md), html, or pdf
        #[arg(short, long, value_name = "FORMAT", default_value = "pdf")]
        format: String,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Edit the configuration documents (requires admin credentials).
    Admin {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Admin password
        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        subcommand: AdminSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "careerguide",
    about = "Course recommendations from board, stream, subjects and expected score",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the data directory holding the JSON documents
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Browser used to convert HTML reports to PDF
    #[arg(long = "pdf-converter", value_name = "CMD")]
    pub pdf_converter: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration for this run only.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_dir: self.data_dir.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
            pdf_converter: self.pdf_converter.clone(),
        }
    }
}
