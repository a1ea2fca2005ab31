//! CLI command handlers for `careerguide`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗`
//! status lines and exit with status 1 on fatal errors.

pub mod admin;
pub mod browse;
pub mod config;
pub mod data;
pub mod recommend;
pub mod report;

use career_guide::config::Config;
use career_guide::error;
use career_guide::models::Catalog;
use career_guide::store::{FileStore, StoreError};
use std::io::{self, Write};

/// Open the document store in the configured data directory
pub fn open_store(config: &Config) -> FileStore {
    FileStore::new(&config.paths.data_dir)
}

/// Print a store error, with a hint when the data directory is empty
pub fn report_store_error(err: &StoreError) {
    error!("{err}");
    eprintln!("✗ {err}");
    if matches!(err, StoreError::Missing { .. }) {
        eprintln!("  Run `careerguide data init` to create the sample documents.");
    }
}

/// Load every document or exit
pub fn load_catalog(store: &FileStore) -> Catalog {
    Catalog::load(store).unwrap_or_else(|err| {
        report_store_error(&err);
        std::process::exit(1);
    })
}

/// Ask a yes/no question on stdin
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

/// Print a list, one item per line, or a note when it is empty
pub fn print_list(items: &[String], empty_message: &str) {
    if items.is_empty() {
        println!("{empty_message}");
    } else {
        for item in items {
            println!("  {item}");
        }
    }
}
