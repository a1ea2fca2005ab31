//! Data command handler

use super::{open_store, report_store_error};
use crate::args::DataSubcommand;
use career_guide::config::Config;
use career_guide::store::seed;

/// Dispatch data subcommands
pub fn run(subcommand: DataSubcommand, config: &Config) {
    match subcommand {
        DataSubcommand::Init { force } => handle_init(config, force),
    }
}

/// Seed the data directory with the bundled documents
fn handle_init(config: &Config, force: bool) {
    let store = open_store(config);
    match seed(&store, force) {
        Ok(written) if written.is_empty() => {
            println!(
                "✓ Data directory already initialised: {}",
                store.root().display()
            );
            println!("  Use --force to overwrite it with the sample documents.");
        }
        Ok(written) => {
            for kind in written {
                println!("✓ Wrote {}", store.path_of(kind).display());
            }
        }
        Err(err) => {
            report_store_error(&err);
            std::process::exit(1);
        }
    }
}
