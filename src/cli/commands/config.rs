//! Config command handler

use super::confirm;
use crate::args::ConfigSubcommand;
use career_guide::config::Config;
use career_guide::info;
use career_guide::logger::Level;

/// Keys accepted by `config get|set|unset`
const KEYS: [&str; 8] = [
    "level",
    "file",
    "verbose",
    "data_dir",
    "reports_dir",
    "pdf_converter",
    "username",
    "password",
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

fn unknown_key(key: &str) -> ! {
    eprintln!("✗ Unknown config key: '{key}'");
    eprintln!("  Valid keys: {}", KEYS.join(", "));
    std::process::exit(1);
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => unknown_key(&k),
        }
    } else {
        println!("\n=== Configuration ===\n");
        println!("  (file: {})\n", Config::get_config_file_path().display());
        print!("{config}");
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if config.get(key).is_none() {
        unknown_key(key);
    }
    if key == "level" && value.parse::<Level>().is_err() {
        eprintln!("✗ Invalid log level '{value}' (expected error, warn, info or debug)");
        std::process::exit(1);
    }
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    save_or_exit(config);
    info!("Config key '{key}' updated");

    let shown = if key == "password" { "********" } else { value };
    println!("✓ Set {key} = {shown}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if config.unset(key, defaults).is_err() {
        unknown_key(key);
    }

    save_or_exit(config);
    info!("Config key '{key}' reset to default");
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if confirm("Are you sure you want to reset config to defaults?") {
        if let Err(e) = Config::reset() {
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
