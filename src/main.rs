//! CLI entry point for keyremap-manager
//!
//! Provides a command-line interface for checking remap files for
//! conflicts, listing remaps, comparing keys or shortcuts, and printing
//! the key names the parser understands.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use keyremap_manager::config::validator::{RemapValidator, ValidationLevel};
use keyremap_manager::config::{ConfigManager, DEFAULT_CONFIG_PATH};
use keyremap_manager::core::parser::{parse_shortcut, RemapEntry};
use keyremap_manager::core::{
    evaluate_key_overlap, evaluate_shortcut_overlap, ConflictKind, KeyboardLayout, Remap,
    StandardLayout,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keyremap-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a remap file for conflicts
    Check {
        /// Path to remap file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all remaps
    List {
        /// Path to remap file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Check whether two keys or two shortcuts conflict
    Compare {
        /// First key or shortcut (e.g. `LCtrl` or `Ctrl+A`)
        first: String,
        /// Second key or shortcut
        second: String,
    },

    /// List key names accepted in remap files
    Keys {
        /// List names available in shortcuts (adds side-agnostic modifiers)
        #[arg(long)]
        shortcut: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let layout = StandardLayout::new();

    match cli.command {
        Commands::Check { config, json } => check_remaps(config, json, &layout)?,
        Commands::List { config } => list_remaps(config, &layout)?,
        Commands::Compare { first, second } => compare(&first, &second, &layout)?,
        Commands::Keys { shortcut } => list_keys(shortcut, &layout),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(
    config_path: PathBuf,
    layout: &StandardLayout,
) -> anyhow::Result<(PathBuf, Vec<RemapEntry>)> {
    let manager = ConfigManager::new(config_path).context("Failed to open remap file")?;
    let entries = manager
        .load_remaps(layout)
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;

    Ok((manager.config_path().to_path_buf(), entries))
}

/// Check remap file for conflicts
fn check_remaps(config_path: PathBuf, json: bool, layout: &StandardLayout) -> anyhow::Result<()> {
    let (path, entries) = load(config_path, layout)?;
    let report = RemapValidator::new().validate(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if report.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{} Parsing remaps: {}", "→".cyan(), path.display());
    println!("{} Found {} remaps\n", "✓".green(), report.checked);

    if report.issues.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
        return Ok(());
    }

    for issue in &report.issues {
        let label = match issue.validation_level {
            ValidationLevel::Error => "error".red().bold(),
            ValidationLevel::Warning => "warning".yellow().bold(),
        };
        let remap = entries
            .iter()
            .find(|e| e.line == issue.line)
            .map(|e| e.remap.to_string())
            .unwrap_or_default();

        println!(
            "{} {} {}",
            label,
            format!("line {}:", issue.line).dimmed(),
            remap.cyan()
        );
        match issue.conflicts_with {
            Some(other) => println!("  {} (see line {})", issue.message, other),
            None => println!("  {}", issue.message),
        }
    }

    println!();
    if report.has_errors() {
        println!(
            "{} Found {} error{}",
            "✗".red().bold(),
            report.error_count(),
            if report.error_count() == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }

    println!(
        "{} {} warning{}",
        "⚠".yellow(),
        report.warning_count(),
        if report.warning_count() == 1 { "" } else { "s" }
    );
    Ok(())
}

/// List all remaps in the file
fn list_remaps(config_path: PathBuf, layout: &StandardLayout) -> anyhow::Result<()> {
    let (path, entries) = load(config_path, layout)?;

    println!("{}", format!("Remaps from: {}\n", path.display()).bold());

    for entry in &entries {
        let (kind, original, new) = match entry.remap {
            Remap::Key(r) => ("key", r.original.to_string(), r.new.to_string()),
            Remap::Shortcut(r) => ("shortcut", r.original.to_string(), r.new.to_string()),
        };
        println!(
            "{} {} → {}",
            format!("{:>8}", kind).dimmed(),
            original.cyan().bold(),
            new.green()
        );
    }

    println!("\n{} Total: {} remaps", "✓".green(), entries.len());

    Ok(())
}

/// Compare two keys, or two shortcuts when either argument contains `+`
fn compare(first: &str, second: &str, layout: &StandardLayout) -> anyhow::Result<()> {
    let outcome = if first.contains('+') || second.contains('+') {
        let a = parse_shortcut(first, 1, layout)?;
        let b = parse_shortcut(second, 1, layout)?;
        if !a.is_valid() || !b.is_valid() {
            println!("{} {}", "⚠".yellow(), ConflictKind::InvalidShortcut);
        }
        evaluate_shortcut_overlap(&a, &b)
    } else {
        let a = layout
            .key_from_name(first)
            .with_context(|| format!("Unknown key '{}'", first))?;
        let b = layout
            .key_from_name(second)
            .with_context(|| format!("Unknown key '{}'", second))?;
        evaluate_key_overlap(a, b)
    };

    if outcome.is_error() {
        println!("{} {}", "✗".red().bold(), outcome);
        std::process::exit(1);
    }

    println!("{} {}", "✓".green().bold(), "No conflict".bold());
    Ok(())
}

/// Print the picker list of the layout
fn list_keys(for_shortcut: bool, layout: &StandardLayout) {
    let names: Vec<String> = layout
        .key_names(for_shortcut)
        .into_iter()
        .filter(|name| name != "None")
        .collect();

    for name in &names {
        println!("{}", name);
    }
    println!("\n{} Total: {} keys", "✓".green(), names.len());
}
