// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI entry point for hotkey-chain
//!
//! Provides a command-line interface for checking a binding file for
//! collisions, listing bindings, and trying out chains by hand.

use clap::{Parser, Subcommand};
use colored::*;
use hotkey_chain::config::{expand_path, BindingStore};
use hotkey_chain::core::{parser::parse_chain, KeyChain, StandardKeyNames};
use tracing_subscriber::EnvFilter;

const DEFAULT_BINDINGS: &str = "~/.config/hotkey-chain/bindings.json";

#[derive(Parser)]
#[command(name = "hotkey-chain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a binding file for colliding triggers
    Check {
        /// Path to the bindings file
        #[arg(short, long, default_value = DEFAULT_BINDINGS)]
        bindings: String,
    },

    /// List all bindings
    List {
        /// Path to the bindings file
        #[arg(short, long, default_value = DEFAULT_BINDINGS)]
        bindings: String,
    },

    /// Check whether two chains collide, e.g. "Ctrl + C" "Ctrl + C + V"
    Collide {
        first: String,
        second: String,
    },

    /// Decode a persisted chain, e.g. "[17, 67]"
    Show {
        json: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { bindings } => check_collisions(&bindings)?,
        Commands::List { bindings } => list_bindings(&bindings)?,
        Commands::Collide { first, second } => compare_chains(&first, &second)?,
        Commands::Show { json } => show_chain(&json)?,
    }

    Ok(())
}

/// Console logging on stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_store(raw_path: &str) -> anyhow::Result<BindingStore> {
    let path = expand_path(raw_path);
    println!("{} Loading bindings: {}", "→".cyan(), path.display());
    Ok(BindingStore::load(&path)?)
}

/// Check a binding file for colliding triggers
fn check_collisions(raw_path: &str) -> anyhow::Result<()> {
    let store = load_store(raw_path)?;
    println!("{} Found {} bindings\n", "✓".green(), store.len());

    let collisions = store.detector().find_collisions();

    if collisions.is_empty() {
        println!("{} {}", "✓".green().bold(), "No collisions detected!".bold());
        return Ok(());
    }

    println!(
        "{} Found {} collision{}:\n",
        "✗".red().bold(),
        collisions.len(),
        if collisions.len() == 1 { "" } else { "s" }
    );

    for (i, collision) in collisions.iter().enumerate() {
        println!("{}", format!("Collision {}", i + 1).yellow().bold());
        for binding in [&collision.first, &collision.second] {
            println!(
                "  {} → {}",
                format!("{}", binding.trigger).cyan(),
                binding.name
            );
        }
        println!();
    }

    println!("{}", "⚠ These bindings cannot be told apart at runtime!".yellow());
    std::process::exit(1);
}

/// List all bindings in the file
fn list_bindings(raw_path: &str) -> anyhow::Result<()> {
    let store = load_store(raw_path)?;

    for binding in store.bindings() {
        let trigger = format!("{}", binding.trigger).cyan().bold();
        println!("{} → {}", trigger, binding.name.green());
    }

    println!("\n{} Total: {} bindings", "✓".green(), store.len());
    Ok(())
}

/// Parse two chains and report whether they collide
fn compare_chains(first: &str, second: &str) -> anyhow::Result<()> {
    let names = StandardKeyNames;
    let first = parse_chain(first, &names)?;
    let second = parse_chain(second, &names)?;

    if first.collides_with(&second) {
        println!(
            "{} {} collides with {}",
            "✗".red().bold(),
            first.display(&names).to_string().cyan(),
            second.display(&names).to_string().cyan()
        );
    } else {
        println!(
            "{} {} and {} are independent",
            "✓".green().bold(),
            first.display(&names).to_string().cyan(),
            second.display(&names).to_string().cyan()
        );
    }

    Ok(())
}

/// Decode a JSON array of key codes and print its display form
fn show_chain(json: &str) -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let nodes = value
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("Expected a JSON array of key codes"))?;

    match KeyChain::from_json(nodes) {
        Some(chain) => {
            println!("{} {}", "✓".green(), chain.to_string().cyan().bold());
            for stroke in chain.strokes() {
                println!("  {} {}", "type key".dimmed(), stroke.display(&StandardKeyNames));
            }
        }
        None => println!("{} Not a valid key chain", "✗".red().bold()),
    }

    Ok(())
}
