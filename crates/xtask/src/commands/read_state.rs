//! Read and inspect state files written by the file repository.
//!
//! Deserializes `state_{turn}.bin` files and displays their contents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use hearthwild_core::GameState;
use hearthwild_runtime::FileStateRepository;

/// Read and inspect a saved state file
#[derive(Parser)]
pub struct ReadState {
    /// Path to a `state_{turn}.bin` file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (clock, player, creatures, items)
    Summary,
    /// Full JSON output
    Json,
}

impl ReadState {
    pub fn execute(self) -> Result<()> {
        if !self.file.exists() {
            anyhow::bail!("State file not found: {}", self.file.display());
        }
        let size = std::fs::metadata(&self.file)
            .with_context(|| format!("Failed to stat state file: {}", self.file.display()))?
            .len();
        let state = FileStateRepository::read_path(&self.file).with_context(|| {
            format!("Failed to deserialize state file: {}", self.file.display())
        })?;

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("State File:").bold().cyan(),
                    self.file.display()
                );
                println!("{} {}", style("File Size:").bold().cyan(), format_bytes(size));
                println!();
                print_summary(&state);
            }
            OutputFormat::Json => print_json(&state)?,
        }
        Ok(())
    }
}

fn print_summary(state: &GameState) {
    println!("{}", style("=== Game State Summary ===").bold().green());
    println!();

    println!("{}", style("Turn Information:").bold().yellow());
    println!("  Turn: {}", state.clock.turn);
    println!("  Clock: {} ({})", state.clock.time_string(), state.clock.period());
    println!("  Ambient: {:.1}°C", state.clock.ambient_temperature);
    println!("  Phase: {}", state.phase);
    println!();

    let grid = &state.grid;
    let explored = grid.explored().iter().filter(|&&seen| seen).count();
    println!("{}", style("World:").bold().yellow());
    println!("  Size: {}x{}", grid.width(), grid.height());
    println!("  Explored: {}/{} cells", explored, grid.explored().len());
    println!("  Items on the ground: {}", grid.items().len());
    println!();

    println!("{}", style("Actors:").bold().yellow());
    for actor in grid.actors() {
        let marker = if actor.id == state.player { "*" } else { " " };
        let hp = actor
            .fighter
            .map(|f| format!("{}/{}", f.hp(), f.max_hp()))
            .unwrap_or_else(|| "-".to_owned());
        println!(
            " {}{} {} '{}' at {} HP {}",
            marker,
            actor.id,
            actor.name(),
            actor.entity.glyph,
            actor.position(),
            hp
        );
    }
    println!();

    if let Some(player) = state.player() {
        if let Some(survival) = &player.survival {
            println!("{}", style("Survival:").bold().yellow());
            println!("  {}", survival.status_summary());
            println!();
        }
        if let Some(inventory) = &player.inventory {
            println!("{}", style("Inventory:").bold().yellow());
            if inventory.is_empty() {
                println!("  (empty)");
            }
            for (index, item) in inventory.iter().enumerate() {
                let letter = char::from(b'a' + index as u8);
                println!("  {}) {}", letter, item.name());
            }
            println!();
        }
    }

    println!("{}", style("Messages:").bold().yellow());
    for message in state.log.recent(10) {
        println!("  {}", message.text);
    }
}

fn print_json(state: &GameState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
    println!("{}", json);
    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
