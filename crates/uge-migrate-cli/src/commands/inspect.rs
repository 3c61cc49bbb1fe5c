//! Inspect command implementation
//!
//! Decodes a single .uge file and shows its header and wave instrument
//! lengths, alongside what `migrate` would turn each length into.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use uge_migrate::{read_source, DiskFile, SongCodec, UgeCodec, UgeSong, LENGTH_PIVOT, MAX_WAVE_LENGTH};

use super::json_output::{InspectOutput, WaveInstrumentJson};

/// Run the inspect command
///
/// # Arguments
/// * `file` - Path to the .uge file
/// * `json_output` - Whether to print JSON instead of colored text
///
/// # Returns
/// Exit code: 0 if the file decoded, otherwise an error
pub fn run(file: &str, json_output: bool) -> Result<ExitCode> {
    let source = DiskFile::new(file);
    let raw = read_source(&source).with_context(|| format!("Failed to read {}", file))?;
    let song = UgeCodec
        .decode(&raw.bytes)
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", file, e))?;

    let output = inspect_song(&raw.filename, &song);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output);
    }

    Ok(ExitCode::SUCCESS)
}

/// Collect what `inspect` shows about `song`.
pub fn inspect_song(filename: &str, song: &UgeSong) -> InspectOutput {
    InspectOutput {
        filename: filename.to_string(),
        version: song.version,
        name: song.name.clone(),
        artist: song.artist.clone(),
        comment: song.comment.clone(),
        ticks_per_row: song.ticks_per_row,
        pattern_count: song.patterns.len(),
        wave_instruments: song
            .wave_instruments
            .iter()
            .enumerate()
            .map(|(index, instrument)| WaveInstrumentJson {
                number: index + 1,
                name: instrument.name.clone(),
                length: instrument.length,
                migrated_length: instrument
                    .length
                    .and_then(|length| LENGTH_PIVOT.checked_sub(length)),
            })
            .collect(),
    }
}

fn print_human(output: &InspectOutput) {
    println!("{} {}", "Inspecting:".cyan().bold(), output.filename);
    println!("{}", "=".repeat(60).dimmed());
    println!("  {:20} {}", "Version:".dimmed(), output.version);
    println!("  {:20} {}", "Name:".dimmed(), output.name);
    println!("  {:20} {}", "Artist:".dimmed(), output.artist);
    if !output.comment.is_empty() {
        println!("  {:20} {}", "Comment:".dimmed(), output.comment);
    }
    println!("  {:20} {}", "Ticks per row:".dimmed(), output.ticks_per_row);
    println!("  {:20} {}", "Patterns:".dimmed(), output.pattern_count);

    println!("\n{}", "Wave instruments".bold());
    for wave in &output.wave_instruments {
        let name = if wave.name.is_empty() {
            "(unnamed)".dimmed().to_string()
        } else {
            wave.name.clone()
        };
        match (wave.length, wave.migrated_length) {
            (None, _) => println!("  {:>2}  {:24} {}", wave.number, name, "length off".dimmed()),
            (Some(length), Some(migrated)) => {
                let arrow = format!("{} -> {}", length, migrated);
                if migrated > MAX_WAVE_LENGTH {
                    println!(
                        "  {:>2}  {:24} {} {}",
                        wave.number,
                        name,
                        arrow,
                        "⚠ out of range".yellow()
                    );
                } else {
                    println!("  {:>2}  {:24} {}", wave.number, name, arrow);
                }
            }
            (Some(length), None) => println!(
                "  {:>2}  {:24} {} {}",
                wave.number,
                name,
                length,
                "⚠ left unchanged".yellow()
            ),
        }
    }
}
