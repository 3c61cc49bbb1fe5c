use colored::Colorize;
use std::path::Path;

use uge_migrate::{MigrationSummary, LENGTH_PIVOT};

use super::migrate::{MigrateReport, SavedFile};

pub(crate) fn print_no_inputs() {
    println!("{} No .uge files to migrate", "INFO".cyan().bold());
}

/// Print the human-readable report of a migrate run.
pub(crate) fn print_migrate_report(report: &MigrateReport, out_dir: &Path, dry_run: bool) {
    let total = report.saved.len() + report.errors.len();
    println!(
        "{} {} file(s) into {}",
        "Migrating:".cyan().bold(),
        total,
        out_dir.display()
    );
    if dry_run {
        println!("{} nothing will be written", "Dry run:".yellow().bold());
    }

    for saved in &report.saved {
        print_saved_file(saved);
    }

    for error in &report.errors {
        println!(
            "\n  {} {}",
            "✗".red().bold(),
            error.filename.bold()
        );
        println!("    {:20} {}", "Code:".dimmed(), error.code.red());
        println!("    {:20} {}", "Message:".dimmed(), error.message);
    }

    println!("\n{}", "=".repeat(60).dimmed());
    println!("{}", "Migration Summary".bold());
    println!("  Total:    {}", total);
    println!(
        "  Migrated: {}",
        if report.errors.is_empty() {
            report.saved.len().to_string().green()
        } else {
            report.saved.len().to_string().normal()
        }
    );
    println!(
        "  Failed:   {}",
        if report.errors.is_empty() {
            "0".normal()
        } else {
            report.errors.len().to_string().red()
        }
    );

    if report.is_success() {
        println!("\n{} All files migrated", "SUCCESS".green().bold());
    } else {
        println!(
            "\n{} {} file(s) could not be migrated",
            "FAILED".red().bold(),
            report.errors.len()
        );
    }
}

fn print_saved_file(saved: &SavedFile) {
    let file = &saved.file;
    println!("\n  {} {}", "✓".green().bold(), file.filename.bold());

    let status = if saved.written { "" } else { " (not written)" };
    println!(
        "    {:20} {}{}",
        "Output:".dimmed(),
        saved.output_path.display(),
        status.dimmed()
    );
    println!("    {:20} {} bytes", "Size:".dimmed(), file.data.len());
    println!("    {:20} {}", "BLAKE3:".dimmed(), file.content_hash());
    println!(
        "    {:20} {} rewritten, {} unset",
        "Wave lengths:".dimmed(),
        file.summary.rewritten,
        file.summary.unset
    );

    if let Some(warning) = summary_warning(&file.summary) {
        println!("    {} {}", "⚠".yellow().bold(), warning.yellow());
    }
}

/// Warning line for lengths that ended up outside the usual range.
pub(crate) fn summary_warning(summary: &MigrationSummary) -> Option<String> {
    let mut parts = Vec::new();
    if summary.out_of_range > 0 {
        parts.push(format!(
            "{} wave length(s) of 0 became {}",
            summary.out_of_range, LENGTH_PIVOT
        ));
    }
    if summary.out_of_domain > 0 {
        parts.push(format!(
            "{} wave length(s) above {} left unchanged",
            summary.out_of_domain, LENGTH_PIVOT
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
