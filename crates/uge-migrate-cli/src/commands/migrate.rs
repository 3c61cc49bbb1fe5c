//! Migrate command implementation
//!
//! Runs a batch of .uge files through the wave length migration and saves the
//! results under the output directory.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use uge_migrate::{migrate_batch, BatchOutcome, DiskFile, MigratedFile, MigrationError, UgeCodec};

use super::json_output::{error_codes, MigrateOutput, MigratedJson};
use super::reporting;
use crate::input::{collect_inputs, duplicate_file_names};

/// Options for the migrate command.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub files: Vec<String>,
    pub input_dir: Option<String>,
    pub out_dir: String,
    pub force: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// A migrated file and where it went.
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub file: MigratedFile,
    pub output_path: PathBuf,
    /// False on a dry run
    pub written: bool,
}

/// Everything a migrate run produced.
#[derive(Debug, Clone, Default)]
pub struct MigrateReport {
    pub saved: Vec<SavedFile>,
    pub errors: Vec<MigrationError>,
}

impl MigrateReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run the migrate command
///
/// # Returns
/// Exit code: 0 if every file was migrated and saved, 1 otherwise
pub fn run(options: &MigrateOptions) -> Result<ExitCode> {
    let inputs = collect_inputs(&options.files, options.input_dir.as_deref())?;

    let duplicates = duplicate_file_names(&inputs);
    if !duplicates.is_empty() {
        bail!(
            "Inputs share a file name and would overwrite each other in {}: {}",
            options.out_dir,
            duplicates.join(", ")
        );
    }

    if inputs.is_empty() && !options.json {
        reporting::print_no_inputs();
        return Ok(ExitCode::SUCCESS);
    }
    info!(count = inputs.len(), "collected inputs");

    let out_dir = PathBuf::from(&options.out_dir);
    if !options.dry_run && !inputs.is_empty() {
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    }

    let outcome = migrate_batch(&UgeCodec, inputs.iter().map(DiskFile::new));
    let report = save_outcome(outcome, &out_dir, options.force, options.dry_run);

    if options.json {
        let output = to_json(&report, options);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        reporting::print_migrate_report(&report, &out_dir, options.dry_run);
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Write each migrated payload to `out_dir`, keeping its file name.
///
/// Pipeline failures are carried over as-is; a payload that cannot be saved
/// becomes an error of its own and is dropped from the saved list.
pub fn save_outcome(outcome: BatchOutcome, out_dir: &Path, force: bool, dry_run: bool) -> MigrateReport {
    let BatchOutcome { migrated, errors } = outcome;
    let mut report = MigrateReport {
        saved: Vec::with_capacity(migrated.len()),
        errors,
    };

    for file in migrated {
        let output_path = out_dir.join(&file.filename);

        if dry_run {
            report.saved.push(SavedFile {
                file,
                output_path,
                written: false,
            });
            continue;
        }

        if output_path.exists() && !force {
            report.errors.push(MigrationError {
                filename: file.filename,
                code: error_codes::OUTPUT_EXISTS.to_string(),
                message: format!(
                    "Output file already exists: {} (use --force to overwrite)",
                    output_path.display()
                ),
            });
            continue;
        }

        match fs::write(&output_path, &file.data) {
            Ok(()) => {
                info!(file = %file.filename, path = %output_path.display(), "wrote migrated file");
                report.saved.push(SavedFile {
                    file,
                    output_path,
                    written: true,
                });
            }
            Err(e) => report.errors.push(MigrationError {
                filename: file.filename,
                code: error_codes::OUTPUT_WRITE.to_string(),
                message: format!("Failed to write {}: {}", output_path.display(), e),
            }),
        }
    }

    report
}

fn to_json(report: &MigrateReport, options: &MigrateOptions) -> MigrateOutput {
    MigrateOutput {
        success: report.is_success(),
        out_dir: options.out_dir.clone(),
        dry_run: options.dry_run,
        migrated: report
            .saved
            .iter()
            .map(|saved| MigratedJson {
                filename: saved.file.filename.clone(),
                output_path: saved.output_path.display().to_string(),
                bytes: saved.file.data.len(),
                blake3: saved.file.content_hash(),
                summary: saved.file.summary,
                written: saved.written,
            })
            .collect(),
        errors: report.errors.clone(),
    }
}
