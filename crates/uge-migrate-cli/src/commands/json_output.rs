//! JSON output types for machine-readable CLI output.
//!
//! These are printed on stdout by `migrate --json` and `inspect --json`.
//! Field names are stable.

use serde::Serialize;
use uge_migrate::{MigrationError, MigrationSummary};

/// Error codes for failures that happen after the batch, while saving.
///
/// Per-file pipeline failures keep the codes assigned by `uge-migrate`
/// (`READ_xxx`, `DECODE_001`, `ENCODE_001`, `UNKNOWN_001`).
pub mod error_codes {
    /// Output file exists and `--force` was not given
    pub const OUTPUT_EXISTS: &str = "WRITE_001";
    /// Output file could not be written
    pub const OUTPUT_WRITE: &str = "WRITE_002";
}

/// Report of a `migrate` run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrateOutput {
    /// True when every input was migrated and saved
    pub success: bool,
    pub out_dir: String,
    pub dry_run: bool,
    pub migrated: Vec<MigratedJson>,
    pub errors: Vec<MigrationError>,
}

/// One migrated file.
#[derive(Debug, Clone, Serialize)]
pub struct MigratedJson {
    pub filename: String,
    pub output_path: String,
    /// Size of the migrated payload in bytes
    pub bytes: usize,
    /// BLAKE3 hash of the migrated payload
    pub blake3: String,
    pub summary: MigrationSummary,
    /// False on a dry run
    pub written: bool,
}

/// Report of an `inspect` run.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    pub filename: String,
    pub version: u32,
    pub name: String,
    pub artist: String,
    pub comment: String,
    pub ticks_per_row: u32,
    pub pattern_count: usize,
    pub wave_instruments: Vec<WaveInstrumentJson>,
}

/// A wave instrument as listed by `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct WaveInstrumentJson {
    /// 1-based instrument number as shown in the tracker
    pub number: usize,
    pub name: String,
    /// Stored length, `null` when the length is disabled
    pub length: Option<u32>,
    /// What `migrate` would store, `null` when it would leave the field alone
    pub migrated_length: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_migrate_output_shape() {
        let output = MigrateOutput {
            success: false,
            out_dir: "migrated".to_string(),
            dry_run: true,
            migrated: vec![MigratedJson {
                filename: "a.uge".to_string(),
                output_path: "migrated/a.uge".to_string(),
                bytes: 42,
                blake3: "abc".to_string(),
                summary: MigrationSummary {
                    rewritten: 2,
                    unset: 13,
                    out_of_range: 0,
                    out_of_domain: 0,
                },
                written: false,
            }],
            errors: vec![MigrationError {
                filename: "b.uge".to_string(),
                code: "DECODE_001".to_string(),
                message: "bad".to_string(),
            }],
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["migrated"][0]["filename"], "a.uge");
        assert_eq!(value["migrated"][0]["summary"]["rewritten"], 2);
        assert_eq!(value["migrated"][0]["written"], false);
        assert_eq!(value["errors"][0]["code"], "DECODE_001");
        assert_eq!(value["errors"][0]["message"], "bad");
    }

    #[test]
    fn test_disabled_length_is_null() {
        let wave = WaveInstrumentJson {
            number: 1,
            name: String::new(),
            length: None,
            migrated_length: None,
        };
        let value = serde_json::to_value(&wave).unwrap();
        assert!(value["length"].is_null());
        assert!(value["migrated_length"].is_null());
    }
}
