//! uge-migrate CLI - Command-line interface for the .uge wave length migration
//!
//! This binary migrates batches of GB Studio .uge files and inspects
//! individual songs.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use uge_migrate_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Migrate {
            files,
            input_dir,
            out_dir,
            force,
            dry_run,
            json,
        } => commands::migrate::run(&commands::migrate::MigrateOptions {
            files,
            input_dir,
            out_dir,
            force,
            dry_run,
            json,
        }),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_migrate_defaults() {
        let cli = Cli::try_parse_from(["uge-migrate", "migrate", "a.uge", "b.UGE"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Migrate {
                files,
                input_dir,
                out_dir,
                force,
                dry_run,
                json,
            } => {
                assert_eq!(files, vec!["a.uge", "b.UGE"]);
                assert_eq!(input_dir, None);
                assert_eq!(out_dir, "migrated");
                assert!(!force);
                assert!(!dry_run);
                assert!(!json);
            }
            _ => panic!("expected migrate command"),
        }
    }

    #[test]
    fn test_cli_parses_migrate_flags() {
        let cli = Cli::try_parse_from([
            "uge-migrate",
            "-v",
            "migrate",
            "--input-dir",
            "songs",
            "-o",
            "out",
            "--force",
            "--dry-run",
            "--json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Migrate {
                files,
                input_dir,
                out_dir,
                force,
                dry_run,
                json,
            } => {
                assert!(files.is_empty());
                assert_eq!(input_dir.as_deref(), Some("songs"));
                assert_eq!(out_dir, "out");
                assert!(force && dry_run && json);
            }
            _ => panic!("expected migrate command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli =
            Cli::try_parse_from(["uge-migrate", "inspect", "--file", "song.uge", "--verbose"])
                .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Inspect { file, json } => {
                assert_eq!(file, "song.uge");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["uge-migrate"]).is_err());
    }
}
