//! uge-migrate CLI library.
//!
//! This crate provides the commands behind the `uge-migrate` binary: input
//! discovery, the migrate and inspect commands, and their reports.

pub mod commands;
pub mod input;
pub mod logging;
