//! # topics-cli
//!
//! The `topics` binary: list the taxonomy, classify inputs, or show how
//! inputs normalize, all against one model bundle directory.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Command, LogFormat};
