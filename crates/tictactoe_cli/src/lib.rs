//! Terminal host for the tic-tac-toe engine.
//!
//! Maps text commands to engine calls, renders the board as text and keeps
//! a running scoreboard across rounds.

#![warn(missing_docs)]

mod cli;
mod config;
mod host;

pub use cli::Cli;
pub use config::{ConfigError, HostConfig};
pub use host::Host;
