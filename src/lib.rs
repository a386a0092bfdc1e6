//! This crate contains an A* maze solver along with a terminal interface that replays the search.
//!
//! The library side exposes the [`grid`] model, the [`pathfinding`] search, the [`maze`] text
//! format, and the [`App`] state machine the binary drives.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io;

use color_eyre::eyre::Result;
use tracing::info;

pub mod config;
pub mod grid;
pub mod logging;
pub mod maze;
pub mod pathfinding;

mod animation;
mod app;
mod events;
mod file_loader;
mod report;
mod types;
mod ui;

pub use app::App;

use crate::config::Config;

/// Solves the configured maze and prints the report to stdout without starting the interface.
///
/// # Errors
///
/// This function may return errors if the maze cannot be loaded, its endpoints are rejected by the
/// search, or stdout cannot be written to.
pub fn run_headless(config: &Config) -> Result<()> {
    let maze = file_loader::initial_maze(config)?;
    let result = pathfinding::search(&maze.grid, maze.start, maze.goal)?;

    info!(
        key = %maze.key,
        solved = result.is_solved(),
        traversed = result.traversed_length(),
        "headless search finished"
    );

    report::write_report(&mut io::stdout().lock(), &maze, &result)
}
