//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Runtime settings collected from the command line.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Maze file to solve on startup instead of the built-in maze.
    #[arg(short, long, value_name = "PATH")]
    pub maze: Option<PathBuf>,
    /// Directory scanned for `.txt` maze files in the maze menu.
    #[arg(short = 'd', long, value_name = "DIR", default_value = "mazes")]
    pub maps_dir: PathBuf,
    /// Delay between two visited cells in the search animation, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 20)]
    pub visit_delay_ms: u64,
    /// Delay between two path cells in the search animation, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 30)]
    pub trace_delay_ms: u64,
    /// File receiving log output while the terminal interface is running.
    #[arg(long, value_name = "PATH", default_value = "mazebot.log")]
    pub log_file: PathBuf,
    /// Print the solved maze to stdout instead of starting the terminal interface.
    #[arg(long)]
    pub headless: bool,
}

impl Config {
    /// Parses the configuration from the process arguments, exiting on invalid input.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Returns the delay between two visited cells in the animation.
    #[must_use]
    pub const fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    /// Returns the delay between two path cells in the animation.
    #[must_use]
    pub const fn trace_delay(&self) -> Duration {
        Duration::from_millis(self.trace_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["mazebot"]).expect("defaults should parse");

        assert_eq!(config.maze, None);
        assert_eq!(config.maps_dir, PathBuf::from("mazes"));
        assert_eq!(config.visit_delay(), Duration::from_millis(20));
        assert_eq!(config.trace_delay(), Duration::from_millis(30));
        assert_eq!(config.log_file, PathBuf::from("mazebot.log"));
        assert!(!config.headless);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "mazebot",
            "--maze",
            "mazes/wide_maze_2.txt",
            "-d",
            "elsewhere",
            "--visit-delay-ms",
            "5",
            "--trace-delay-ms",
            "7",
            "--headless",
        ])
        .expect("arguments should parse");

        assert_eq!(config.maze, Some(PathBuf::from("mazes/wide_maze_2.txt")));
        assert_eq!(config.maps_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.visit_delay_ms, 5);
        assert_eq!(config.trace_delay_ms, 7);
        assert!(config.headless);
    }

    #[test]
    fn test_rejects_non_numeric_delay() {
        assert!(Config::try_parse_from(["mazebot", "--visit-delay-ms", "soon"]).is_err());
    }
}
