//! File loading utilities for maze files.

use std::{ffi::OsStr, fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use tracing::{debug, info, warn};

use crate::{config::Config, maze::Maze};

/// Extension of maze files picked up by [`fetch_files`].
const MAZE_EXTENSION: &str = "txt";

/// Loads and parses a single maze file.
///
/// The maze is keyed by the file name without its extension.
///
/// # Errors
///
/// This function may return errors if:
/// - The file name cannot be converted to a string slice
/// - The file cannot be read
/// - The contents are not a valid maze
pub(crate) fn load_file(path: &Path) -> Result<Maze> {
    let key = path
        .file_stem()
        .ok_or_eyre("maze path has no file name")?
        .to_str()
        .ok_or_eyre("failed to convert osstr to string slice")?;
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    let maze = Maze::parse(key, &contents)
        .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))?;
    info!(
        key = %maze.key,
        rows = maze.grid.rows(),
        cols = maze.grid.cols(),
        "loaded maze"
    );

    Ok(maze)
}

/// Returns the maze named on the command line, or the built-in maze when none was given.
///
/// # Errors
///
/// This function may return errors if the named maze file cannot be loaded.
pub(crate) fn initial_maze(config: &Config) -> Result<Maze> {
    config
        .maze
        .as_deref()
        .map_or_else(|| Ok(Maze::default()), load_file)
}

/// Scans a directory for maze files and loads them.
///
/// This function searches `dir` for files with the `.txt` extension, parses each of them, and
/// appends the valid ones to `mazes` sorted by key. Files that fail to parse are logged and
/// skipped. A missing directory simply contributes no mazes.
///
/// # Errors
///
/// This function may return errors if the directory exists but cannot be listed.
pub(crate) fn fetch_files(dir: &Path, mazes: &mut Vec<Maze>) -> Result<()> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "maze directory not found");
        return Ok(());
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir()
            || path.extension().and_then(OsStr::to_str) != Some(MAZE_EXTENSION)
        {
            continue;
        }

        match load_file(&path) {
            Ok(maze) => found.push(maze),
            Err(err) => warn!(path = %path.display(), "skipping maze file: {err:#}"),
        }
    }

    found.sort_by(|left, right| left.key.cmp(&right.key));
    mazes.extend(found);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use tempfile::TempDir;

    use super::*;

    /// Writes a file with the given name and contents into `dir`.
    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).expect("failed to write test file");
    }

    #[test]
    fn test_load_file_valid() {
        let dir = TempDir::new().expect("failed to create temp dir");
        write(&dir, "corridor.txt", "1\nS..G\n");

        let maze = load_file(&dir.path().join("corridor.txt")).expect("maze should load");

        assert_eq!(maze.key, "corridor");
        assert_eq!(maze.grid.cols(), 4);
    }

    #[test]
    fn test_load_file_missing() {
        let dir = TempDir::new().expect("failed to create temp dir");

        assert!(load_file(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_load_file_invalid_contents() {
        let dir = TempDir::new().expect("failed to create temp dir");
        write(&dir, "broken.txt", "2\nS.\n");

        let err = load_file(&dir.path().join("broken.txt")).expect_err("maze is truncated");

        assert!(format!("{err:#}").contains("expected 2 rows but found 1"));
    }

    #[test]
    fn test_fetch_files_filters_and_sorts() {
        let dir = TempDir::new().expect("failed to create temp dir");
        write(&dir, "zigzag.txt", "2\nS#\n.G\n");
        write(&dir, "alpha.txt", "1\nSG\n");
        write(&dir, "notes.md", "1\nSG\n");
        write(&dir, "broken.txt", "1\nS?G\n");
        fs::create_dir(dir.path().join("nested.txt")).expect("failed to create nested dir");

        let mut mazes = vec![Maze::default()];
        fetch_files(dir.path(), &mut mazes).expect("scan should succeed");

        let keys: Vec<_> = mazes.iter().map(|maze| maze.key.as_str()).collect();
        assert_eq!(keys, vec!["Default", "alpha", "zigzag"]);
    }

    #[test]
    fn test_initial_maze() {
        let dir = TempDir::new().expect("failed to create temp dir");
        write(&dir, "tiny.txt", "1\nSG\n");
        let path = dir.path().join("tiny.txt");

        let defaults = Config::try_parse_from(["mazebot"]).expect("defaults should parse");
        let named = Config::try_parse_from([
            OsStr::new("mazebot"),
            OsStr::new("--maze"),
            path.as_os_str(),
        ])
        .expect("arguments should parse");

        assert_eq!(initial_maze(&defaults).expect("default maze"), Maze::default());
        assert_eq!(initial_maze(&named).expect("named maze").key, "tiny");
    }

    #[test]
    fn test_fetch_files_missing_directory() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut mazes = Vec::new();

        fetch_files(&dir.path().join("missing"), &mut mazes).expect("missing dir is not an error");

        assert!(mazes.is_empty());
    }
}
