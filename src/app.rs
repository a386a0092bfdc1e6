//! Core application state and logic for the maze solver.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    animation::AnimationManager,
    config::Config,
    events, file_loader,
    maze::Maze,
    pathfinding::{self, SearchResult},
    types::{MainMenuItem, Screen},
    ui,
};

/// Application state container for the maze solver.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the interface and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Currently active maze.
    ///
    /// This field always holds a maze, either the built-in one, the one named on the command line,
    /// or one picked by the user in the maze menu.
    pub(crate) maze: Maze,
    /// Mazes listed in the maze menu.
    ///
    /// The built-in maze comes first, followed by the maze files found in
    /// [`maps_dir`](App::maps_dir) sorted by key.
    pub(crate) mazes: Vec<Maze>,
    /// Index of the maze under the cursor in the maze menu.
    pub(crate) viewport_index: usize,
    /// Scrolling offset for the maze list viewport.
    ///
    /// This field holds the offset by which to scroll the sliding window into the
    /// [`mazes`](App::mazes) vector in the maze menu's viewport.
    pub(crate) viewport_offset: usize,
    /// Height of the maze list rendering area.
    ///
    /// This field holds the height of the area in which the list of mazes is rendered, as a
    /// measure of terminal cells during the last redraw of the on-screen frame.
    pub(crate) viewport_height: usize,
    /// Directory scanned for maze files.
    pub(crate) maps_dir: PathBuf,
    /// Search result for the active maze, computed on first display.
    pub(crate) solution: Option<SearchResult>,
    /// Animation manager for search visualization.
    ///
    /// This field manages the animation state including timing, current step tracking, and the
    /// cells displayed so far during the animated replay.
    pub(crate) animation_manager: AnimationManager,
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze named in the configuration cannot be loaded.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Solve),
            maze: file_loader::initial_maze(config)?,
            mazes: Vec::new(),
            viewport_index: 0,
            viewport_offset: 0,
            viewport_height: 0,
            maps_dir: config.maps_dir.clone(),
            solution: None,
            animation_manager: AnimationManager::new(config.visit_delay(), config.trace_delay()),
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Makes `maze` the active maze, discarding the previous solution.
    pub(crate) fn select_maze(&mut self, maze: Maze) {
        info!(key = %maze.key, "selected maze");
        self.maze = maze;
        self.solution = None;
        self.animation_manager.clear();
    }

    /// Scrolls the maze list so the cursor lies inside the viewport.
    ///
    /// The offset keeps `offset <= index < offset + height` once the viewport height is known.
    pub(crate) fn clamp_viewport(&mut self) {
        self.viewport_offset = self.viewport_offset.min(self.viewport_index);

        if self.viewport_height > 0 {
            self.viewport_offset = self
                .viewport_offset
                .max((self.viewport_index + 1).saturating_sub(self.viewport_height));
        }
    }

    /// Solves the active maze if needed and loads the replay into the animation manager.
    ///
    /// # Errors
    ///
    /// This function may return errors if the maze endpoints are rejected by the search.
    pub(crate) fn solve(&mut self) -> Result<()> {
        let solution = match self.solution.take() {
            Some(solution) => solution,
            None => pathfinding::search(&self.maze.grid, self.maze.start, self.maze.goal)?,
        };

        info!(
            key = %self.maze.key,
            solved = solution.is_solved(),
            optimal = ?solution.optimal_length(),
            traversed = solution.traversed_length(),
            "search finished"
        );

        self.animation_manager.load(&solution);
        self.solution = Some(solution);

        Ok(())
    }
}
