//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    file_loader,
    maze::Maze,
    types::{MainMenuItem, Screen},
    App,
};

/// How long to wait for a key press before advancing the animation.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a short timeout so the animation keeps running
/// while no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => app.exit = true,
                    KeyCode::Char('j') => handle_j_events(app),
                    KeyCode::Char('k') => handle_k_events(app),
                    KeyCode::Char('l') => handle_l_events(app)?,
                    KeyCode::Char('h') => handle_h_events(app),
                    KeyCode::Char('r') => handle_r_events(app),
                    KeyCode::Char('s') => handle_s_events(app),
                    _ => {}
                }
            }
        }
    }

    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update();
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function moves the highlighted main menu entry down, or moves the maze menu cursor down
/// and scrolls the viewport when the cursor leaves it.
pub(crate) fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.next()),
        Screen::MazeMenu => {
            if app.viewport_index + 1 < app.mazes.len() {
                app.viewport_index += 1;

                if app.viewport_height > 0
                    && app.viewport_index >= app.viewport_offset + app.viewport_height
                {
                    app.viewport_offset += 1;
                }
            }
        }
        Screen::InGame => {}
    }
}

/// Handles 'k' key press events for upward navigation.
///
/// Like the 'j' handler, behavior varies by screen and includes viewport management for the
/// scrollable maze list.
pub(crate) fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.previous()),
        Screen::MazeMenu => {
            app.viewport_index = app.viewport_index.saturating_sub(1);
            app.viewport_offset = app.viewport_offset.min(app.viewport_index);
        }
        Screen::InGame => {}
    }
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function handles screen transitions, maze file scanning when the maze menu opens, and
/// maze selection inside the maze menu.
///
/// # Errors
///
/// This function may return errors if the maze directory cannot be listed or the cursor points
/// past the maze list.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Solve) => {
            app.animation_manager.clear();
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Mazes) => {
            app.mazes.clear();
            app.mazes.push(Maze::default());
            file_loader::fetch_files(&app.maps_dir, &mut app.mazes)?;

            app.viewport_index = app
                .mazes
                .iter()
                .position(|maze| *maze == app.maze)
                .unwrap_or_default();
            app.viewport_offset = 0;
            app.clamp_viewport();
            app.screen = Screen::MazeMenu;
        }
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::MazeMenu => {
            let maze = app
                .mazes
                .get(app.viewport_index)
                .cloned()
                .ok_or_eyre("failed to retrieve cursor-selected maze")?;
            app.select_maze(maze);
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function handles returning from the in-game screen to the main menu and from the maze
/// menu to the main menu.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.animation_manager.clear();
            app.screen = Screen::MainMenu(MainMenuItem::Solve);
        }
        Screen::MazeMenu => app.screen = Screen::MainMenu(MainMenuItem::Mazes),
        Screen::MainMenu(_) => {}
    }
}

/// Handles 'r' key press events, which replay the search animation from the start.
pub(crate) fn handle_r_events(app: &mut App) {
    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.reset();
    }
}

/// Handles 's' key press events, which skip to the end of the search animation.
pub(crate) fn handle_s_events(app: &mut App) {
    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.finish();
    }
}
