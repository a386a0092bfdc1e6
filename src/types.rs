//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. This is used
/// to determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the main menu and remembers the highlighted entry.
    MainMenu(MainMenuItem),
    /// Search visualization screen.
    ///
    /// This variant represents the screen where the maze is displayed and the search is replayed.
    InGame,
    /// Maze selection screen.
    ///
    /// This variant represents the maze menu. It contains a list of the mazes available to the
    /// user.
    MazeMenu,
}

/// Main menu navigation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Solve" menu option, which opens the search visualization.
    Solve,
    /// "Mazes" menu option, which opens the maze menu.
    Mazes,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Every entry, in display order.
    pub(crate) const ALL: [Self; 3] = [Self::Solve, Self::Mazes, Self::Quit];

    /// Returns the label shown for the entry.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Solve => "Solve",
            Self::Mazes => "Mazes",
            Self::Quit => "Quit",
        }
    }

    /// Returns the entry below this one, staying on the last entry.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Solve => Self::Mazes,
            Self::Mazes | Self::Quit => Self::Quit,
        }
    }

    /// Returns the entry above this one, staying on the first entry.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Solve | Self::Mazes => Self::Solve,
            Self::Quit => Self::Mazes,
        }
    }
}
