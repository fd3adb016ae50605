use serde::{Deserialize, Serialize};

/// Display theme for the session
///
/// Session-scoped only: the theme deliberately resets to bright on reload,
/// unlike the persisted zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light theme
    #[default]
    Bright,
    /// High-contrast dark theme
    Night,
}

impl Theme {
    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Bright => Theme::Night,
            Theme::Night => Theme::Bright,
        }
    }

    /// Live-region announcement for switching to this theme
    pub fn announcement(&self) -> &'static str {
        match self {
            Theme::Bright => "Light mode activated",
            Theme::Night => "Dark mode activated",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Bright => write!(f, "bright"),
            Theme::Night => write!(f, "night"),
        }
    }
}
