use serde::{Deserialize, Serialize};

use super::Route;

/// An action produced by classifying a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Action {
    /// Navigate to an in-app route
    Navigate { route: Route },
    /// Open an external site in the host browser
    OpenSite { url: String },
    /// Flip between bright and night theme
    ToggleMode,
    /// Increase the zoom level by one step
    ZoomIn,
    /// Decrease the zoom level by one step
    ZoomOut,
    /// Return the zoom level to 100 percent
    ResetZoom,
    /// End the logged-in session
    Logout,
    /// Nothing in the transcript matched a rule
    Unrecognized,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Navigate { route } => write!(f, "navigate:{}", route.as_path()),
            Action::OpenSite { url } => write!(f, "open:{}", url),
            Action::ToggleMode => write!(f, "toggle-mode"),
            Action::ZoomIn => write!(f, "zoom-in"),
            Action::ZoomOut => write!(f, "zoom-out"),
            Action::ResetZoom => write!(f, "reset-zoom"),
            Action::Logout => write!(f, "logout"),
            Action::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Spoken feedback for an executed classification
///
/// Exactly one phrase is spoken per classified transcript. Navigation
/// outranks the generic confirmation; the fallback fires only when no rule
/// matched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// A destination was set and navigation is underway
    Navigating,
    /// At least one non-navigation action fired
    Completed,
    /// No rule matched the transcript
    NotUnderstood,
}

impl Feedback {
    /// The phrase handed to the speech-output collaborator
    pub fn phrase(&self) -> &'static str {
        match self {
            Feedback::Navigating => "Navigating to your requested page.",
            Feedback::Completed => "Action completed successfully.",
            Feedback::NotUnderstood => "I did not understand. Please try again.",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phrase())
    }
}
