use serde::{Deserialize, Serialize};

/// An in-app destination the assistant can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Account creation form
    Signup,
    /// Login form
    Login,
    /// Main dashboard with sidebar and chat
    Dashboard,
    /// Help page
    Help,
    /// Account details form
    ViewAccount,
    /// Password change form
    ChangePassword,
    /// Account deletion confirmation
    DeleteAccount,
    /// Text-to-speech converter
    TextToSpeech,
    /// Speech-to-text converter
    SpeechToText,
    /// Image OCR page
    ImageToText,
    /// PDF text extraction page
    PdfToText,
    /// Keyboard shortcut reference
    KeyboardShortcuts,
}

impl Route {
    /// Get the path string used by the host's navigation layer
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Signup => "/signup",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Help => "/help",
            Route::ViewAccount => "/view-account",
            Route::ChangePassword => "/change-password",
            Route::DeleteAccount => "/delete-account",
            Route::TextToSpeech => "/text-to-speech",
            Route::SpeechToText => "/speech-to-text",
            Route::ImageToText => "/image-to-text",
            Route::PdfToText => "/pdf-to-text",
            Route::KeyboardShortcuts => "/keyboardshortcuts",
        }
    }

    /// Parse a path string back into a route
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/signup" => Some(Route::Signup),
            "/login" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            "/help" => Some(Route::Help),
            "/view-account" => Some(Route::ViewAccount),
            "/change-password" => Some(Route::ChangePassword),
            "/delete-account" => Some(Route::DeleteAccount),
            "/text-to-speech" => Some(Route::TextToSpeech),
            "/speech-to-text" => Some(Route::SpeechToText),
            "/image-to-text" => Some(Route::ImageToText),
            "/pdf-to-text" => Some(Route::PdfToText),
            "/keyboardshortcuts" => Some(Route::KeyboardShortcuts),
            _ => None,
        }
    }

    /// Routes reachable without a logged-in session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Signup | Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}
