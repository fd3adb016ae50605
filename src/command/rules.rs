//! Intent rule table
//!
//! Rules are evaluated in declaration order by substring containment. Every
//! matching rule fires; navigation rules write a single destination slot,
//! so when several navigation phrases co-occur the LAST one in the table
//! wins.

use crate::domain::Route;

/// How a rule's phrases are matched against a transcript
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Fires when any phrase is contained in the transcript
    Any(Vec<String>),
    /// Fires only when every phrase is contained ("log" + "out")
    All(Vec<String>),
}

impl Trigger {
    /// Build an any-of trigger from phrase literals
    pub fn any<const N: usize>(phrases: [&str; N]) -> Self {
        Trigger::Any(phrases.iter().map(|p| p.to_string()).collect())
    }

    /// Build an all-of trigger from phrase literals
    pub fn all<const N: usize>(phrases: [&str; N]) -> Self {
        Trigger::All(phrases.iter().map(|p| p.to_string()).collect())
    }

    /// Test against an already lowercased, trimmed transcript
    pub fn matches(&self, transcript: &str) -> bool {
        match self {
            Trigger::Any(phrases) => phrases.iter().any(|p| transcript.contains(p.as_str())),
            Trigger::All(phrases) => phrases.iter().all(|p| transcript.contains(p.as_str())),
        }
    }
}

/// What a matched rule does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Write the destination slot
    Navigate(Route),
    /// Flip the session theme
    ToggleMode,
    /// Step the zoom level up
    ZoomIn,
    /// Step the zoom level down
    ZoomOut,
}

/// One entry of the rule table
#[derive(Debug, Clone)]
pub struct CommandRule {
    pub trigger: Trigger,
    pub action: RuleAction,
}

impl CommandRule {
    pub fn new(trigger: Trigger, action: RuleAction) -> Self {
        Self { trigger, action }
    }
}

/// The built-in rule table, in faithful evaluation order
pub fn builtin_rules() -> Vec<CommandRule> {
    vec![
        CommandRule::new(Trigger::any(["help"]), RuleAction::Navigate(Route::Help)),
        CommandRule::new(
            Trigger::any(["toggle mode", "dark mode", "light mode"]),
            RuleAction::ToggleMode,
        ),
        CommandRule::new(
            Trigger::any(["zoom in", "magnify", "increase text"]),
            RuleAction::ZoomIn,
        ),
        CommandRule::new(Trigger::any(["zoom out", "decrease text"]), RuleAction::ZoomOut),
        CommandRule::new(
            Trigger::any(["view account"]),
            RuleAction::Navigate(Route::ViewAccount),
        ),
        CommandRule::new(
            Trigger::any(["change password"]),
            RuleAction::Navigate(Route::ChangePassword),
        ),
        CommandRule::new(
            Trigger::any(["delete account"]),
            RuleAction::Navigate(Route::DeleteAccount),
        ),
        CommandRule::new(Trigger::all(["log", "out"]), RuleAction::Navigate(Route::Login)),
        CommandRule::new(
            Trigger::any(["text to speech"]),
            RuleAction::Navigate(Route::TextToSpeech),
        ),
        CommandRule::new(
            Trigger::any(["speech to text"]),
            RuleAction::Navigate(Route::SpeechToText),
        ),
        CommandRule::new(
            Trigger::any(["image to text"]),
            RuleAction::Navigate(Route::ImageToText),
        ),
        CommandRule::new(
            Trigger::any(["pdf to text"]),
            RuleAction::Navigate(Route::PdfToText),
        ),
        CommandRule::new(
            Trigger::any(["keyboard shortcuts"]),
            RuleAction::Navigate(Route::KeyboardShortcuts),
        ),
    ]
}
