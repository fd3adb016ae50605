use super::*;
use crate::config::{ExtraRule, Settings};

fn router() -> CommandRouter {
    CommandRouter::new()
}

#[test]
fn site_launch_by_name() {
    let c = router().classify("go to github");
    assert_eq!(
        c.actions,
        vec![Action::OpenSite {
            url: "https://www.github.com".to_string()
        }]
    );
    assert_eq!(c.destination, None);
    assert_eq!(c.feedback, Feedback::Completed);
}

#[test]
fn site_name_alone_is_not_a_launch() {
    let c = router().classify("github is great");
    assert!(c.is_unrecognized());
    assert_eq!(c.feedback, Feedback::NotUnderstood);
}

#[test]
fn first_declared_site_wins() {
    // facebook precedes twitter in the directory order
    let c = router().classify("go to twitter or facebook");
    assert_eq!(
        c.actions,
        vec![Action::OpenSite {
            url: "https://www.facebook.com".to_string()
        }]
    );
}

#[test]
fn classification_is_case_insensitive() {
    let c = router().classify("  Go To GitHub  ");
    assert_eq!(
        c.actions,
        vec![Action::OpenSite {
            url: "https://www.github.com".to_string()
        }]
    );
}

#[test]
fn navigation_and_immediate_action_combine() {
    let c = router().classify("please open help and zoom in");
    assert!(c.actions.contains(&Action::ZoomIn));
    assert_eq!(c.destination, Some(Route::Help));
    // Navigation confirmation outranks the generic completed phrase.
    assert_eq!(c.feedback, Feedback::Navigating);
    assert_eq!(c.actions.last(), Some(&Action::Navigate { route: Route::Help }));
}

#[test]
fn log_out_needs_both_words() {
    let c = router().classify("log me out");
    assert_eq!(c.destination, Some(Route::Login));
    assert_eq!(c.feedback, Feedback::Navigating);

    assert!(router().classify("log this").is_unrecognized());
}

#[test]
fn last_matching_navigation_rule_wins() {
    // "help" matches first, "view account" later in the table; the
    // destination slot is overwritten, not queued.
    let c = router().classify("open help and view account");
    assert_eq!(c.destination, Some(Route::ViewAccount));
}

#[test]
fn theme_phrases_toggle_mode() {
    for phrase in ["toggle mode", "dark mode please", "switch to light mode"] {
        let c = router().classify(phrase);
        assert_eq!(c.actions, vec![Action::ToggleMode]);
        assert_eq!(c.feedback, Feedback::Completed);
    }
}

#[test]
fn zoom_phrases() {
    assert_eq!(router().classify("magnify").actions, vec![Action::ZoomIn]);
    assert_eq!(
        router().classify("increase text size").actions,
        vec![Action::ZoomIn]
    );
    assert_eq!(
        router().classify("decrease text").actions,
        vec![Action::ZoomOut]
    );
}

#[test]
fn feature_page_phrases_navigate() {
    let cases = [
        ("take me to text to speech", Route::TextToSpeech),
        ("speech to text please", Route::SpeechToText),
        ("image to text", Route::ImageToText),
        ("pdf to text", Route::PdfToText),
        ("show keyboard shortcuts", Route::KeyboardShortcuts),
        ("change password", Route::ChangePassword),
        ("delete account", Route::DeleteAccount),
    ];
    for (phrase, route) in cases {
        let c = router().classify(phrase);
        assert_eq!(c.destination, Some(route), "phrase: {phrase}");
    }
}

#[test]
fn unmatched_transcript_is_unrecognized() {
    let c = router().classify("banana");
    assert!(c.actions.is_empty());
    assert_eq!(c.destination, None);
    assert_eq!(c.feedback, Feedback::NotUnderstood);
    assert_eq!(c.feedback.phrase(), "I did not understand. Please try again.");
}

#[test]
fn several_immediate_actions_fire_together() {
    let c = router().classify("zoom in and toggle mode");
    assert_eq!(c.actions, vec![Action::ToggleMode, Action::ZoomIn]);
    assert_eq!(c.feedback, Feedback::Completed);
}

#[test]
fn settings_extend_sites_and_rules() {
    let mut settings = Settings::default();
    settings.extra_sites.push(Site::new("Gitlab", "https://gitlab.com"));
    settings.extra_rules.push(ExtraRule {
        phrases: vec!["Shortcuts".to_string()],
        route: Route::KeyboardShortcuts,
    });

    let router = CommandRouter::from_settings(&settings);

    let c = router.classify("go to gitlab");
    assert_eq!(
        c.actions,
        vec![Action::OpenSite {
            url: "https://gitlab.com".to_string()
        }]
    );

    let c = router.classify("shortcuts");
    assert_eq!(c.destination, Some(Route::KeyboardShortcuts));
}
