//! Zoom state durability across simulated reloads

mod common;

use axess::a11y::AccessibilityState;
use axess::store::{self, FileStore, KeyValueStore, USER_ADJUSTED_KEY, ZOOM_LEVEL_KEY};
use common::{scripted_assistant, utterance};

#[test]
fn zoom_survives_reload_through_file_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.json");

    // First session: adjust zoom.
    {
        let file_store = FileStore::open(&path).expect("open store");
        let shared = store::shared(file_store);
        let mut state = AccessibilityState::new(shared);
        state.set_zoom(130).unwrap();
        assert_eq!(state.scale_factor(), 1.3);
    }

    // Simulated reload: a fresh store over the same file.
    let file_store = FileStore::open(&path).expect("reopen store");
    assert_eq!(file_store.get(ZOOM_LEVEL_KEY).as_deref(), Some("130"));
    assert_eq!(file_store.get(USER_ADJUSTED_KEY).as_deref(), Some("true"));

    let restored = AccessibilityState::new(store::shared(file_store));
    assert_eq!(restored.level(), 130);
    assert!(restored.user_adjusted());
    assert_eq!(restored.scale_factor(), 1.3);
}

#[test]
fn voice_zoom_mutation_is_durable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.json");

    {
        let shared = store::shared(FileStore::open(&path).expect("open store"));
        let (mut assistant, _recorded) =
            scripted_assistant(shared, vec![utterance("zoom in"), utterance("zoom in")]);

        assistant.start_listening().unwrap();
        assistant.pump();
        assistant.start_listening().unwrap();
        assistant.pump();
        assert_eq!(assistant.scale_factor(), 1.2);
    }

    let restored =
        AccessibilityState::new(store::shared(FileStore::open(&path).expect("reopen store")));
    assert_eq!(restored.level(), 120);
    assert_eq!(restored.scale_factor(), 1.2);
}

#[test]
fn unadjusted_session_reloads_inert() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.json");

    // A stored level without the opt-in flag must stay visually inert.
    {
        let mut file_store = FileStore::open(&path).expect("open store");
        file_store.set(ZOOM_LEVEL_KEY, "150");
    }

    let restored =
        AccessibilityState::new(store::shared(FileStore::open(&path).expect("reopen store")));
    assert_eq!(restored.level(), 150);
    assert!(!restored.user_adjusted());
    assert_eq!(restored.scale_factor(), 1.0);
}
