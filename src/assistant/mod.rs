//! Assistant session shell
//!
//! [`Assistant`] wires the core together: transcripts (spoken or typed) go
//! through the [`CommandRouter`], the resulting actions are applied to the
//! accessibility state or dispatched to the host's navigation and
//! site-opening adapters, and every outcome is both spoken through the
//! narrator and mirrored into the screen-reader live region.

mod announce;
mod chat;

pub use announce::LiveRegion;
pub use chat::{ChatEntry, ChatLog, ChatSender};

use crate::a11y::AccessibilityState;
use crate::command::{Classification, CommandRouter};
use crate::domain::{Action, Route, Theme};
use crate::speech::{Narrator, SpeechError, SpeechSink, SpeechSource, TranscriptEvent, VoiceCapture};
use crate::store::{self, LOGGED_IN_KEY, SharedStore};

/// In-app navigation seam
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// External site launch seam
pub trait SiteOpener {
    fn open(&mut self, url: &str);
}

/// Host-provided capability adapters
pub struct HostAdapters {
    pub speech_source: Box<dyn SpeechSource>,
    pub speech_sink: Box<dyn SpeechSink>,
    pub navigator: Box<dyn Navigator>,
    pub site_opener: Box<dyn SiteOpener>,
}

/// One assistant session
pub struct Assistant {
    a11y: AccessibilityState,
    theme: Theme,
    router: CommandRouter,
    capture: VoiceCapture,
    narrator: Narrator,
    navigator: Box<dyn Navigator>,
    opener: Box<dyn SiteOpener>,
    store: SharedStore,
    chat: ChatLog,
    live: LiveRegion,
}

impl Assistant {
    /// Create a session, restoring accessibility state from the store
    pub fn new(store: SharedStore, router: CommandRouter, adapters: HostAdapters) -> Self {
        Self {
            a11y: AccessibilityState::new(store.clone()),
            theme: Theme::default(),
            router,
            capture: VoiceCapture::new(adapters.speech_source),
            narrator: Narrator::new(adapters.speech_sink),
            navigator: adapters.navigator,
            opener: adapters.site_opener,
            store,
            chat: ChatLog::new(),
            live: LiveRegion::new(),
        }
    }

    // ---- voice capture ----

    /// Begin a listening session
    ///
    /// Any in-flight utterance is cancelled first so the microphone does not
    /// pick up the assistant's own voice.
    pub fn start_listening(&mut self) -> Result<(), SpeechError> {
        self.narrator.stop();
        self.capture.start_listening()?;
        self.live.announce("Recording started.");
        Ok(())
    }

    /// Abort the listening session, discarding partials
    pub fn stop_listening(&mut self) {
        if self.capture.is_listening() {
            self.capture.stop_listening();
            self.live.announce("Recording stopped.");
        }
    }

    /// Microphone-button behavior
    pub fn toggle_listening(&mut self) -> Result<(), SpeechError> {
        if self.capture.is_listening() {
            self.stop_listening();
            Ok(())
        } else {
            self.start_listening()
        }
    }

    pub fn is_listening(&self) -> bool {
        self.capture.is_listening()
    }

    /// Latest interim transcript, for display only
    pub fn interim_transcript(&self) -> Option<&str> {
        self.capture.last_partial.as_deref()
    }

    /// Drain capture events and execute the final transcript, if one arrived
    ///
    /// Call from the host event loop. Returns the drained events so the host
    /// can render interim text.
    pub fn pump(&mut self) -> Vec<TranscriptEvent> {
        let events = self.capture.poll_events();

        for event in &events {
            match event {
                TranscriptEvent::Final { .. } => {
                    self.live.announce("Recording stopped.");
                }
                TranscriptEvent::Error { .. } => {
                    self.live.announce("Speech recognition error.");
                }
                TranscriptEvent::Partial { .. } => {}
            }
        }

        if let Some(transcript) = self.capture.take_transcript() {
            self.handle_transcript(&transcript);
        }

        events
    }

    // ---- classification and dispatch ----

    /// Classify a finalized transcript and execute everything it requests
    pub fn handle_transcript(&mut self, transcript: &str) -> Classification {
        let classification = self.router.classify(transcript);

        for action in &classification.actions {
            match action {
                Action::OpenSite { url } => {
                    tracing::info!(%url, "opening external site");
                    self.opener.open(url);
                }
                Action::ToggleMode => {
                    self.toggle_theme();
                }
                Action::ZoomIn => {
                    self.zoom_in();
                }
                Action::ZoomOut => {
                    self.zoom_out();
                }
                Action::ResetZoom => {
                    self.reset_zoom();
                }
                Action::Logout => {
                    self.log_out();
                }
                // Navigation runs below, after its confirmation phrase.
                Action::Navigate { .. } => {}
                Action::Unrecognized => {}
            }
        }

        // The confirmation is spoken before the host tears this view down.
        self.narrator.say(classification.feedback.phrase());
        if let Some(route) = classification.destination {
            tracing::info!(route = %route, "navigating");
            self.navigator.go_to(route);
        }

        classification
    }

    /// Handle a typed chat message; transcripts and chat share one router
    pub fn send_message(&mut self, text: &str) -> Option<Classification> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.live.announce("Please enter or say something!");
            return None;
        }

        self.chat.push_user(trimmed);
        self.chat.push_bot("I heard you — working on it.");
        Some(self.handle_transcript(trimmed))
    }

    // ---- accessibility controls ----

    /// Step zoom up and announce the new level
    pub fn zoom_in(&mut self) -> u32 {
        let level = self.a11y.zoom_in();
        self.live.announce(format!("Zoomed in to {level} percent"));
        level
    }

    /// Step zoom down and announce the new level
    pub fn zoom_out(&mut self) -> u32 {
        let level = self.a11y.zoom_out();
        self.live.announce(format!("Zoomed out to {level} percent"));
        level
    }

    /// Return zoom to 100 percent and announce it
    pub fn reset_zoom(&mut self) -> u32 {
        let level = self.a11y.reset();
        self.live.announce("Zoom reset to 100 percent");
        level
    }

    /// Flip the theme and announce the new state
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.live.announce(self.theme.announcement());
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Accessibility state, for hosts that need direct access
    pub fn a11y(&mut self) -> &mut AccessibilityState {
        &mut self.a11y
    }

    pub fn scale_factor(&self) -> f32 {
        self.a11y.scale_factor()
    }

    // ---- session ----

    /// Clear the login flag and return to the login page
    pub fn log_out(&mut self) {
        store::remove_key(&self.store, LOGGED_IN_KEY);
        self.live.announce("You have been logged out.");
        self.navigator.go_to(Route::Login);
    }

    // ---- speech output (text-to-speech page) ----

    /// Read arbitrary text aloud, replacing any current utterance
    pub fn speak_text(&mut self, text: &str) {
        self.narrator.say(text);
    }

    pub fn pause_speech(&mut self) {
        self.narrator.pause();
    }

    pub fn resume_speech(&mut self) {
        self.narrator.resume();
    }

    pub fn stop_speech(&mut self) {
        self.narrator.stop();
    }

    pub fn set_speech_volume(&mut self, volume: f32) {
        self.narrator.set_volume(volume);
    }

    // ---- observability ----

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn live_region(&mut self) -> &mut LiveRegion {
        &mut self.live
    }

    /// Latest live-region status line
    pub fn status(&self) -> Option<&str> {
        self.live.latest()
    }

    /// Last recognition error, if the host wants to render it
    pub fn last_capture_error(&self) -> Option<&str> {
        self.capture.last_error.as_deref()
    }
}
