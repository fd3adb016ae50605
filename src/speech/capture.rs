//! Voice capture session manager

use std::sync::mpsc::Receiver;

use super::source::SpeechSource;
use super::types::{CaptureState, TranscriptEvent};
use super::SpeechError;

/// Drives a [`SpeechSource`] through the Idle/Listening state machine
///
/// The host pumps [`poll_events`] from its event loop; only the final
/// transcript of a successful session is surfaced through
/// [`take_transcript`] for classification. Stopping mid-utterance discards
/// partials.
///
/// [`poll_events`]: VoiceCapture::poll_events
/// [`take_transcript`]: VoiceCapture::take_transcript
pub struct VoiceCapture {
    pub state: CaptureState,
    source: Box<dyn SpeechSource>,
    events: Option<Receiver<TranscriptEvent>>,
    /// Latest interim text, for display only
    pub last_partial: Option<String>,
    pub last_error: Option<String>,
    last_transcript: Option<String>,
}

impl VoiceCapture {
    pub fn new(source: Box<dyn SpeechSource>) -> Self {
        Self {
            state: CaptureState::Idle,
            source,
            events: None,
            last_partial: None,
            last_error: None,
            last_transcript: None,
        }
    }

    /// Begin a listening session
    pub fn start_listening(&mut self) -> Result<(), SpeechError> {
        if self.state.is_listening() {
            return Ok(());
        }

        let rx = self.source.start()?;
        self.events = Some(rx);
        self.last_partial = None;
        self.last_error = None;
        self.state = CaptureState::Listening;
        tracing::info!("listening session started");
        Ok(())
    }

    /// Abort the session, discarding any partial transcript
    pub fn stop_listening(&mut self) {
        if !self.state.is_listening() {
            return;
        }
        self.source.stop();
        self.events = None;
        self.last_partial = None;
        self.state = CaptureState::Idle;
        tracing::info!("listening session stopped");
    }

    /// Start when idle, stop when listening (microphone button behavior)
    pub fn toggle(&mut self) -> Result<(), SpeechError> {
        if self.state.is_listening() {
            self.stop_listening();
            Ok(())
        } else {
            self.start_listening()
        }
    }

    /// Drain pending transcript events, advancing the state machine
    ///
    /// Returns the drained events so the host can render interim text.
    pub fn poll_events(&mut self) -> Vec<TranscriptEvent> {
        let mut drained = Vec::new();

        let Some(rx) = &self.events else {
            return drained;
        };

        let mut finished = false;
        while let Ok(event) = rx.try_recv() {
            match &event {
                TranscriptEvent::Partial { text } => {
                    self.last_partial = Some(text.clone());
                }
                TranscriptEvent::Final { text } => {
                    self.last_transcript = Some(text.clone());
                    self.last_partial = None;
                    finished = true;
                }
                TranscriptEvent::Error { message } => {
                    tracing::warn!(%message, "speech recognition error");
                    self.last_error = Some(message.clone());
                    self.last_partial = None;
                    finished = true;
                }
            }
            drained.push(event);
            if finished {
                break;
            }
        }

        if finished {
            self.events = None;
            self.state = CaptureState::Idle;
        }

        drained
    }

    /// Consume the final transcript of the last successful session
    pub fn take_transcript(&mut self) -> Option<String> {
        self.last_transcript.take()
    }

    /// Clear a recorded recognition error
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn is_listening(&self) -> bool {
        self.state.is_listening()
    }
}
