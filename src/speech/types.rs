//! Capture state and transcript events

/// Voice capture state
///
/// Interim results keep the session in `Listening`; the final transcript,
/// an explicit stop, or a recognition error all return it to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No listening session active
    #[default]
    Idle,
    /// A listening session is consuming the transcript stream
    Listening,
}

impl CaptureState {
    /// Returns true while a listening session is active
    pub fn is_listening(&self) -> bool {
        matches!(self, CaptureState::Listening)
    }
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Listening => write!(f, "Listening"),
        }
    }
}

/// One event on the inbound transcript stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Interim text, for display only - never classified
    Partial { text: String },
    /// Finalized utterance, ready for classification
    Final { text: String },
    /// Recognition failed; the session is over
    Error { message: String },
}
