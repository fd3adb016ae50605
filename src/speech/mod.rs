//! Speech input and output seams
//!
//! The crate never talks to a microphone or synthesizer itself. Hosts
//! provide:
//! - a [`SpeechSource`] producing an inbound transcript stream (zero or
//!   more partials, then one final or error event per listening session)
//! - a [`SpeechSink`] accepting fire-and-forget utterances
//!
//! [`VoiceCapture`] drives the source through the Idle/Listening state
//! machine and [`Narrator`] enforces the at-most-one-audible-utterance
//! invariant over the sink.

mod capture;
mod sink;
mod source;
mod types;

pub use capture::VoiceCapture;
pub use sink::{Narrator, SpeechSink};
pub use source::SpeechSource;
pub use types::{CaptureState, TranscriptEvent};

use thiserror::Error;

/// Error starting a listening session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech recognition is not available in this environment")]
    CapabilityUnavailable,
}
