//! Inbound speech recognition seam

use std::sync::mpsc::Receiver;

use super::types::TranscriptEvent;
use super::SpeechError;

/// A host-owned speech recognition capability
///
/// `start` opens one listening session and hands back its event stream.
/// The stream carries zero or more `Partial` events followed by exactly one
/// `Final` or `Error` event; the source closes the channel afterwards.
pub trait SpeechSource {
    /// Begin a listening session
    ///
    /// Fails with [`SpeechError::CapabilityUnavailable`] when the host has
    /// no recognition capability; this must be reported, never swallowed.
    fn start(&mut self) -> Result<Receiver<TranscriptEvent>, SpeechError>;

    /// Abort the current listening session, discarding partial results
    fn stop(&mut self);
}
