//! Screen-reader live status region

use std::sync::mpsc::{self, Receiver, Sender};

/// Latest status line plus a subscription channel per observer
///
/// Views render the latest message into their polite live region; the
/// channels exist so a view can also react to transitions it did not cause.
#[derive(Default)]
pub struct LiveRegion {
    latest: Option<String>,
    subscribers: Vec<Sender<String>>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a status message to all observers
    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "live region updated");
        self.subscribers.retain(|tx| tx.send(message.clone()).is_ok());
        self.latest = Some(message);
    }

    /// The most recent message
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// Subscribe to future announcements
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
