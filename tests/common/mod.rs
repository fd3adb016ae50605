//! Shared test doubles for assistant integration tests

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use axess::assistant::{Assistant, HostAdapters, Navigator, SiteOpener};
use axess::command::CommandRouter;
use axess::domain::Route;
use axess::speech::{SpeechError, SpeechSink, SpeechSource, TranscriptEvent};
use axess::store::SharedStore;

/// Speech source that replays scripted sessions
pub struct ScriptedSource {
    sessions: VecDeque<Vec<TranscriptEvent>>,
    unavailable: bool,
}

impl ScriptedSource {
    pub fn new(sessions: Vec<Vec<TranscriptEvent>>) -> Self {
        Self {
            sessions: sessions.into(),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            sessions: VecDeque::new(),
            unavailable: true,
        }
    }
}

impl SpeechSource for ScriptedSource {
    fn start(&mut self) -> Result<Receiver<TranscriptEvent>, SpeechError> {
        if self.unavailable {
            return Err(SpeechError::CapabilityUnavailable);
        }
        let (tx, rx) = mpsc::channel();
        if let Some(events) = self.sessions.pop_front() {
            for event in events {
                tx.send(event).expect("receiver alive");
            }
        }
        Ok(rx)
    }

    fn stop(&mut self) {}
}

/// Sink that records every spoken phrase
pub struct RecordingSink {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SpeechSink for RecordingSink {
    fn speak(&mut self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
    }

    fn cancel(&mut self) {}
}

/// Navigator that records every destination
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Site opener that records every URL
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl SiteOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

/// Handles into everything the fakes recorded
pub struct Recorded {
    pub spoken: Arc<Mutex<Vec<String>>>,
    pub routes: Arc<Mutex<Vec<Route>>>,
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl Recorded {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

/// Build an assistant over a scripted speech source and recording fakes
pub fn scripted_assistant(
    store: SharedStore,
    sessions: Vec<Vec<TranscriptEvent>>,
) -> (Assistant, Recorded) {
    assistant_with_source(store, ScriptedSource::new(sessions))
}

/// Build an assistant over any speech source
pub fn assistant_with_source(
    store: SharedStore,
    source: impl SpeechSource + 'static,
) -> (Assistant, Recorded) {
    let spoken = Arc::new(Mutex::new(Vec::new()));
    let routes = Arc::new(Mutex::new(Vec::new()));
    let opened = Arc::new(Mutex::new(Vec::new()));

    let adapters = HostAdapters {
        speech_source: Box::new(source),
        speech_sink: Box::new(RecordingSink {
            spoken: spoken.clone(),
        }),
        navigator: Box::new(RecordingNavigator {
            routes: routes.clone(),
        }),
        site_opener: Box::new(RecordingOpener {
            opened: opened.clone(),
        }),
    };

    let assistant = Assistant::new(store, CommandRouter::new(), adapters);
    (
        assistant,
        Recorded {
            spoken,
            routes,
            opened,
        },
    )
}

/// Final-transcript-only session
pub fn utterance(text: &str) -> Vec<TranscriptEvent> {
    vec![TranscriptEvent::Final {
        text: text.to_string(),
    }]
}
