//! Outbound utterance seam and narrator

/// A host-owned speech synthesis capability
///
/// `speak` is fire-and-forget; pause/resume/volume default to no-ops for
/// sinks that cannot support them.
pub trait SpeechSink {
    /// Queue an utterance
    fn speak(&mut self, text: &str);

    /// Cancel any in-flight utterance
    fn cancel(&mut self);

    /// Pause the current utterance
    fn pause(&mut self) {}

    /// Resume a paused utterance
    fn resume(&mut self) {}

    /// Set utterance volume, already clamped to [0.0, 1.0]
    fn set_volume(&mut self, _volume: f32) {}
}

/// Utterance controller over a [`SpeechSink`]
///
/// Enforces the invariant that at most one utterance is audible: every
/// `say` cancels whatever is in flight before speaking.
pub struct Narrator {
    sink: Box<dyn SpeechSink>,
    volume: f32,
    speaking: bool,
    paused: bool,
}

impl Narrator {
    pub fn new(sink: Box<dyn SpeechSink>) -> Self {
        Self {
            sink,
            volume: 1.0,
            speaking: false,
            paused: false,
        }
    }

    /// Cancel any in-flight utterance and speak this one
    pub fn say(&mut self, text: &str) {
        self.sink.cancel();
        self.sink.set_volume(self.volume);
        self.sink.speak(text);
        self.speaking = true;
        self.paused = false;
    }

    /// Pause the current utterance
    pub fn pause(&mut self) {
        if self.speaking && !self.paused {
            self.sink.pause();
            self.paused = true;
        }
    }

    /// Resume a paused utterance
    pub fn resume(&mut self) {
        if self.paused {
            self.sink.resume();
            self.paused = false;
        }
    }

    /// Stop speaking entirely
    pub fn stop(&mut self) {
        self.sink.cancel();
        self.speaking = false;
        self.paused = false;
    }

    /// Adjust volume for current and future utterances
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking && !self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Script {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl SpeechSink for Script {
        fn speak(&mut self, text: &str) {
            self.calls.lock().unwrap().push(format!("speak:{text}"));
        }
        fn cancel(&mut self) {
            self.calls.lock().unwrap().push("cancel".to_string());
        }
        fn pause(&mut self) {
            self.calls.lock().unwrap().push("pause".to_string());
        }
        fn resume(&mut self) {
            self.calls.lock().unwrap().push("resume".to_string());
        }
    }

    #[test]
    fn say_cancels_before_speaking() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Script { calls: calls.clone() };
        let mut narrator = Narrator::new(Box::new(sink));

        narrator.say("first");
        narrator.say("second");

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec!["cancel", "speak:first", "cancel", "speak:second"]
        );
    }

    #[test]
    fn pause_resume_cycle() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Script { calls: calls.clone() };
        let mut narrator = Narrator::new(Box::new(sink));

        narrator.say("hello");
        narrator.pause();
        assert!(narrator.is_paused());
        assert!(!narrator.is_speaking());

        narrator.resume();
        assert!(narrator.is_speaking());

        // Pausing while idle is a no-op
        narrator.stop();
        narrator.pause();
        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec!["cancel", "speak:hello", "pause", "resume", "cancel"]
        );
    }

    #[test]
    fn volume_is_clamped() {
        let mut narrator = Narrator::new(Box::new(Script::default()));
        narrator.set_volume(1.7);
        assert_eq!(narrator.volume(), 1.0);
        narrator.set_volume(-0.3);
        assert_eq!(narrator.volume(), 0.0);
    }
}
