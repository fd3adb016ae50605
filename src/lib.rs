//! AXESS - accessibility assistant core
//!
//! AXESS is the engine of a voice-driven accessibility assistant: it keeps
//! the session's zoom and theme state, classifies spoken or typed commands
//! into actions, and dispatches those actions through narrow seams the host
//! application implements (speech recognition and synthesis, navigation,
//! external site launching, persistence, authentication, OCR and PDF text
//! extraction).
//!
//! ## Core pieces
//!
//! 1. **Accessibility state**: zoom level with a persisted opt-in flag.
//!    The raw level is tracked from the start, but rendering stays at 100%
//!    until the user explicitly adjusts zoom once.
//!
//! 2. **Command routing**: an ordered rule table matched by substring
//!    containment. All matching rules fire; navigation phrases share one
//!    destination slot where the last match wins.
//!
//! 3. **Voice capture**: an Idle/Listening state machine over a host speech
//!    source. Only finalized transcripts are classified; partials are for
//!    display and a mid-utterance stop discards them.

pub mod a11y;
pub mod account;
pub mod assistant;
pub mod command;
pub mod config;
pub mod domain;
pub mod media;
pub mod speech;
pub mod store;

pub use domain::*;
