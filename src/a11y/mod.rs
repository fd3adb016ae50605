//! Session accessibility state
//!
//! Zoom is tracked as an integer percentage but stays visually inert until
//! the user adjusts it once: [`AccessibilityState::scale_factor`] reports
//! 1.0 until the first explicit mutation, no matter what level was restored
//! from storage. Every mutation writes through to the store before
//! returning and notifies all subscribed views.

use std::sync::mpsc::{self, Receiver, Sender};

use thiserror::Error;

use crate::store::{self, SharedStore, USER_ADJUSTED_KEY, ZOOM_LEVEL_KEY};

/// Lowest zoom percentage
pub const MIN_ZOOM: u32 = 50;

/// Highest zoom percentage
pub const MAX_ZOOM: u32 = 150;

/// Zoom adjustment granularity
pub const ZOOM_STEP: u32 = 10;

/// Zoom percentage of an untouched session
pub const DEFAULT_ZOOM: u32 = 100;

/// Error from an explicit zoom mutation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoomError {
    #[error("zoom level {0} is outside the supported range ({MIN_ZOOM}-{MAX_ZOOM} in steps of {ZOOM_STEP})")]
    InvalidLevel(u32),
}

/// Notification sent to subscribed views after every mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomUpdate {
    /// New raw zoom level
    pub level: u32,
    /// Effective rendering multiplier (1.0 until the user opts in)
    pub scale: f32,
}

/// Zoom level and opt-in flag for one session
pub struct AccessibilityState {
    zoom_level: u32,
    user_adjusted: bool,
    store: SharedStore,
    subscribers: Vec<Sender<ZoomUpdate>>,
}

impl AccessibilityState {
    /// Create the session state, restoring persisted values when present
    ///
    /// Out-of-range or off-step persisted levels are snapped back into the
    /// valid domain rather than rejected, so a damaged store file cannot
    /// wedge the session.
    pub fn new(store: SharedStore) -> Self {
        let zoom_level = store::read_key(&store, ZOOM_LEVEL_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .map(snap_level)
            .unwrap_or(DEFAULT_ZOOM);

        let user_adjusted = store::read_key(&store, USER_ADJUSTED_KEY)
            .map(|v| v == "true")
            .unwrap_or(false);

        tracing::debug!(zoom_level, user_adjusted, "restored accessibility state");

        Self {
            zoom_level,
            user_adjusted,
            store,
            subscribers: Vec::new(),
        }
    }

    /// Current raw zoom level, tracked even before opt-in
    pub fn level(&self) -> u32 {
        self.zoom_level
    }

    /// Whether the user has explicitly adjusted zoom this or any prior session
    pub fn user_adjusted(&self) -> bool {
        self.user_adjusted
    }

    /// Effective rendering multiplier
    ///
    /// The raw level only takes visual effect once the user has opted in;
    /// before that the factor is exactly 1.0.
    pub fn scale_factor(&self) -> f32 {
        if self.user_adjusted {
            self.zoom_level as f32 / 100.0
        } else {
            1.0
        }
    }

    /// Increase zoom by one step, clamped to [`MAX_ZOOM`]
    pub fn zoom_in(&mut self) -> u32 {
        let level = (self.zoom_level + ZOOM_STEP).min(MAX_ZOOM);
        self.apply(level)
    }

    /// Decrease zoom by one step, clamped to [`MIN_ZOOM`]
    pub fn zoom_out(&mut self) -> u32 {
        let level = self.zoom_level.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
        self.apply(level)
    }

    /// Set an exact zoom level
    pub fn set_zoom(&mut self, level: u32) -> Result<u32, ZoomError> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&level) || level % ZOOM_STEP != 0 {
            return Err(ZoomError::InvalidLevel(level));
        }
        Ok(self.apply(level))
    }

    /// Return to the default level
    ///
    /// Reset counts as an explicit user action and marks the session
    /// adjusted like any other mutation.
    pub fn reset(&mut self) -> u32 {
        self.apply(DEFAULT_ZOOM)
    }

    /// Subscribe to mutation notifications
    pub fn subscribe(&mut self) -> Receiver<ZoomUpdate> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn apply(&mut self, level: u32) -> u32 {
        self.zoom_level = level;
        self.user_adjusted = true;
        self.persist();
        self.notify();
        tracing::debug!(level, "zoom level updated");
        level
    }

    fn persist(&self) {
        store::write_key(&self.store, ZOOM_LEVEL_KEY, &self.zoom_level.to_string());
        store::write_key(
            &self.store,
            USER_ADJUSTED_KEY,
            if self.user_adjusted { "true" } else { "false" },
        );
    }

    fn notify(&mut self) {
        let update = ZoomUpdate {
            level: self.zoom_level,
            scale: self.scale_factor(),
        };
        self.subscribers.retain(|tx| tx.send(update).is_ok());
    }
}

/// Snap a restored level into the valid domain
fn snap_level(level: u32) -> u32 {
    let clamped = level.clamp(MIN_ZOOM, MAX_ZOOM);
    (clamped / ZOOM_STEP) * ZOOM_STEP
}
