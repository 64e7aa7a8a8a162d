//! Busy indicator state for in-flight assistant requests
//!
//! The host owns timing: it calls [`Spinner::advance`] on whatever cadence
//! it likes (a redraw loop, a timer tick) and renders the frame that comes
//! back. The core only tracks start/stop and the frame cursor.

use crate::config::Config;

/// Host-driven spinner state
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: Vec<String>,
    active: bool,
    frame_idx: usize,
    label: Option<String>,
}

impl Spinner {
    pub fn new(frames: Vec<String>) -> Self {
        Self {
            frames,
            active: false,
            frame_idx: 0,
            label: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.status.frames.clone())
    }

    /// Begin showing busy state with a label (e.g. "thinking")
    pub fn start(&mut self, label: impl Into<String>) {
        self.active = true;
        self.frame_idx = 0;
        self.label = Some(label.into());
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.frame_idx = 0;
        self.label = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Current frame without advancing; `None` while stopped
    pub fn frame(&self) -> Option<&str> {
        if !self.active || self.frames.is_empty() {
            return None;
        }
        Some(self.frames[self.frame_idx].as_str())
    }

    /// Step to the next frame and return it; `None` while stopped
    pub fn advance(&mut self) -> Option<&str> {
        if !self.active || self.frames.is_empty() {
            return None;
        }
        self.frame_idx = (self.frame_idx + 1) % self.frames.len();
        Some(self.frames[self.frame_idx].as_str())
    }
}
