//! Theme system for StudyDesk
//!
//! A single injected context owns the light/dark flag for the session;
//! only the toggle action writes it. Nothing is persisted.

mod colors;

pub use colors::*;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Light/dark flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme configuration for one mode
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    pub spacing: Spacing,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Dark => ThemeColors::dark(),
            ThemeMode::Light => ThemeColors::light(),
        };
        Self {
            mode,
            colors,
            spacing: Spacing::default(),
        }
    }
}

/// Session-wide theme holder with single-writer semantics
pub struct ThemeContext {
    mode: RwLock<ThemeMode>,
}

impl ThemeContext {
    /// Explicit init; the application default is dark
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: RwLock::new(initial),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    /// Current palette
    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.mode())
    }

    /// Flip light/dark; the only mutation path
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write();
        *mode = mode.toggled();
        info!("Theme switched to {:?}", *mode);
        *mode
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}

/// Spacing constants
#[derive(Debug, Clone)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Expanded sidebar width in pixels
    pub const SIDEBAR_WIDTH: f32 = 220.0;
    /// Header height in pixels
    pub const HEADER_HEIGHT: f32 = 64.0;
    /// Width of the split-pane resize handle in pixels
    pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;
    /// Border radius
    pub const BORDER_RADIUS: f32 = 8.0;
}
