//! Split-pane and sidebar layout state
//!
//! The resize interaction is an explicit state machine (Idle -> Dragging ->
//! Idle) driven by pointer events; move/up handling is only live while
//! Dragging, so there is nothing to unhook on release.

use tracing::debug;

/// Lower bound of the left pane, percent of container width
pub const MIN_SPLIT_PERCENT: f32 = 30.0;
/// Upper bound of the left pane, percent of container width
pub const MAX_SPLIT_PERCENT: f32 = 80.0;
/// Initial split position
pub const DEFAULT_SPLIT_PERCENT: f32 = 50.0;

/// Resize interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Two-pane resizable layout: chat transcript left, tabbed content right
#[derive(Debug)]
pub struct SplitPane {
    position: f32,
    drag: DragState,
}

impl SplitPane {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_SPLIT_PERCENT,
            drag: DragState::Idle,
        }
    }

    /// Left pane width as a percentage, always within [30, 80]
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Pointer-down over the resize handle
    pub fn begin_drag(&mut self) {
        self.drag = DragState::Dragging;
    }

    /// Pointer-move; ignored unless a drag is active
    ///
    /// The position is computed from the pointer X relative to the
    /// container's bounding box and clamped to the legal range, so pointer
    /// positions outside the container are safe.
    pub fn drag_to(&mut self, pointer_x: f32, container_left: f32, container_width: f32) {
        if self.drag != DragState::Dragging || container_width <= 0.0 {
            return;
        }

        let percent = (pointer_x - container_left) / container_width * 100.0;
        self.position = percent.clamp(MIN_SPLIT_PERCENT, MAX_SPLIT_PERCENT);
    }

    /// Pointer-up anywhere ends the drag
    pub fn end_drag(&mut self) {
        if self.drag == DragState::Dragging {
            debug!("Split drag ended at {:.1}%", self.position);
        }
        self.drag = DragState::Idle;
    }
}

impl Default for SplitPane {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapsible navigation sidebar; collapsed by default
#[derive(Debug)]
pub struct Sidebar {
    expanded: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self { expanded: false }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Explicit toggle control
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// A click outside the expanded sidebar collapses it; returns whether
    /// the state changed
    pub fn click_outside(&mut self) -> bool {
        if self.expanded {
            self.expanded = false;
            true
        } else {
            false
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
