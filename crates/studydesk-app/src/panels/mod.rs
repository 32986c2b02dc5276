//! Interaction state for the two-pane workspace

mod chat;
mod layout;

pub use chat::{ChatPanel, ContentTab, QuickAction};
pub use layout::{
    DragState, Sidebar, SplitPane, DEFAULT_SPLIT_PERCENT, MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT,
};
