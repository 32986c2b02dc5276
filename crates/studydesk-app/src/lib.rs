//! StudyDesk Application Library
//!
//! The headless interaction model a rendering shell drives: explicit state
//! machines for every interactive surface, with UI events and notifications
//! flowing back over channels.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ AppState                                                     │
//! ├──────────────┬───────────────────────────┬───────────────────┤
//! │ Sidebar      │  ChatPanel                │ Content tabs      │
//! │ (collapsed   │  ┌─────────────────────┐  │ Knowledge         │
//! │  by default) │  │ transcript          │  │ Flashcards        │
//! │              │  │                     │  │ Quizzes           │
//! │              │  └─────────[handle]────┘  │ Study Guides      │
//! │              │   split 30..80%           │ Notes             │
//! ├──────────────┴───────────────────────────┴───────────────────┤
//! │ Modals: UploadModal, CreateCollectionModal (wizard step 1)   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod events;
pub mod modals;
pub mod panels;
pub mod routes;
pub mod state;
pub mod theme;
pub mod wizard;

// Re-exports
pub use events::{UiEvent, UiEvents};
pub use modals::{CreateCollectionModal, UploadModal, MAX_NAME_LENGTH};
pub use panels::{
    ChatPanel, ContentTab, DragState, QuickAction, Sidebar, SplitPane, DEFAULT_SPLIT_PERCENT,
    MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT,
};
pub use routes::Route;
pub use state::AppState;
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors, ThemeContext, ThemeMode};
pub use wizard::{CreateCollectionWizard, WizardStep};
