//! Core traits and types for the profile editor's dispatch runtime
//!
//! A small Redux/Elm style runtime for terminal UIs built on ratatui.
//!
//! # Core Concepts
//!
//! - **Action**: Immutable messages that describe state changes
//! - **ActionCreator**: Builds an action of a fixed kind from an input record
//! - **Dispatch**: The capability components use to submit actions
//! - **Store**: Centralized state container with reducer pattern
//! - **Component**: UI elements that render from props and emit actions
//! - **Keybindings**: Command to key mapping loaded from config
//!
//! # Basic Example
//!
//! ```ignore
//! use profile_dispatch_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Select(String),
//!     ClearSelection,
//! }
//!
//! impl Action for AppAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             AppAction::Select(_) => "Select",
//!             AppAction::ClearSelection => "ClearSelection",
//!         }
//!     }
//! }
//!
//! let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
//! let mut store = Store::new(AppState::default(), reducer);
//!
//! // Components dispatch into the channel...
//! action_tx.dispatch(AppAction::ClearSelection);
//!
//! // ...and the main loop feeds the store
//! while let Ok(action) = action_rx.try_recv() {
//!     store.dispatch(action);
//! }
//! ```

pub mod action;
pub mod component;
pub mod dispatch;
pub mod event;
pub mod keybindings;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCreator};
pub use component::Component;
pub use dispatch::Dispatch;

// Event exports
pub use event::{area_contains, process_raw_event, spawn_event_poller, EventKind, RawEvent};

// Keybindings exports
pub use keybindings::{format_key_for_display, parse_key_string, Keybindings};

// Store exports
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCreator};
    pub use crate::component::Component;
    pub use crate::dispatch::Dispatch;
    pub use crate::event::{
        area_contains, process_raw_event, spawn_event_poller, EventKind, RawEvent,
    };
    pub use crate::keybindings::{format_key_for_display, parse_key_string, Keybindings};
    pub use crate::store::{LoggingMiddleware, Middleware, NoopMiddleware, Reducer, Store};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
