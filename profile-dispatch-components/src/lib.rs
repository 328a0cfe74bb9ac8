//! Pre-built UI components for the profile editor's dispatch runtime
//!
//! Components implement the `Component<A>` trait and build their actions
//! through callback functions passed in Props.
//!
//! # Components
//!
//! - [`Button`] - Bordered button activated by Enter, Space, or a left click
//!
//! # Example
//!
//! ```ignore
//! use profile_dispatch_components::{Button, ButtonProps};
//!
//! let mut button = Button::new();
//! button.render(frame, area, ButtonProps {
//!     label: "Save",
//!     is_focused: state.focus == Focus::Save,
//!     on_activate: || Action::Save,
//! });
//! ```

mod button;

pub use button::{Button, ButtonProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Button, ButtonProps};
}
