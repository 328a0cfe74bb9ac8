//! UI components

mod help_bar;
mod profile_clear_button;
mod profile_summary;

pub use help_bar::{HelpBar, HelpBarProps};
pub use profile_clear_button::{ProfileClearButton, NEW_PROFILE_LABEL};
pub use profile_summary::{ProfileSummary, ProfileSummaryProps, NO_PROFILE_TEXT};

pub use profile_dispatch_core::Component;
