//! Application state

use crate::profile::Profile;

/// Everything the editor knows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    /// Profile being edited; `None` means a new, empty profile
    pub current_profile: Option<Profile>,
}
