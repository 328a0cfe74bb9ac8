//! Profile editor actions
//!
//! Naming follows the runtime convention: `Did` marks the result of work done
//! outside the reducer (here, loading a profile file before the UI starts).

use profile_dispatch_core::ActionCreator;
use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Application actions
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileAction {
    /// A profile finished loading and becomes the current one
    ProfileDidLoad(Profile),

    /// Drop the current profile so a new one can be started
    ClearCurrentProfile(ClearCurrentProfilePayload),

    /// Exit the application
    Quit,
}

impl profile_dispatch_core::Action for ProfileAction {
    fn name(&self) -> &'static str {
        match self {
            ProfileAction::ProfileDidLoad(_) => "ProfileDidLoad",
            ProfileAction::ClearCurrentProfile(_) => "ClearCurrentProfile",
            ProfileAction::Quit => "Quit",
        }
    }
}

impl ProfileAction {
    /// Stable kind identifier, independent of the Rust variant name
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileAction::ProfileDidLoad(_) => ProfileDidLoad::KIND,
            ProfileAction::ClearCurrentProfile(_) => ClearCurrentProfile::KIND,
            ProfileAction::Quit => "quit",
        }
    }
}

/// Empty input record for [`ClearCurrentProfile`]; serialises as `{}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCurrentProfilePayload {}

/// Creator for `clear current profile` actions
///
/// ```ignore
/// let action = ClearCurrentProfile::create(ClearCurrentProfilePayload {});
/// ```
pub struct ClearCurrentProfile;

impl ActionCreator for ClearCurrentProfile {
    type Payload = ClearCurrentProfilePayload;
    type Action = ProfileAction;
    const KIND: &'static str = "clear current profile";

    fn create(payload: ClearCurrentProfilePayload) -> ProfileAction {
        ProfileAction::ClearCurrentProfile(payload)
    }
}

/// Creator for `profile loaded` actions
pub struct ProfileDidLoad;

impl ActionCreator for ProfileDidLoad {
    type Payload = Profile;
    type Action = ProfileAction;
    const KIND: &'static str = "profile loaded";

    fn create(profile: Profile) -> ProfileAction {
        ProfileAction::ProfileDidLoad(profile)
    }
}
