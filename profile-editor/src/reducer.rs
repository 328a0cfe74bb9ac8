//! Reducer - pure function: (state, action) -> changed

use crate::action::ProfileAction;
use crate::state::ProfileState;

/// Apply an action to the editor state
///
/// # Returns
/// `true` if state changed and the UI should re-render
pub fn reducer(state: &mut ProfileState, action: ProfileAction) -> bool {
    match action {
        ProfileAction::ProfileDidLoad(profile) => {
            state.current_profile = Some(profile);
            true
        }

        // Clearing an already empty selection is not a change
        ProfileAction::ClearCurrentProfile(_) => state.current_profile.take().is_some(),

        // Handled in the main loop
        ProfileAction::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ClearCurrentProfile, ClearCurrentProfilePayload, ProfileDidLoad};
    use crate::profile::{Profile, ProfileField};
    use profile_dispatch_core::ActionCreator;

    fn sample_profile() -> Profile {
        Profile {
            schema_version: "0.7".into(),
            description: Some("Orders".into()),
            fields: vec![ProfileField {
                name: "order_id".into(),
                field_type: "integer".into(),
                nullable: false,
            }],
            constraints: Vec::new(),
        }
    }

    fn loaded() -> ProfileState {
        let mut state = ProfileState::default();
        reducer(&mut state, ProfileDidLoad::create(sample_profile()));
        state
    }

    #[test]
    fn test_profile_did_load_sets_current() {
        let mut state = ProfileState::default();

        let changed = reducer(&mut state, ProfileDidLoad::create(sample_profile()));

        assert!(changed);
        assert_eq!(state.current_profile, Some(sample_profile()));
    }

    #[test]
    fn test_clear_current_profile() {
        let mut state = loaded();

        let clear = ClearCurrentProfile::create(ClearCurrentProfilePayload {});
        assert!(reducer(&mut state, clear.clone()));
        assert_eq!(state.current_profile, None);

        // Second clear has nothing to do
        assert!(!reducer(&mut state, clear));
        assert_eq!(state, ProfileState::default());
    }

    #[test]
    fn test_quit_is_not_a_state_change() {
        let mut state = loaded();
        assert!(!reducer(&mut state, ProfileAction::Quit));
        assert!(state.current_profile.is_some());
    }
}
