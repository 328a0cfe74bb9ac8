//! "New Profile" button that clears the current profile

use profile_dispatch_components::{Button, ButtonProps};
use profile_dispatch_core::{ActionCreator, Component, Dispatch, EventKind};
use ratatui::{layout::Rect, Frame};

use crate::action::{ClearCurrentProfile, ClearCurrentProfilePayload, ProfileAction};

/// Fixed button label
pub const NEW_PROFILE_LABEL: &str = "New Profile";

fn clear_current_profile() -> ProfileAction {
    ClearCurrentProfile::create(ClearCurrentProfilePayload {})
}

/// Button bound to a dispatch sink
///
/// Every activation sends exactly one `clear current profile` action to the
/// sink, within the call that handled the activation. Construction and
/// rendering never dispatch.
pub struct ProfileClearButton<D> {
    dispatch: D,
    button: Button,
}

impl<D: Dispatch<ProfileAction>> ProfileClearButton<D> {
    pub fn new(dispatch: D) -> Self {
        Self {
            dispatch,
            button: Button::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        NEW_PROFILE_LABEL
    }

    /// Activate without an input event (e.g. from a global shortcut)
    pub fn activate(&self) {
        self.dispatch.dispatch(clear_current_profile());
    }

    /// Forward an event to the button
    ///
    /// Returns `true` if the event activated the button.
    pub fn handle_event(&mut self, event: &EventKind, is_focused: bool) -> bool {
        let mut activated = false;
        for action in self.button.handle_event(event, props(is_focused)) {
            self.dispatch.dispatch(action);
            activated = true;
        }
        activated
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, is_focused: bool) {
        self.button.render(frame, area, props(is_focused));
    }
}

fn props(is_focused: bool) -> ButtonProps<'static, ProfileAction> {
    ButtonProps {
        label: NEW_PROFILE_LABEL,
        is_focused,
        on_activate: clear_current_profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_dispatch_core::testing::{click, key_event, RecordingDispatch, RenderHarness};

    #[test]
    fn test_construction_and_render_do_not_dispatch() {
        let sink = RecordingDispatch::new();
        let mut button = ProfileClearButton::new(sink.clone());

        let mut render = RenderHarness::new(30, 3);
        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            button.render(frame, area, true);
        });

        assert!(output.contains(NEW_PROFILE_LABEL));
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_unrelated_events_do_not_dispatch() {
        let sink = RecordingDispatch::new();
        let mut button = ProfileClearButton::new(sink.clone());

        assert!(!button.handle_event(&key_event("x"), true));
        assert!(!button.handle_event(&EventKind::Resize(80, 24), true));
        // Not rendered yet, so clicks land nowhere
        assert!(!button.handle_event(&click(0, 0), true));

        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_activate_dispatches_once() {
        let sink = RecordingDispatch::new();
        let button = ProfileClearButton::new(sink.clone());

        button.activate();

        assert_eq!(sink.actions(), vec![clear_current_profile()]);
    }
}
