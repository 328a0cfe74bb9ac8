//! Screen layout and event routing

use crossterm::event::KeyEventKind;
use profile_dispatch_core::{ActionCreator, Component, Dispatch, EventKind, Keybindings};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::action::{ProfileAction, ProfileDidLoad};
use crate::components::{
    HelpBar, HelpBarProps, ProfileClearButton, ProfileSummary, ProfileSummaryProps,
};
use crate::config::{CMD_NEW_PROFILE, CMD_QUIT};
use crate::profile::Profile;
use crate::state::ProfileState;

const BUTTON_WIDTH: u16 = 17;

/// Top-level UI: the New Profile button above the profile summary
pub struct EditorUi<D> {
    dispatch: D,
    clear_button: ProfileClearButton<D>,
    summary: ProfileSummary,
    help: HelpBar,
}

impl<D: Dispatch<ProfileAction> + Clone> EditorUi<D> {
    pub fn new(dispatch: D) -> Self {
        Self {
            clear_button: ProfileClearButton::new(dispatch.clone()),
            dispatch,
            summary: ProfileSummary,
            help: HelpBar,
        }
    }

    /// Hand a profile read from disk to the store
    pub fn open_profile(&self, profile: Profile) {
        self.dispatch.dispatch(ProfileDidLoad::create(profile));
    }

    /// Route an event: global commands first, then the button
    ///
    /// The button is the only focusable control, so it always has focus.
    pub fn handle_event(&mut self, event: &EventKind, keybindings: &Keybindings) {
        if let EventKind::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match keybindings.get_command(*key) {
                    Some(CMD_QUIT) => {
                        self.dispatch.dispatch(ProfileAction::Quit);
                        return;
                    }
                    Some(CMD_NEW_PROFILE) => {
                        self.clear_button.activate();
                        return;
                    }
                    _ => {}
                }
            }
        }

        self.clear_button.handle_event(event, true);
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &ProfileState,
        keybindings: &Keybindings,
    ) {
        let [button_row, body, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [button_area, _] =
            Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Fill(1)])
                .areas(button_row);

        self.clear_button.render(frame, button_area, true);
        self.summary.render(
            frame,
            body,
            ProfileSummaryProps {
                profile: state.current_profile.as_ref(),
            },
        );
        self.help.render(frame, help_area, HelpBarProps { keybindings });
    }
}
