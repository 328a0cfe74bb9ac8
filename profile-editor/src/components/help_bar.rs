//! One-line key help

use profile_dispatch_core::{format_key_for_display, Component, Keybindings};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::action::ProfileAction;
use crate::config::{CMD_NEW_PROFILE, CMD_QUIT};

pub struct HelpBarProps<'a> {
    pub keybindings: &'a Keybindings,
}

#[derive(Debug, Default)]
pub struct HelpBar;

impl HelpBar {
    /// Help text for the configured bindings
    pub fn text(keybindings: &Keybindings) -> String {
        let mut parts = vec!["Enter/Space/click: New Profile".to_string()];
        for (command, label) in [(CMD_NEW_PROFILE, "new profile"), (CMD_QUIT, "quit")] {
            if let Some(key) = keybindings.first_key(command) {
                parts.push(format!("{}: {}", format_key_for_display(key), label));
            }
        }
        parts.join("  ")
    }
}

impl Component<ProfileAction> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let help = Paragraph::new(Self::text(props.keybindings))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_keybindings;

    #[test]
    fn test_text_uses_first_binding() {
        let text = HelpBar::text(&default_keybindings());
        assert!(text.contains("N: new profile"));
        assert!(text.contains("Q: quit"));
    }

    #[test]
    fn test_unbound_commands_omitted() {
        let text = HelpBar::text(&Keybindings::new());
        assert!(!text.contains("quit"));
    }
}
