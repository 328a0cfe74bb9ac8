//! Clickable button component

use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use profile_dispatch_core::{area_contains, Component, EventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for Button component
pub struct ButtonProps<'a, A> {
    /// Text shown inside the button
    pub label: &'a str,
    /// Whether this component has keyboard focus
    pub is_focused: bool,
    /// Callback to create the action emitted on activation
    pub on_activate: fn() -> A,
}

/// A bordered button activated by keyboard or mouse
///
/// Activation is `Enter` or `Space` while focused, or a left click inside the
/// area the button was last rendered to. Each activation emits exactly one
/// action built by `on_activate`.
#[derive(Debug, Default)]
pub struct Button {
    /// Last rendered area, for mouse hit testing
    area: Option<Rect>,
}

impl Button {
    /// Create a new Button
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an event activates the button
    pub fn is_activation(&self, event: &EventKind, is_focused: bool) -> bool {
        match event {
            EventKind::Key(key) => {
                is_focused
                    && key.kind == KeyEventKind::Press
                    && key.modifiers.is_empty()
                    && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
            }
            EventKind::Mouse(mouse) => {
                mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self
                        .area
                        .is_some_and(|area| area_contains(area, mouse.column, mouse.row))
            }
            _ => false,
        }
    }
}

impl<A> Component<A> for Button {
    type Props<'a> = ButtonProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if self.is_activation(event, props.is_focused) {
            Some((props.on_activate)())
        } else {
            None
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = Some(area);

        let (border_style, label_style) = if props.is_focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default())
        };

        let button = Paragraph::new(props.label)
            .alignment(Alignment::Center)
            .style(label_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        frame.render_widget(button, area);
    }
}
