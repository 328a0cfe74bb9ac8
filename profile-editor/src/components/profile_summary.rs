//! Read-only view of the current profile

use profile_dispatch_core::Component;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::ProfileAction;
use crate::profile::Profile;

/// Shown when no profile is selected
pub const NO_PROFILE_TEXT: &str = "No profile loaded";

pub struct ProfileSummaryProps<'a> {
    pub profile: Option<&'a Profile>,
}

/// Lists the current profile's fields; render only
#[derive(Debug, Default)]
pub struct ProfileSummary;

impl Component<ProfileAction> for ProfileSummary {
    type Props<'a> = ProfileSummaryProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = match props.profile {
            None => vec![Line::styled(
                NO_PROFILE_TEXT,
                Style::default().fg(Color::DarkGray),
            )],
            Some(profile) => summary_lines(profile),
        };

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

fn summary_lines(profile: &Profile) -> Vec<Line<'_>> {
    let mut lines = Vec::with_capacity(profile.fields.len() + 3);

    lines.push(Line::styled(
        profile.description.as_deref().unwrap_or("(untitled)"),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(format!(
        "schema {} · {} fields · {} constraints",
        profile.schema_version,
        profile.fields.len(),
        profile.constraints.len()
    )));
    lines.push(Line::raw(""));

    for field in &profile.fields {
        let mut spans = vec![
            Span::styled(field.name.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw(": "),
            Span::raw(field.field_type.as_str()),
        ];
        if field.nullable {
            spans.push(Span::styled("?", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
    }

    lines
}
