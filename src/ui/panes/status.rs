//! Status bar rendering with keybindings and run-state indicator

use crate::engine::RunStatus;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: RunStatus) {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut spans = vec![
        Span::styled(" ↵ ", key_style),
        Span::styled(" start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" s ", key_style),
        Span::styled(" stop ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" n ", key_style),
        Span::styled(" new array ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥/1-5 ", key_style),
        Span::styled(" algorithm ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ←/→ ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" size ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    match status {
        RunStatus::Running => {
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(
                " ▶ SORTING ",
                Style::default()
                    .bg(DEFAULT_THEME.running)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        RunStatus::Done => {
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(
                " ✓ DONE ",
                Style::default()
                    .bg(DEFAULT_THEME.done)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        RunStatus::Stopped => {
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(
                " ■ STOPPED ",
                Style::default()
                    .bg(DEFAULT_THEME.stopped)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        RunStatus::Idle => {}
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(paragraph, area);
}
