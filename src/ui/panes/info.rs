//! Info pane: algorithm, run status, live counters, complexity

use crate::engine::{Algorithm, RunStats, RunStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header pane above the bars.
#[allow(clippy::too_many_arguments)]
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    status: RunStatus,
    status_message: &str,
    stats: RunStats,
    size: usize,
    speed: u8,
) {
    let (time, space) = algorithm.complexity();

    let status_color = match status {
        RunStatus::Running => DEFAULT_THEME.running,
        RunStatus::Done => DEFAULT_THEME.done,
        RunStatus::Stopped => DEFAULT_THEME.stopped,
        RunStatus::Idle => DEFAULT_THEME.fg,
    };

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let top = Line::from(vec![
        Span::styled(
            algorithm.label(),
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Time: ", label_style),
        Span::styled(time, value_style),
        Span::styled("   Space: ", label_style),
        Span::styled(space, value_style),
        Span::styled("   ", label_style),
        Span::styled(
            status_message,
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let bottom = Line::from(vec![
        Span::styled("Comparisons: ", label_style),
        Span::styled(stats.comparisons.to_string(), value_style),
        Span::styled("   Writes: ", label_style),
        Span::styled(stats.writes.to_string(), value_style),
        Span::styled("   Size: ", label_style),
        Span::styled(size.to_string(), value_style),
        Span::styled("   Speed: ", label_style),
        Span::styled(speed.to_string(), value_style),
    ]);

    let block = Block::default()
        .title(" sortty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let paragraph = Paragraph::new(vec![top, bottom]).block(block);
    frame.render_widget(paragraph, area);
}
