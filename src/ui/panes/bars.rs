//! Bar-chart pane: the working array, one bar per element

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the array as vertical bars, colored by the index's role in the
/// current frame: finalized green, touched red, compared yellow, otherwise
/// blue. Roles arrive disjoint from the engine, so the precedence here only
/// orders the lookups.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    compared: &[usize],
    touched: &[usize],
    finalized: &[usize],
    title: &str,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if values.is_empty() {
        let paragraph = Paragraph::new("(no array — press n to generate one)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let compared: FxHashSet<usize> = compared.iter().copied().collect();
    let touched: FxHashSet<usize> = touched.iter().copied().collect();
    let finalized: FxHashSet<usize> = finalized.iter().copied().collect();

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let color = if finalized.contains(&idx) {
                DEFAULT_THEME.bar_sorted
            } else if touched.contains(&idx) {
                DEFAULT_THEME.bar_touched
            } else if compared.contains(&idx) {
                DEFAULT_THEME.bar_compared
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(value as u64)
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    // Drop the gap once the array outgrows the pane width so more bars fit.
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_gap: u16 = if values.len() * 2 <= inner_width { 1 } else { 0 };

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(bar_gap);

    frame.render_widget(chart, area);
}
