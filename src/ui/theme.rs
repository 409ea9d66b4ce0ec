use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,          // Blue: untouched bars
    pub bar_compared: Color, // Yellow: indices under comparison
    pub bar_touched: Color,  // Red: indices just written/swapped
    pub bar_sorted: Color,   // Green: finalized indices
    pub comment: Color,      // Grey
    pub accent: Color,       // Orange
    pub border: Color,
    pub status_bg: Color,
    pub running: Color,
    pub done: Color,
    pub stopped: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(137, 180, 250),          // Blue
    bar_compared: Color::Rgb(249, 226, 175), // Yellow
    bar_touched: Color::Rgb(243, 139, 168),  // Red
    bar_sorted: Color::Rgb(166, 227, 161),   // Green
    comment: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(250, 179, 135), // Orange
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    running: Color::Rgb(137, 180, 250),
    done: Color::Rgb(166, 227, 161),
    stopped: Color::Rgb(243, 139, 168),
};
