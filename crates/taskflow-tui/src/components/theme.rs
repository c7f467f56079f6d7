use ratatui::prelude::*;
use taskflow_core::StyleToken;

/// Terminal colors for each style token.
pub fn token_style(token: StyleToken) -> Style {
    match token {
        StyleToken::Destructive => Style::default().fg(Color::LightRed),
        StyleToken::Warning => Style::default().fg(Color::Yellow),
        StyleToken::Success => Style::default().fg(Color::Green),
        StyleToken::Primary => Style::default().fg(Color::Cyan),
        StyleToken::Neutral => Style::default().fg(Color::DarkGray),
    }
}

/// Bracketed label in the token's color, e.g. `[High]`.
pub fn badge(label: &str, token: StyleToken) -> Span<'static> {
    Span::styled(format!("[{label}]"), token_style(token))
}

pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
