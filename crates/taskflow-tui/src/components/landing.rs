use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use taskflow_core::sample::{BENEFITS, FEATURES, HIGHLIGHTS, PITCH, TAGLINE};

pub fn render(frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().bold().fg(Color::Cyan))),
        Line::from(""),
        Line::from(PITCH),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let mut features = Vec::new();
    for (title, description) in FEATURES {
        features.push(Line::from(Span::styled(*title, Style::default().bold())));
        features.push(Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::DarkGray),
        )));
        features.push(Line::from(""));
    }
    let features = Paragraph::new(features)
        .block(
            Block::default()
                .title(" Everything your team needs ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(features, body[0]);

    let mut benefits: Vec<Line> = BENEFITS
        .iter()
        .map(|b| {
            Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(Color::Green)),
                Span::raw(*b),
            ])
        })
        .collect();
    benefits.push(Line::from(""));
    for (value, label) in HIGHLIGHTS {
        benefits.push(Line::from(vec![
            Span::styled(format!(" {value:>5} "), Style::default().bold().fg(Color::Yellow)),
            Span::raw(*label),
        ]));
    }
    let benefits = Paragraph::new(benefits).block(
        Block::default()
            .title(" Why teams choose TaskFlow ")
            .borders(Borders::ALL),
    );
    frame.render_widget(benefits, body[1]);

    let cta = Paragraph::new(Line::from(vec![
        Span::raw("Ready to transform your workflow? Press "),
        Span::styled("Enter", Style::default().bold().fg(Color::Yellow)),
        Span::raw(" to get started."),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(cta, layout[2]);
}
