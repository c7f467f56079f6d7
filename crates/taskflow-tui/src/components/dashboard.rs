use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use taskflow_core::project::{DashboardStat, Trend, User};
use taskflow_core::{DateLocale, Project};

use crate::components::project_list::ProjectList;

pub struct DashboardView<'a> {
    pub user: &'a User,
    pub stats: &'a [DashboardStat],
    pub recent: &'a [Project],
    pub list: &'a ProjectList,
    pub due_today: usize,
    pub locale: DateLocale,
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Welcome back, {}", view.user.name),
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            "Here's what's happening with your projects today.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(greeting, layout[0]);

    render_stats(frame, layout[1], view.stats);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(layout[2]);

    view.list
        .render(frame, bottom[0], "Recent Projects", view.recent, view.locale);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(bottom[1]);

    let actions = Paragraph::new(vec![
        action_line("2", "View All Projects"),
        action_line("Enter", "Open selected project"),
        action_line("0", "Home"),
    ])
    .block(Block::default().title(" Quick Actions ").borders(Borders::ALL));
    frame.render_widget(actions, side[0]);

    let focus = Paragraph::new(vec![
        Line::from(Span::styled("Today's Focus", Style::default().bold())),
        Line::from(format!("{} tasks due today", view.due_today)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(focus, side[1]);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[DashboardStat]) {
    if stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, chunk) in stats.iter().zip(chunks.iter()) {
        let (arrow, color) = match stat.trend {
            Trend::Up => ("↑", Color::Green),
            Trend::Down => ("↓", Color::Red),
        };
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                stat.value.clone(),
                Style::default().bold().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!("{arrow} {}", stat.change),
                Style::default().fg(color),
            )),
        ])
        .block(
            Block::default()
                .title(format!(" {} ", stat.title))
                .borders(Borders::ALL),
        );
        frame.render_widget(card, *chunk);
    }
}

fn action_line(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow).bold()),
        Span::raw(label.to_string()),
    ])
}
