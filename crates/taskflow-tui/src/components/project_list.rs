use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use taskflow_core::date::format_long_date;
use taskflow_core::{DateLocale, Project};

use crate::components::theme::{badge, progress_bar};

/// Cursor over a list of project cards.
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    len: usize,
    list_state: ListState,
}

impl ProjectList {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self { len, list_state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.len)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < self.len {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            KeyCode::Char('g') => self.list_state.select(Some(0)),
            KeyCode::Char('G') => self.list_state.select(Some(self.len - 1)),
            _ => {}
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        projects: &[Project],
        locale: DateLocale,
    ) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let items: Vec<ListItem> = projects
            .iter()
            .map(|p| ListItem::new(project_card(p, locale)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)).bold())
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn project_card(project: &Project, locale: DateLocale) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(project.name.clone(), Style::default().bold()),
            Span::raw(" "),
            badge(project.status.display_name(), project.status.style()),
            Span::raw(" "),
            badge(project.priority.display_name(), project.priority.style()),
        ]),
        Line::from(Span::styled(
            format!("  {}", project.description),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {}", progress_bar(project.progress(), 20)),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" {}% complete", project.progress())),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} members  Due {}  {}/{} tasks",
                project.members,
                format_long_date(project.due_date, locale),
                project.tasks.completed,
                project.tasks.total,
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}
