use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use taskflow_core::style::column_style;
use taskflow_core::task::{Status, Task, TaskId};
use taskflow_core::{format_due_date, Board, DateLocale};

use crate::components::theme::{badge, token_style};

pub struct TaskBoard {
    columns: Vec<BoardColumn>,
    active_column: usize,
}

struct BoardColumn {
    status: Status,
    tasks: Vec<Task>,
    list_state: ListState,
}

impl TaskBoard {
    pub fn new(columns: Vec<(Status, Vec<Task>)>) -> Self {
        let columns = columns
            .into_iter()
            .map(|(status, tasks)| {
                let mut list_state = ListState::default();
                if !tasks.is_empty() {
                    list_state.select(Some(0));
                }
                BoardColumn {
                    status,
                    tasks,
                    list_state,
                }
            })
            .collect();
        Self {
            columns,
            active_column: 0,
        }
    }

    /// Snapshot of a core board, one column per board status.
    pub fn from_board(board: &Board) -> Self {
        Self::new(
            board
                .columns()
                .into_iter()
                .map(|col| (col.status, col.tasks.into_iter().cloned().collect()))
                .collect(),
        )
    }

    /// Returns the currently highlighted task, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        let col = self.columns.get(self.active_column)?;
        let idx = col.list_state.selected()?;
        col.tasks.get(idx)
    }

    /// Selects the task with the given id, switching columns if needed.
    /// Returns `false` and leaves the cursor alone when no task matches.
    pub fn select_task_by_id(&mut self, task_id: TaskId) -> bool {
        for (col_idx, col) in self.columns.iter_mut().enumerate() {
            if let Some(task_idx) = col.tasks.iter().position(|t| t.id == task_id) {
                self.active_column = col_idx;
                col.list_state.select(Some(task_idx));
                return true;
            }
        }
        false
    }

    /// Focuses the column for `status` without changing its selection.
    pub fn focus_status(&mut self, status: Status) {
        if let Some(idx) = self.columns.iter().position(|c| c.status == status) {
            self.active_column = idx;
        }
    }

    /// Returns the status of the currently active column.
    pub fn active_status(&self) -> Status {
        self.columns
            .get(self.active_column)
            .map(|c| c.status)
            .unwrap_or(Status::Todo)
    }

    pub fn column_count(&self, status: Status) -> usize {
        self.columns
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.tasks.len())
            .unwrap_or(0)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                if self.active_column > 0 {
                    self.active_column -= 1;
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if self.active_column + 1 < self.columns.len() {
                    self.active_column += 1;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(col) = self.columns.get_mut(self.active_column) {
                    let current = col.list_state.selected().unwrap_or(0);
                    if current + 1 < col.tasks.len() {
                        col.list_state.select(Some(current + 1));
                    }
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(col) = self.columns.get_mut(self.active_column) {
                    let current = col.list_state.selected().unwrap_or(0);
                    if current > 0 {
                        col.list_state.select(Some(current - 1));
                    }
                }
            }
            // Jump to first/last
            KeyCode::Char('g') => {
                if let Some(col) = self.columns.get_mut(self.active_column) {
                    if !col.tasks.is_empty() {
                        col.list_state.select(Some(0));
                    }
                }
            }
            KeyCode::Char('G') => {
                if let Some(col) = self.columns.get_mut(self.active_column) {
                    if !col.tasks.is_empty() {
                        col.list_state.select(Some(col.tasks.len() - 1));
                    }
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, locale: DateLocale) {
        let col_count = self.columns.len() as u16;
        if col_count == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..col_count)
            .map(|_| Constraint::Ratio(1, col_count as u32))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, (col, chunk)) in self.columns.iter().zip(chunks.iter()).enumerate() {
            let is_active = i == self.active_column;
            render_column(frame, col, *chunk, is_active, locale);
        }
    }
}

fn render_column(
    frame: &mut Frame,
    col: &BoardColumn,
    area: Rect,
    is_active: bool,
    locale: DateLocale,
) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", col.status.display_name()),
            token_style(column_style(col.status)).bold(),
        ),
        Span::raw(format!("({}) ", col.tasks.len())),
    ]);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = col
        .tasks
        .iter()
        .map(|task| ListItem::new(task_card(task, locale)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)).bold())
        .highlight_symbol("> ");

    let mut state = col.list_state.clone();
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_card(task: &Task, locale: DateLocale) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", task.priority.symbol()),
            token_style(task.priority.style()),
        ),
        Span::styled(task.title.clone(), Style::default().bold()),
    ])];

    if let Some(description) = task.description() {
        lines.push(Line::from(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(vec![
        Span::raw("  "),
        badge(task.priority.display_name(), task.priority.style()),
        Span::styled(
            format!(" due {}", format_due_date(task.due_date, locale)),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let mut meta = vec![
        Span::raw(format!("  {}", task.assignee)),
        Span::styled(
            format!("  {} comments", task.comments),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if task.attachments > 0 {
        meta.push(Span::styled(
            format!("  {} files", task.attachments),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(meta));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use taskflow_core::task::Priority;

    fn make_task(id: TaskId, status: Status) -> Task {
        Task {
            id,
            status,
            title: format!("Task {id}"),
            description: None,
            assignee: "Mike Chen".to_string(),
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(),
            comments: 1,
            attachments: 0,
        }
    }

    fn make_board() -> TaskBoard {
        TaskBoard::new(vec![
            (
                Status::Todo,
                vec![make_task(1, Status::Todo), make_task(2, Status::Todo)],
            ),
            (Status::InProgress, vec![make_task(3, Status::InProgress)]),
            (Status::Review, vec![]),
            (
                Status::Done,
                vec![
                    make_task(4, Status::Done),
                    make_task(5, Status::Done),
                    make_task(6, Status::Done),
                ],
            ),
        ])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn select_task_in_first_column() {
        let mut board = make_board();
        assert!(board.select_task_by_id(2));
        assert_eq!(board.active_column, 0);
        assert_eq!(board.selected_task().unwrap().id, 2);
    }

    #[test]
    fn select_task_in_last_column() {
        let mut board = make_board();
        assert!(board.select_task_by_id(5));
        assert_eq!(board.active_column, 3);
        assert_eq!(board.selected_task().unwrap().id, 5);
    }

    #[test]
    fn select_nonexistent_task_returns_false() {
        let mut board = make_board();
        board.select_task_by_id(3);
        assert_eq!(board.active_column, 1);

        assert!(!board.select_task_by_id(99));
        // Cursor should remain unchanged
        assert_eq!(board.active_column, 1);
        assert_eq!(board.selected_task().unwrap().id, 3);
    }

    #[test]
    fn select_on_empty_board() {
        let mut board = TaskBoard::new(
            Status::BOARD_COLUMNS
                .iter()
                .map(|&s| (s, vec![]))
                .collect(),
        );
        assert!(!board.select_task_by_id(1));
        assert!(board.selected_task().is_none());
    }

    #[test]
    fn empty_column_has_no_selection() {
        let mut board = make_board();
        board.focus_status(Status::Review);
        assert_eq!(board.active_status(), Status::Review);
        assert!(board.selected_task().is_none());
        assert_eq!(board.column_count(Status::Review), 0);
    }

    #[test]
    fn keys_move_between_columns_and_tasks() {
        let mut board = make_board();
        board.handle_key(key(KeyCode::Char('h')));
        assert_eq!(board.active_column, 0);
        board.handle_key(key(KeyCode::Char('j')));
        assert_eq!(board.selected_task().unwrap().id, 2);
        board.handle_key(key(KeyCode::Char('j')));
        assert_eq!(board.selected_task().unwrap().id, 2);
        board.handle_key(key(KeyCode::Char('l')));
        board.handle_key(key(KeyCode::Char('l')));
        board.handle_key(key(KeyCode::Char('l')));
        board.handle_key(key(KeyCode::Char('l')));
        assert_eq!(board.active_status(), Status::Done);
        board.handle_key(key(KeyCode::Char('G')));
        assert_eq!(board.selected_task().unwrap().id, 6);
        board.handle_key(key(KeyCode::Char('g')));
        assert_eq!(board.selected_task().unwrap().id, 4);
    }

    #[test]
    fn from_board_keeps_counts() {
        let core = taskflow_core::sample::board().unwrap();
        let board = TaskBoard::from_board(&core);
        for &status in Status::BOARD_COLUMNS {
            assert_eq!(board.column_count(status), core.column_count(status));
        }
    }

    #[test]
    fn render_shows_column_headers_with_counts() {
        let board = make_board();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| board.render(frame, frame.area(), DateLocale::EnUs))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("To Do"));
        assert!(text.contains("(2)"));
        assert!(text.contains("Done"));
        assert!(text.contains("(3)"));
        assert!(text.contains("1/22/2024"));
    }
}
