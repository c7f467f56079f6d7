use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use taskflow_core::project::ProjectId;
use taskflow_core::task::{CreateTask, Priority, Status, Task, TaskId, UpdateTask};
use taskflow_core::date::parse_due_date;
use taskflow_core::{format_due_date, Board, DateLocale, Route, TaskflowError, Workspace};
use tracing::{debug, info, warn};

use crate::components::dashboard::{self, DashboardView};
use crate::components::landing;
use crate::components::project_list::ProjectList;
use crate::components::task_board::TaskBoard;
use crate::components::theme::{badge, centered_rect, token_style};

/// Number of projects listed on the dashboard.
const RECENT_PROJECTS: usize = 3;

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Browsing the current route
    Normal,
    /// Typing a new task title
    NewTask { input: String },
    /// Viewing task detail
    TaskDetail { task: Task },
    /// Editing one text field of a task. `from_detail` is set when the
    /// editor was opened from the detail popup, which it returns to.
    EditField {
        task_id: TaskId,
        field: TaskField,
        input: String,
        from_detail: bool,
    },
    /// Confirm delete task
    ConfirmDelete { task: Task },
    /// Priority picker
    PriorityPick {
        task_id: TaskId,
        current: Priority,
        from_detail: bool,
    },
    /// Column picker ("Move to...")
    MovePick { task: Task },
    /// Key reference
    Help,
}

/// Task fields editable as a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Assignee,
    DueDate,
}

impl TaskField {
    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Description => "Description",
            TaskField::Assignee => "Assignee",
            TaskField::DueDate => "Due date (YYYY-MM-DD)",
        }
    }

    /// Current value as the editor shows it. Dates are edited in ISO form.
    fn current(&self, task: &Task) -> String {
        match self {
            TaskField::Title => task.title.clone(),
            TaskField::Description => task.description().unwrap_or_default().to_string(),
            TaskField::Assignee => task.assignee.clone(),
            TaskField::DueDate => task.due_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// An empty description clears it.
    fn update(&self, input: &str) -> Result<UpdateTask, TaskflowError> {
        let input = input.trim();
        let mut update = UpdateTask::default();
        match self {
            TaskField::Title => update.title = Some(input.to_string()),
            TaskField::Description => {
                update.description = Some((!input.is_empty()).then(|| input.to_string()))
            }
            TaskField::Assignee => update.assignee = Some(input.to_string()),
            TaskField::DueDate => update.due_date = Some(parse_due_date(input)?),
        }
        Ok(update)
    }
}

pub struct App {
    workspace: Workspace,
    route: Route,
    history: Vec<Route>,
    locale: DateLocale,
    today: NaiveDate,
    board: Option<TaskBoard>,
    projects: ProjectList,
    mode: Mode,
    status_message: Option<String>,
}

impl App {
    pub fn new(workspace: Workspace, route: Route, locale: DateLocale, today: NaiveDate) -> Self {
        let mut app = Self {
            workspace,
            route: Route::Landing,
            history: Vec::new(),
            locale,
            today,
            board: None,
            projects: ProjectList::default(),
            mode: Mode::Normal,
            status_message: None,
        };
        app.load_route(route);
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn board(&self) -> Option<&TaskBoard> {
        self.board.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::NewTask { .. } | Mode::EditField { .. })
    }

    /// Goes to `route`, remembering the current one for [`App::back`].
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let previous = std::mem::replace(&mut self.route, Route::Landing);
        self.history.push(previous);
        self.load_route(route);
    }

    /// Returns to the previous route. Returns `false` when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.load_route(route);
                true
            }
            None => false,
        }
    }

    fn load_route(&mut self, route: Route) {
        info!(path = %route, "navigate");
        self.route = route;
        self.mode = Mode::Normal;
        self.board = self
            .current_project()
            .and_then(|id| self.workspace.board(id))
            .map(TaskBoard::from_board);
        self.projects = match self.route {
            Route::Dashboard => {
                ProjectList::new(self.workspace.catalog.recent(RECENT_PROJECTS).len())
            }
            Route::Projects => ProjectList::new(self.workspace.catalog.len()),
            _ => ProjectList::default(),
        };
        if let Route::NotFound(ref path) = self.route {
            warn!(path = %path, "no view for route");
        }
    }

    /// Project whose board is open, if the route names a known project.
    fn current_project(&self) -> Option<ProjectId> {
        match self.route {
            Route::ProjectDetail(id) if self.workspace.project(id).is_some() => Some(id),
            _ => None,
        }
    }

    fn refresh(&mut self) {
        let Some(board) = self.current_project().and_then(|id| self.workspace.board(id)) else {
            self.board = None;
            return;
        };
        let selected_id = self.board.as_ref().and_then(|b| b.selected_task()).map(|t| t.id);
        let active = self.board.as_ref().map(|b| b.active_status());
        let mut fresh = TaskBoard::from_board(board);
        if let Some(status) = active {
            fresh.focus_status(status);
        }
        if let Some(id) = selected_id {
            fresh.select_task_by_id(id);
        }
        self.board = Some(fresh);
    }

    /// Runs a mutation against the open board, then reloads the view.
    fn with_board<T>(
        &mut self,
        f: impl FnOnce(&mut Board) -> Result<T, TaskflowError>,
    ) -> Result<T, TaskflowError> {
        let id = self
            .current_project()
            .ok_or_else(|| TaskflowError::InvalidInput("no project board is open".into()))?;
        let result = f(self.workspace.board_mut(id)?);
        self.refresh();
        result
    }

    fn select(&mut self, task_id: TaskId) {
        if let Some(board) = self.board.as_mut() {
            board.select_task_by_id(task_id);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match &self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::NewTask { input } => self.handle_new_task(key, input.clone()),
            Mode::TaskDetail { task } => self.handle_task_detail(key, task.clone()),
            Mode::EditField {
                task_id,
                field,
                input,
                from_detail,
            } => self.handle_edit_field(key, *task_id, *field, input.clone(), *from_detail),
            Mode::ConfirmDelete { task } => self.handle_confirm_delete(key, task.clone()),
            Mode::PriorityPick {
                task_id,
                from_detail,
                ..
            } => self.handle_priority_pick(key, *task_id, *from_detail),
            Mode::MovePick { task } => self.handle_move_pick(key, task.clone()),
            Mode::Help => self.mode = Mode::Normal,
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('0') => return self.navigate(Route::Landing),
            KeyCode::Char('1') => return self.navigate(Route::Dashboard),
            KeyCode::Char('2') => return self.navigate(Route::Projects),
            KeyCode::Char('?') => {
                self.mode = Mode::Help;
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if !self.back() {
                    self.status_message = Some("Nothing to go back to".into());
                }
                return;
            }
            _ => {}
        }

        match self.route.clone() {
            Route::Landing => {
                if key.code == KeyCode::Enter {
                    self.navigate(Route::Dashboard);
                }
            }
            Route::Dashboard => self.handle_project_list(key, RECENT_PROJECTS),
            Route::Projects => self.handle_project_list(key, usize::MAX),
            Route::ProjectDetail(_) => self.handle_board(key),
            Route::NotFound(_) => {}
        }
    }

    fn handle_project_list(&mut self, key: KeyEvent, limit: usize) {
        match key.code {
            KeyCode::Enter => {
                let projects = self.workspace.catalog.recent(limit);
                if let Some(project) = self.projects.selected().and_then(|i| projects.get(i)) {
                    let id = project.id;
                    self.navigate(Route::ProjectDetail(id));
                }
            }
            _ => self.projects.handle_key(key),
        }
    }

    fn handle_board(&mut self, key: KeyEvent) {
        if self.board.is_none() {
            return;
        }
        let selected = self.board.as_ref().and_then(|b| b.selected_task()).cloned();
        match key.code {
            KeyCode::Char('n') => {
                self.mode = Mode::NewTask {
                    input: String::new(),
                };
            }
            KeyCode::Enter => {
                if let Some(task) = selected {
                    self.mode = Mode::TaskDetail { task };
                }
            }
            KeyCode::Char('m') => {
                if let Some(task) = selected {
                    self.shift_task(task.id, true);
                }
            }
            KeyCode::Char('M') => {
                if let Some(task) = selected {
                    self.shift_task(task.id, false);
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = selected {
                    self.mode = Mode::ConfirmDelete { task };
                }
            }
            KeyCode::Char('e') => {
                if let Some(task) = selected {
                    self.start_edit(&task, TaskField::Title, false);
                }
            }
            KeyCode::Char('p') => {
                if let Some(task) = selected {
                    self.mode = Mode::PriorityPick {
                        task_id: task.id,
                        current: task.priority,
                        from_detail: false,
                    };
                }
            }
            _ => {
                if let Some(board) = self.board.as_mut() {
                    board.handle_key(key);
                }
            }
        }
    }

    /// Moves a task one column right (`forward`) or left and keeps it selected.
    fn shift_task(&mut self, task_id: TaskId, forward: bool) -> Option<Task> {
        let result = self.with_board(|board| {
            let task = if forward {
                board.advance(task_id)?
            } else {
                board.retreat(task_id)?
            };
            Ok(task.clone())
        });
        match result {
            Ok(task) => {
                debug!(task_id, status = task.status.as_str(), "task moved");
                self.select(task.id);
                self.status_message = Some(format!("Moved to {}", task.status));
                Some(task)
            }
            Err(e) => {
                self.status_message = Some(format!("Error: {e}"));
                None
            }
        }
    }

    fn handle_new_task(&mut self, key: KeyEvent, mut input: String) {
        match key.code {
            KeyCode::Enter => {
                let title = input.trim().to_string();
                if !title.is_empty() {
                    let status = self
                        .board
                        .as_ref()
                        .map(|b| b.active_status())
                        .unwrap_or(Status::Todo);
                    let create = CreateTask {
                        title,
                        description: None,
                        assignee: self.workspace.user.name.clone(),
                        status,
                        priority: Priority::Medium,
                        due_date: self.today,
                    };
                    match self.with_board(|board| board.create(create).cloned()) {
                        Ok(task) => {
                            info!(task_id = task.id, "task created");
                            self.select(task.id);
                            self.status_message = Some("Task created".into());
                        }
                        Err(e) => self.status_message = Some(format!("Error: {e}")),
                    }
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::NewTask { input };
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.mode = Mode::NewTask { input };
            }
            _ => {}
        }
    }

    fn handle_task_detail(&mut self, key: KeyEvent, task: Task) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Normal,
            KeyCode::Char('t') => self.start_edit(&task, TaskField::Title, true),
            KeyCode::Char('e') => self.start_edit(&task, TaskField::Description, true),
            KeyCode::Char('a') => self.start_edit(&task, TaskField::Assignee, true),
            KeyCode::Char('u') => self.start_edit(&task, TaskField::DueDate, true),
            KeyCode::Char('p') => {
                self.mode = Mode::PriorityPick {
                    task_id: task.id,
                    current: task.priority,
                    from_detail: true,
                };
            }
            KeyCode::Char('m') => {
                if let Some(task) = self.shift_task(task.id, true) {
                    self.mode = Mode::TaskDetail { task };
                }
            }
            KeyCode::Char('M') => {
                if let Some(task) = self.shift_task(task.id, false) {
                    self.mode = Mode::TaskDetail { task };
                }
            }
            KeyCode::Char('v') => self.mode = Mode::MovePick { task },
            KeyCode::Char('d') => self.mode = Mode::ConfirmDelete { task },
            _ => {}
        }
    }

    fn start_edit(&mut self, task: &Task, field: TaskField, from_detail: bool) {
        self.mode = Mode::EditField {
            task_id: task.id,
            field,
            input: field.current(task),
            from_detail,
        };
    }

    fn handle_edit_field(
        &mut self,
        key: KeyEvent,
        task_id: TaskId,
        field: TaskField,
        mut input: String,
        from_detail: bool,
    ) {
        match key.code {
            KeyCode::Enter => {
                // A blank title means "never mind"
                if field == TaskField::Title && input.trim().is_empty() {
                    self.leave_editor(task_id, from_detail);
                    return;
                }
                let result = field.update(&input).and_then(|update| {
                    self.with_board(|board| board.update(task_id, &update).cloned())
                });
                match result {
                    Ok(updated) => {
                        info!(task_id, field = field.label(), "task updated");
                        self.status_message = Some(format!("{} updated", field.label()));
                        self.select(updated.id);
                        self.mode = if from_detail {
                            Mode::TaskDetail { task: updated }
                        } else {
                            Mode::Normal
                        };
                    }
                    // Keep the input so it can be corrected
                    Err(e) => self.status_message = Some(format!("Error: {e}")),
                }
            }
            KeyCode::Esc => self.leave_editor(task_id, from_detail),
            KeyCode::Backspace => {
                input.pop();
                self.mode = Mode::EditField {
                    task_id,
                    field,
                    input,
                    from_detail,
                };
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.mode = Mode::EditField {
                    task_id,
                    field,
                    input,
                    from_detail,
                };
            }
            _ => {}
        }
    }

    /// Closes an editor or picker without saving, back to where it was opened.
    fn leave_editor(&mut self, task_id: TaskId, from_detail: bool) {
        if from_detail {
            self.return_to_detail(task_id);
        } else {
            self.mode = Mode::Normal;
        }
    }

    fn return_to_detail(&mut self, task_id: TaskId) {
        let task = self
            .current_project()
            .and_then(|id| self.workspace.board(id))
            .and_then(|b| b.task(task_id))
            .cloned();
        self.mode = match task {
            Some(task) => Mode::TaskDetail { task },
            None => Mode::Normal,
        };
    }

    fn handle_confirm_delete(&mut self, key: KeyEvent, task: Task) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.with_board(|board| board.remove(task.id)) {
                    Ok(removed) => {
                        info!(task_id = removed.id, "task deleted");
                        self.status_message = Some(format!("Deleted: {}", removed.title));
                    }
                    Err(e) => self.status_message = Some(format!("Error: {e}")),
                }
                self.mode = Mode::Normal;
            }
            _ => self.mode = Mode::Normal,
        }
    }

    fn handle_priority_pick(&mut self, key: KeyEvent, task_id: TaskId, from_detail: bool) {
        let priority = match key.code {
            KeyCode::Char('1') => Some(Priority::High),
            KeyCode::Char('2') => Some(Priority::Medium),
            KeyCode::Char('3') => Some(Priority::Low),
            KeyCode::Esc => {
                self.leave_editor(task_id, from_detail);
                return;
            }
            _ => None,
        };
        let Some(priority) = priority else {
            return;
        };

        let update = UpdateTask {
            priority: Some(priority),
            ..Default::default()
        };
        match self.with_board(|board| board.update(task_id, &update).cloned()) {
            Ok(task) => {
                self.status_message = Some(format!("Priority: {}", task.priority));
                self.mode = if from_detail {
                    Mode::TaskDetail { task }
                } else {
                    Mode::Normal
                };
            }
            Err(e) => {
                self.status_message = Some(format!("Error: {e}"));
                self.mode = Mode::Normal;
            }
        }
    }

    fn handle_move_pick(&mut self, key: KeyEvent, task: Task) {
        let target = match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                Status::BOARD_COLUMNS.get(idx).copied()
            }
            KeyCode::Esc => {
                self.mode = Mode::TaskDetail { task };
                return;
            }
            _ => None,
        };
        let Some(target) = target else {
            return;
        };

        match self.with_board(|board| board.move_task(task.id, target).cloned()) {
            Ok(moved) => {
                self.select(moved.id);
                self.status_message = Some(format!("Moved to {}", moved.status));
                self.mode = Mode::TaskDetail { task: moved };
            }
            Err(e) => {
                self.status_message = Some(format!("Error: {e}"));
                self.mode = Mode::Normal;
            }
        }
    }

    //  Rendering

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        self.render_body(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays
        match &self.mode {
            Mode::Normal => {}
            Mode::NewTask { input } => self.render_input_bar(frame, " New task ", input, area),
            Mode::TaskDetail { task } => self.render_task_detail(frame, task, area),
            Mode::EditField { field, input, .. } => {
                self.render_input_bar(frame, &format!(" {} ", field.label()), input, area)
            }
            Mode::ConfirmDelete { task } => self.render_confirm_delete_dialog(frame, task, area),
            Mode::PriorityPick { current, .. } => self.render_priority_pick(frame, *current, area),
            Mode::MovePick { task } => self.render_move_pick(frame, task, area),
            Mode::Help => self.render_help(frame, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" TaskFlow ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
        ];
        for route in [Route::Dashboard, Route::Projects] {
            let active = match (&route, &self.route) {
                (Route::Projects, Route::ProjectDetail(_)) => true,
                (a, b) => a == b,
            };
            let style = if active {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("{} ", route.title()), style));
        }
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            self.workspace.user.name.clone(),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::styled(
            format!("  {}", self.route.path()),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Line::from(spans), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        match &self.route {
            Route::Landing => landing::render(frame, area),
            Route::Dashboard => {
                let view = DashboardView {
                    user: &self.workspace.user,
                    stats: &self.workspace.stats,
                    recent: self.workspace.catalog.recent(RECENT_PROJECTS),
                    list: &self.projects,
                    due_today: self.workspace.tasks_due_on(self.today),
                    locale: self.locale,
                };
                dashboard::render(frame, area, &view);
            }
            Route::Projects => self.projects.render(
                frame,
                area,
                "Projects",
                self.workspace.catalog.list(),
                self.locale,
            ),
            Route::ProjectDetail(id) => self.render_project_detail(frame, *id, area),
            Route::NotFound(path) => {
                render_not_found(frame, &format!("No page at {path}"), area);
            }
        }
    }

    fn render_project_detail(&self, frame: &mut Frame, id: ProjectId, area: Rect) {
        let (Some(project), Some(board)) = (self.workspace.project(id), self.board.as_ref())
        else {
            render_not_found(frame, &format!("Project {id} not found"), area);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Projects", Style::default().fg(Color::DarkGray)),
                Span::styled(" / ", Style::default().fg(Color::DarkGray)),
                Span::raw(project.name.clone()),
            ]),
            Line::from(vec![
                Span::styled(project.name.clone(), Style::default().bold()),
                Span::raw(" "),
                badge(project.status.display_name(), project.status.style()),
            ]),
            Line::from(Span::styled(
                project.description.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, layout[0]);
        board.render(frame, layout[1], self.locale);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Normal => match self.route {
                Route::Landing => vec![("q", "quit"), ("Enter", "get started"), ("1", "dashboard")],
                Route::Dashboard | Route::Projects => vec![
                    ("q", "quit"),
                    ("j/k", "nav"),
                    ("Enter", "open"),
                    ("1/2", "views"),
                    ("Esc", "back"),
                ],
                Route::ProjectDetail(_) => vec![
                    ("q", "quit"),
                    ("h/l", "cols"),
                    ("j/k", "tasks"),
                    ("n", "new"),
                    ("Enter", "detail"),
                    ("m/M", "move"),
                    ("e", "edit"),
                    ("p", "priority"),
                    ("d", "del"),
                    ("Esc", "back"),
                    ("?", "help"),
                ],
                Route::NotFound(_) => vec![("q", "quit"), ("Esc", "back"), ("1", "dashboard")],
            },
            Mode::NewTask { .. } => vec![("Enter", "create"), ("Esc", "cancel")],
            Mode::TaskDetail { .. } => vec![
                ("t", "title"),
                ("e", "description"),
                ("a", "assignee"),
                ("u", "due"),
                ("p", "priority"),
                ("m/M", "move"),
                ("v", "move to"),
                ("d", "del"),
                ("Esc", "back"),
            ],
            Mode::EditField { .. } => vec![("Enter", "save"), ("Esc", "cancel")],
            Mode::ConfirmDelete { .. } => vec![("y", "confirm"), ("any", "cancel")],
            Mode::PriorityPick { .. } => vec![("1", "high"), ("2", "medium"), ("3", "low")],
            Mode::MovePick { .. } => vec![("1-4", "column"), ("Esc", "cancel")],
            Mode::Help => vec![("any", "close")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_input_bar(&self, frame: &mut Frame, label: &str, input: &str, area: Rect) {
        let input_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(3),
            width: area.width,
            height: 3.min(area.height),
        };
        frame.render_widget(Clear, input_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(label.to_string());
        let paragraph = Paragraph::new(input.to_string()).block(block);
        frame.render_widget(paragraph, input_area);
    }

    fn render_task_detail(&self, frame: &mut Frame, task: &Task, area: Rect) {
        let popup = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Task Detail ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            Line::from(vec![
                Span::styled("Title: ", Style::default().bold()),
                Span::raw(task.title.clone()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Column: ", Style::default().bold()),
                Span::styled(task.status.display_name(), token_style(task.status.style())),
            ]),
            Line::from(vec![
                Span::styled("Priority: ", Style::default().bold()),
                Span::styled(
                    task.priority.display_name(),
                    token_style(task.priority.style()),
                ),
            ]),
            Line::from(vec![
                Span::styled("Assignee: ", Style::default().bold()),
                Span::raw(task.assignee.clone()),
            ]),
            Line::from(vec![
                Span::styled("Due: ", Style::default().bold()),
                Span::raw(format_due_date(task.due_date, self.locale)),
            ]),
            Line::from(vec![
                Span::styled("Comments: ", Style::default().bold()),
                Span::raw(task.comments.to_string()),
                Span::styled("  Attachments: ", Style::default().bold()),
                Span::raw(task.attachments.to_string()),
            ]),
            Line::from(""),
            Line::from(Span::styled("Description:", Style::default().bold())),
            Line::from(task.description().unwrap_or("(none)").to_string()),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_confirm_delete_dialog(&self, frame: &mut Frame, task: &Task, area: Rect) {
        let popup = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Confirm Delete ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let text = format!("Delete \"{}\"?\n\n(y)es / (any key) cancel", task.title);
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup);
    }

    fn render_priority_pick(&self, frame: &mut Frame, current: Priority, area: Rect) {
        let popup = centered_rect(30, 30, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Priority ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let items: Vec<ListItem> = Priority::ALL
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let marker = if *p == current { "* " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{marker}{} ", i + 1)),
                    Span::styled(p.display_name(), token_style(p.style())),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), popup);
    }

    fn render_move_pick(&self, frame: &mut Frame, task: &Task, area: Rect) {
        let popup = centered_rect(30, 30, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Move to... ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let items: Vec<ListItem> = Status::BOARD_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let marker = if *s == task.status { "* " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{marker}{} ", i + 1)),
                    Span::styled(s.display_name(), token_style(s.style())),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(task.status.index()));
        frame.render_stateful_widget(List::new(items).block(block), popup, &mut state);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 60, area);
        frame.render_widget(Clear, popup);

        let rows = [
            ("0 / 1 / 2", "home / dashboard / projects"),
            ("Esc", "previous view"),
            ("h/l  j/k", "columns / tasks"),
            ("g/G", "first / last task"),
            ("n", "new task in column"),
            ("Enter", "task detail"),
            ("m/M", "move right / left"),
            ("e", "edit title"),
            ("p", "set priority"),
            ("t/e/a/u", "detail: title / description / assignee / due"),
            ("d", "delete task"),
            ("q", "quit"),
        ];
        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!(" {key:<10}"), Style::default().fg(Color::Yellow)),
                    Span::raw(*desc),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup);
    }
}

fn render_not_found(frame: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("404", Style::default().bold().fg(Color::Red))),
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "Press 1 for the dashboard or 2 for projects",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
