//! The task board of one project.
//!
//! Tasks are stored in a single list, each carrying its [`Status`]. Columns
//! are derived by grouping on that field, keeping list order, so moving a
//! task between columns only changes the task itself.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TaskflowError;
use crate::style::StyleToken;
use crate::task::{CreateTask, Status, Task, TaskId, UpdateTask};

/// Serialized as the flat task list. Deserializing runs the same duplicate
/// check as [`Board::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct Board {
    tasks: Vec<Task>,
}

impl TryFrom<Vec<Task>> for Board {
    type Error = TaskflowError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        Board::new(tasks)
    }
}

impl From<Board> for Vec<Task> {
    fn from(board: Board) -> Self {
        board.tasks
    }
}

/// Read-only view of one column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    pub status: Status,
    pub title: &'static str,
    pub style: StyleToken,
    pub tasks: Vec<&'a Task>,
}

impl ColumnView<'_> {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

impl Board {
    /// Builds a board from a flat list. Task ids must be unique.
    pub fn new(tasks: Vec<Task>) -> Result<Self, TaskflowError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(TaskflowError::DuplicateTask(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// Builds a board from per-column lists. Each task takes the status of
    /// the column it is listed under.
    pub fn from_columns(columns: Vec<(Status, Vec<Task>)>) -> Result<Self, TaskflowError> {
        let tasks = columns
            .into_iter()
            .flat_map(|(status, tasks)| {
                tasks.into_iter().map(move |mut task| {
                    task.status = status;
                    task
                })
            })
            .collect();
        Self::new(tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks of one column in display order.
    pub fn column(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn column_count(&self, status: Status) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// All four columns in board order.
    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        Status::BOARD_COLUMNS
            .iter()
            .map(|&status| ColumnView {
                status,
                title: status.display_name(),
                style: status.style(),
                tasks: self.column(status),
            })
            .collect()
    }

    /// Column-keyed view, the shape used when dumping a board as JSON.
    pub fn by_column(&self) -> BTreeMap<Status, Vec<&Task>> {
        Status::BOARD_COLUMNS
            .iter()
            .map(|&status| (status, self.column(status)))
            .collect()
    }

    /// Number of tasks due on `date`.
    pub fn due_on(&self, date: NaiveDate) -> usize {
        self.tasks.iter().filter(|t| t.due_date == date).count()
    }

    /// One past the largest id on the board. Fails once `TaskId::MAX` is taken.
    pub fn next_id(&self) -> Result<TaskId, TaskflowError> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| TaskflowError::InvalidInput("task ids exhausted".into()))
    }

    /// Appends a task to the end of its column.
    pub fn add(&mut self, task: Task) -> Result<&Task, TaskflowError> {
        if self.task(task.id).is_some() {
            return Err(TaskflowError::DuplicateTask(task.id));
        }
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn create(&mut self, input: CreateTask) -> Result<&Task, TaskflowError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(TaskflowError::InvalidInput("task title is empty".into()));
        }
        let task = Task {
            id: self.next_id()?,
            status: input.status,
            title,
            description: input.description,
            assignee: input.assignee,
            priority: input.priority,
            due_date: input.due_date,
            comments: 0,
            attachments: 0,
        };
        self.add(task)
    }

    /// Applies the set fields of `update`. A status change moves the task to
    /// the end of its new column.
    pub fn update(&mut self, id: TaskId, update: &UpdateTask) -> Result<&Task, TaskflowError> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(TaskflowError::InvalidInput("task title is empty".into()));
            }
        }
        if let Some(assignee) = &update.assignee {
            if assignee.trim().is_empty() {
                return Err(TaskflowError::InvalidInput("assignee is empty".into()));
            }
        }
        let pos = self.position(id)?;
        let task = &mut self.tasks[pos];
        if let Some(title) = &update.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &update.description {
            task.description = description.clone();
        }
        if let Some(assignee) = &update.assignee {
            task.assignee = assignee.trim().to_string();
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        match update.status {
            Some(status) if status != task.status => {
                let mut task = self.tasks.remove(pos);
                task.status = status;
                self.tasks.push(task);
                Ok(&self.tasks[self.tasks.len() - 1])
            }
            _ => Ok(&self.tasks[pos]),
        }
    }

    pub fn move_task(&mut self, id: TaskId, status: Status) -> Result<&Task, TaskflowError> {
        self.update(
            id,
            &UpdateTask {
                status: Some(status),
                ..Default::default()
            },
        )
    }

    /// Moves a task one column to the right. No-op in the last column.
    pub fn advance(&mut self, id: TaskId) -> Result<&Task, TaskflowError> {
        let current = self.status_of(id)?;
        match current.next() {
            Some(next) => self.move_task(id, next),
            None => self.get(id),
        }
    }

    /// Moves a task one column to the left. No-op in the first column.
    pub fn retreat(&mut self, id: TaskId) -> Result<&Task, TaskflowError> {
        let current = self.status_of(id)?;
        match current.prev() {
            Some(prev) => self.move_task(id, prev),
            None => self.get(id),
        }
    }

    pub fn rename(&mut self, id: TaskId, title: &str) -> Result<&Task, TaskflowError> {
        self.update(
            id,
            &UpdateTask {
                title: Some(title.to_string()),
                ..Default::default()
            },
        )
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskflowError> {
        let pos = self.position(id)?;
        Ok(self.tasks.remove(pos))
    }

    fn get(&self, id: TaskId) -> Result<&Task, TaskflowError> {
        self.task(id).ok_or(TaskflowError::TaskNotFound(id))
    }

    fn status_of(&self, id: TaskId) -> Result<Status, TaskflowError> {
        self.get(id).map(|t| t.status)
    }

    fn position(&self, id: TaskId) -> Result<usize, TaskflowError> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskflowError::TaskNotFound(id))
    }
}
