use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TaskId = u32;

/// Board column a task sits in. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Todo,
    InProgress,
    Review,
    Done,
}

impl Status {
    pub const BOARD_COLUMNS: &[Status] = &[
        Status::Todo,
        Status::InProgress,
        Status::Review,
        Status::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "inProgress",
            Status::Review => "review",
            Status::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Done => "Done",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Status::Todo),
            "inProgress" => Some(Status::InProgress),
            "review" => Some(Status::Review),
            "done" => Some(Status::Done),
            _ => None,
        }
    }

    /// Position of this column on the board (0-3).
    pub fn index(&self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Review => 2,
            Status::Done => 3,
        }
    }

    pub fn next(&self) -> Option<Status> {
        match self {
            Status::Todo => Some(Status::InProgress),
            Status::InProgress => Some(Status::Review),
            Status::Review => Some(Status::Done),
            Status::Done => None,
        }
    }

    pub fn prev(&self) -> Option<Status> {
        match self {
            Status::Todo => None,
            Status::InProgress => Some(Status::Todo),
            Status::Review => Some(Status::InProgress),
            Status::Done => Some(Status::Review),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Task priority. Serialized with the same capitalized labels the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: &[Priority] = &[Priority::High, Priority::Medium, Priority::Low];

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Priority::High => "!!",
            Priority::Medium => "!",
            Priority::Low => "-",
        }
    }

    /// Exact, case-sensitive match on the display label.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub status: Status,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub attachments: u32,
}

impl Task {
    /// Description with blank text treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assignee: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub assignee: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}
