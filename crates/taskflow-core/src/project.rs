use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Priority;

pub type ProjectId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Planning,
    Completed,
}

impl ProjectStatus {
    pub const ALL: &[ProjectStatus] = &[
        ProjectStatus::InProgress,
        ProjectStatus::Review,
        ProjectStatus::Planning,
        ProjectStatus::Completed,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Review => "Review",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Exact, case-sensitive match on the display label.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "In Progress" => Some(ProjectStatus::InProgress),
            "Review" => Some(ProjectStatus::Review),
            "Planning" => Some(ProjectStatus::Planning),
            "Completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTotals {
    pub total: u32,
    pub completed: u32,
}

/// Summary card data for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Reported progress, 0-100.
    pub progress: u8,
    pub due_date: NaiveDate,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub members: u32,
    pub tasks: TaskTotals,
}

impl Project {
    /// Completed tasks as a whole percentage of the total; 0 with no tasks.
    pub fn completion(&self) -> u8 {
        if self.tasks.total == 0 {
            return 0;
        }
        let done = self.tasks.completed.min(self.tasks.total) as u64;
        ((done * 100) / self.tasks.total as u64) as u8
    }

    pub fn progress(&self) -> u8 {
        self.progress.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// All projects known to the app, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The first `n` projects, shown on the dashboard.
    pub fn recent(&self, n: usize) -> &[Project] {
        &self.projects[..n.min(self.projects.len())]
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
