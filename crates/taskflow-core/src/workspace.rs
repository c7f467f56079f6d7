use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::board::Board;
use crate::error::TaskflowError;
use crate::project::{Catalog, DashboardStat, Project, ProjectId, User};
use crate::sample;

/// Everything the app shows: the signed-in user, the project catalog, one
/// board per project and the dashboard statistics.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub user: User,
    pub catalog: Catalog,
    pub stats: Vec<DashboardStat>,
    boards: BTreeMap<ProjectId, Board>,
}

impl Workspace {
    /// Every catalog project gets a board; those without one start empty.
    pub fn new(
        user: User,
        catalog: Catalog,
        stats: Vec<DashboardStat>,
        mut boards: BTreeMap<ProjectId, Board>,
    ) -> Self {
        for project in catalog.list() {
            boards.entry(project.id).or_default();
        }
        Self {
            user,
            catalog,
            stats,
            boards,
        }
    }

    pub fn sample() -> Result<Self, TaskflowError> {
        let mut boards = BTreeMap::new();
        boards.insert(sample::SAMPLE_PROJECT_ID, sample::board()?);
        Ok(Self::new(
            sample::user(),
            sample::catalog()?,
            sample::stats(),
            boards,
        ))
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.catalog.get(id)
    }

    pub fn board(&self, id: ProjectId) -> Option<&Board> {
        self.boards.get(&id)
    }

    pub fn board_mut(&mut self, id: ProjectId) -> Result<&mut Board, TaskflowError> {
        self.boards
            .get_mut(&id)
            .ok_or(TaskflowError::ProjectNotFound(id))
    }

    /// Tasks due on `date` across every board.
    pub fn tasks_due_on(&self, date: NaiveDate) -> usize {
        self.boards.values().map(|b| b.due_on(date)).sum()
    }
}
