use thiserror::Error;

use crate::project::ProjectId;
use crate::task::TaskId;

#[derive(Debug, Error)]
pub enum TaskflowError {
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
