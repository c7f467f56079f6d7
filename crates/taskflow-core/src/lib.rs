pub mod board;
pub mod date;
pub mod error;
pub mod project;
pub mod route;
pub mod sample;
pub mod style;
pub mod task;
pub mod workspace;

pub use board::Board;
pub use date::{format_due_date, DateLocale};
pub use error::TaskflowError;
pub use project::{Catalog, Project, ProjectStatus};
pub use route::Route;
pub use style::{priority_style, status_style, StyleToken};
pub use task::{Priority, Status, Task};
pub use workspace::Workspace;
