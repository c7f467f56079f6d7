//! Style tokens: abstract visual categories for priorities, project
//! statuses and board columns.
//!
//! Every mapping here is total. A value that is not recognized falls
//! through to [`StyleToken::Neutral`] instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::project::ProjectStatus;
use crate::task::{Priority, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Destructive,
    Warning,
    Success,
    Primary,
    #[default]
    Neutral,
}

impl StyleToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::Destructive => "destructive",
            StyleToken::Warning => "warning",
            StyleToken::Success => "success",
            StyleToken::Primary => "primary",
            StyleToken::Neutral => "neutral",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Priority {
    pub fn style(&self) -> StyleToken {
        match self {
            Priority::High => StyleToken::Destructive,
            Priority::Medium => StyleToken::Warning,
            Priority::Low => StyleToken::Success,
        }
    }
}

impl ProjectStatus {
    pub fn style(&self) -> StyleToken {
        match self {
            ProjectStatus::InProgress => StyleToken::Primary,
            ProjectStatus::Review => StyleToken::Warning,
            ProjectStatus::Planning => StyleToken::Neutral,
            ProjectStatus::Completed => StyleToken::Success,
        }
    }
}

impl Status {
    /// Header style of the board column.
    pub fn style(&self) -> StyleToken {
        match self {
            Status::Todo => StyleToken::Neutral,
            Status::InProgress => StyleToken::Primary,
            Status::Review => StyleToken::Warning,
            Status::Done => StyleToken::Success,
        }
    }
}

/// Style for a priority label such as `"High"`. Matching is exact.
pub fn priority_style(priority: &str) -> StyleToken {
    Priority::parse_str(priority)
        .map(|p| p.style())
        .unwrap_or_default()
}

/// Style for a project status label such as `"In Progress"`. Matching is exact.
pub fn status_style(status: &str) -> StyleToken {
    ProjectStatus::parse_str(status)
        .map(|s| s.style())
        .unwrap_or_default()
}

pub fn column_style(column: Status) -> StyleToken {
    column.style()
}
