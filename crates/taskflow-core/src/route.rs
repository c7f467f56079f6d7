use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::project::ProjectId;

/// Client routes. Every path resolves to some route; unknown paths become
/// [`Route::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Landing,
    Dashboard,
    Projects,
    ProjectDetail(ProjectId),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["dashboard"] => Route::Dashboard,
            ["projects"] => Route::Projects,
            ["projects", id] => match parse_project_id(id) {
                Some(id) => Route::ProjectDetail(id),
                None => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::Projects => "/projects".into(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::ProjectDetail(_) => "Board",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// Canonical decimal only: no sign, no leading zeros, never zero.
fn parse_project_id(segment: &str) -> Option<ProjectId> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) || segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}
