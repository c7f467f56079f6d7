//! Built-in sample data shown by the app.

use crate::board::Board;
use crate::date::parse_due_date;
use crate::error::TaskflowError;
use crate::project::{Catalog, DashboardStat, Project, ProjectStatus, TaskTotals, Trend, User};
use crate::task::{Priority, Status, Task, TaskId};

/// Project that owns the sample board.
pub const SAMPLE_PROJECT_ID: u32 = 1;

pub const TAGLINE: &str = "Manage Projects Like a Pro";

pub const PITCH: &str = "TaskFlow helps teams organize, track, and deliver projects with powerful \
Kanban boards, real-time collaboration, and insightful analytics.";

pub const FEATURES: &[(&str, &str)] = &[
    (
        "Kanban Boards",
        "Visualize your workflow with customizable boards, lists, and cards",
    ),
    (
        "Team Collaboration",
        "Invite team members, assign tasks, and work together seamlessly",
    ),
    (
        "Progress Tracking",
        "Monitor project progress with detailed analytics and reports",
    ),
    (
        "Real-time Updates",
        "See changes instantly as your team updates tasks and projects",
    ),
];

pub const BENEFITS: &[&str] = &[
    "Streamline project workflows",
    "Improve team communication",
    "Track progress in real-time",
    "Customize to fit your needs",
];

pub const HIGHLIGHTS: &[(&str, &str)] = &[
    ("50%", "Faster delivery"),
    ("95%", "Project success"),
    ("10k+", "Active teams"),
    ("24/7", "Support"),
];

pub fn user() -> User {
    User {
        name: "John Doe".into(),
        email: "john@example.com".into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: TaskId,
    title: &str,
    description: &str,
    assignee: &str,
    priority: Priority,
    due: &str,
    comments: u32,
    attachments: u32,
) -> Result<Task, TaskflowError> {
    Ok(Task {
        id,
        // Overwritten by the column the task is listed under.
        status: Status::Todo,
        title: title.into(),
        description: Some(description.into()),
        assignee: assignee.into(),
        priority,
        due_date: parse_due_date(due)?,
        comments,
        attachments,
    })
}

/// The board of the "Website Redesign" project.
pub fn board() -> Result<Board, TaskflowError> {
    Board::from_columns(vec![
        (
            Status::Todo,
            vec![
                task(
                    1,
                    "Design homepage wireframes",
                    "Create wireframes for the new homepage layout",
                    "Sarah Johnson",
                    Priority::High,
                    "2024-01-25",
                    3,
                    2,
                )?,
                task(
                    2,
                    "Set up development environment",
                    "Configure local development setup with Docker",
                    "Mike Chen",
                    Priority::Medium,
                    "2024-01-22",
                    1,
                    0,
                )?,
            ],
        ),
        (
            Status::InProgress,
            vec![
                task(
                    3,
                    "Implement user authentication",
                    "Build login/register functionality with JWT",
                    "John Doe",
                    Priority::High,
                    "2024-01-28",
                    5,
                    1,
                )?,
                task(
                    4,
                    "Create API endpoints",
                    "Develop RESTful API for user management",
                    "Lisa Wang",
                    Priority::Medium,
                    "2024-01-30",
                    2,
                    3,
                )?,
            ],
        ),
        (
            Status::Review,
            vec![task(
                5,
                "Database schema design",
                "Design and review database schema for user data",
                "David Brown",
                Priority::High,
                "2024-01-20",
                8,
                1,
            )?],
        ),
        (
            Status::Done,
            vec![
                task(
                    6,
                    "Project setup and initialization",
                    "Initialize project repository and basic structure",
                    "John Doe",
                    Priority::Low,
                    "2024-01-15",
                    2,
                    0,
                )?,
                task(
                    7,
                    "Requirements gathering",
                    "Collect and document project requirements",
                    "Sarah Johnson",
                    Priority::Medium,
                    "2024-01-18",
                    12,
                    5,
                )?,
            ],
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    name: &str,
    description: &str,
    progress: u8,
    due: &str,
    status: ProjectStatus,
    priority: Priority,
    members: u32,
    tasks: (u32, u32),
) -> Result<Project, TaskflowError> {
    Ok(Project {
        id,
        name: name.into(),
        description: description.into(),
        progress,
        due_date: parse_due_date(due)?,
        status,
        priority,
        members,
        tasks: TaskTotals {
            total: tasks.0,
            completed: tasks.1,
        },
    })
}

pub fn catalog() -> Result<Catalog, TaskflowError> {
    Ok(Catalog::new(vec![
        project(
            1,
            "Website Redesign",
            "Complete overhaul of company website with modern design and improved UX",
            75,
            "2024-02-15",
            ProjectStatus::InProgress,
            Priority::High,
            5,
            (24, 18),
        )?,
        project(
            2,
            "Mobile App Development",
            "iOS and Android app for customer portal with real-time features",
            45,
            "2024-03-01",
            ProjectStatus::InProgress,
            Priority::High,
            3,
            (32, 14),
        )?,
        project(
            3,
            "Marketing Campaign",
            "Q1 marketing campaign planning and execution across all channels",
            90,
            "2024-01-30",
            ProjectStatus::Review,
            Priority::Medium,
            4,
            (16, 14),
        )?,
        project(
            4,
            "Database Migration",
            "Migrate legacy database to new cloud infrastructure",
            30,
            "2024-04-15",
            ProjectStatus::Planning,
            Priority::Medium,
            2,
            (28, 8),
        )?,
        project(
            5,
            "API Integration",
            "Integrate third-party APIs for enhanced functionality",
            60,
            "2024-03-10",
            ProjectStatus::InProgress,
            Priority::Low,
            3,
            (20, 12),
        )?,
        project(
            6,
            "Security Audit",
            "Comprehensive security audit and vulnerability assessment",
            25,
            "2024-05-01",
            ProjectStatus::Planning,
            Priority::High,
            4,
            (35, 9),
        )?,
    ]))
}

pub fn stats() -> Vec<DashboardStat> {
    [
        ("Active Projects", "12", "+2 from last month"),
        ("Team Members", "24", "+3 this week"),
        ("Tasks Completed", "156", "+12 today"),
        ("Average Completion", "87%", "+5% improvement"),
    ]
    .into_iter()
    .map(|(title, value, change)| DashboardStat {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        trend: Trend::Up,
    })
    .collect()
}
