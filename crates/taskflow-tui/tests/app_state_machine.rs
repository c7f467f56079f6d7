//! State machine tests for the TUI App.
//!
//! Each test builds an App over the sample workspace and simulates key
//! events to check route changes, mode transitions and board edits.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use taskflow_core::{DateLocale, Priority, Route, Status, Workspace};
use taskflow_tui::app::{App, Mode, TaskField};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(char_key(c));
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
}

fn make_app(route: Route) -> App {
    App::new(
        Workspace::sample().unwrap(),
        route,
        DateLocale::EnUs,
        today(),
    )
}

fn board_app() -> App {
    make_app(Route::ProjectDetail(1))
}

fn sample_board(app: &App) -> &taskflow_core::Board {
    app.workspace().board(1).unwrap()
}

fn selected_id(app: &App) -> Option<u32> {
    app.board()?.selected_task().map(|t| t.id)
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// ── Navigation ──

#[test]
fn starts_on_requested_route() {
    let app = make_app(Route::Landing);
    assert_eq!(app.route(), &Route::Landing);
    assert!(matches!(app.mode(), Mode::Normal));
    assert!(app.board().is_none());
}

#[test]
fn enter_on_landing_opens_dashboard() {
    let mut app = make_app(Route::Landing);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), &Route::Dashboard);
}

#[test]
fn number_keys_switch_views_and_esc_goes_back() {
    let mut app = make_app(Route::Landing);
    app.handle_key(char_key('1'));
    assert_eq!(app.route(), &Route::Dashboard);
    app.handle_key(char_key('2'));
    assert_eq!(app.route(), &Route::Projects);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::Dashboard);
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::Landing);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::Landing);
    assert!(app.status_message().is_some());
}

#[test]
fn navigate_to_same_route_does_not_grow_history() {
    let mut app = make_app(Route::Dashboard);
    app.navigate(Route::Dashboard);
    assert!(!app.back());
}

#[test]
fn projects_list_opens_selected_project() {
    let mut app = make_app(Route::Projects);
    app.handle_key(char_key('j'));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), &Route::ProjectDetail(2));

    // Project 2 has an empty board
    let board = app.board().unwrap();
    for &status in Status::BOARD_COLUMNS {
        assert_eq!(board.column_count(status), 0);
    }
}

#[test]
fn dashboard_opens_recent_project() {
    let mut app = make_app(Route::Dashboard);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.route(), &Route::ProjectDetail(1));
    assert_eq!(selected_id(&app), Some(1));
}

#[test]
fn unknown_project_has_no_board() {
    let mut app = make_app(Route::ProjectDetail(99));
    assert!(app.board().is_none());
    app.handle_key(char_key('n'));
    assert!(matches!(app.mode(), Mode::Normal));
    assert!(render(&app).contains("Project 99 not found"));
}

#[test]
fn unknown_path_renders_not_found() {
    let app = make_app(Route::parse("/settings"));
    assert_eq!(app.route(), &Route::NotFound("/settings".into()));
    assert!(render(&app).contains("No page at /settings"));
}

// ── Board ──

#[test]
fn sample_board_counts() {
    let app = board_app();
    let board = app.board().unwrap();
    assert_eq!(board.column_count(Status::Todo), 2);
    assert_eq!(board.column_count(Status::InProgress), 2);
    assert_eq!(board.column_count(Status::Review), 1);
    assert_eq!(board.column_count(Status::Done), 2);
}

#[test]
fn m_advances_selected_task_and_keeps_selection() {
    let mut app = board_app();
    assert_eq!(selected_id(&app), Some(1));
    app.handle_key(char_key('m'));

    let board = sample_board(&app);
    assert_eq!(board.task(1).unwrap().status, Status::InProgress);
    let ids: Vec<u32> = board.column(Status::InProgress).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 4, 1]);

    assert_eq!(selected_id(&app), Some(1));
    assert_eq!(app.board().unwrap().active_status(), Status::InProgress);
    assert_eq!(app.status_message(), Some("Moved to In Progress"));
}

#[test]
fn shift_m_at_first_column_is_noop() {
    let mut app = board_app();
    app.handle_key(char_key('M'));
    assert_eq!(sample_board(&app).task(1).unwrap().status, Status::Todo);
    assert_eq!(sample_board(&app).column_count(Status::Todo), 2);
}

#[test]
fn new_task_lands_in_active_column() {
    let mut app = board_app();
    app.handle_key(char_key('l'));
    app.handle_key(char_key('l'));
    app.handle_key(char_key('n'));
    assert!(app.is_input_mode());
    type_str(&mut app, "Write release notes");
    app.handle_key(key(KeyCode::Enter));

    assert!(matches!(app.mode(), Mode::Normal));
    let board = sample_board(&app);
    let task = board.task(8).unwrap();
    assert_eq!(task.title, "Write release notes");
    assert_eq!(task.status, Status::Review);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, today());
    assert_eq!(selected_id(&app), Some(8));
}

#[test]
fn new_task_blank_title_is_ignored() {
    let mut app = board_app();
    app.handle_key(char_key('n'));
    type_str(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(sample_board(&app).total(), 7);
}

#[test]
fn new_task_esc_cancels() {
    let mut app = board_app();
    app.handle_key(char_key('n'));
    type_str(&mut app, "abc");
    app.handle_key(key(KeyCode::Backspace));
    match app.mode() {
        Mode::NewTask { input } => assert_eq!(input, "ab"),
        other => panic!("expected NewTask, got {other:?}"),
    }
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::Normal));
    assert_eq!(sample_board(&app).total(), 7);
}

#[test]
fn delete_requires_confirmation() {
    let mut app = board_app();
    app.handle_key(char_key('d'));
    assert!(matches!(app.mode(), Mode::ConfirmDelete { .. }));
    app.handle_key(char_key('n'));
    assert!(matches!(app.mode(), Mode::Normal));
    assert!(sample_board(&app).task(1).is_some());

    app.handle_key(char_key('d'));
    app.handle_key(char_key('y'));
    assert!(sample_board(&app).task(1).is_none());
    assert_eq!(sample_board(&app).column_count(Status::Todo), 1);
    assert_eq!(selected_id(&app), Some(2));
}

// ── Task detail ──

#[test]
fn enter_opens_detail_and_esc_closes() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.id, 1),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::Normal));
}

fn clear_input(app: &mut App) {
    let len = match app.mode() {
        Mode::EditField { input, .. } => input.chars().count(),
        _ => 0,
    };
    for _ in 0..len {
        app.handle_key(key(KeyCode::Backspace));
    }
}

#[test]
fn edit_title_from_detail() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('t'));
    match app.mode() {
        Mode::EditField { field, input, .. } => {
            assert_eq!(*field, TaskField::Title);
            assert_eq!(input, "Design homepage wireframes");
        }
        other => panic!("expected EditField, got {other:?}"),
    }
    for _ in 0.."wireframes".len() {
        app.handle_key(key(KeyCode::Backspace));
    }
    type_str(&mut app, "mockups");
    app.handle_key(key(KeyCode::Enter));

    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.title, "Design homepage mockups"),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
    assert_eq!(
        sample_board(&app).task(1).unwrap().title,
        "Design homepage mockups"
    );
}

#[test]
fn edit_title_from_board_returns_to_board() {
    let mut app = board_app();
    app.handle_key(char_key('e'));
    type_str(&mut app, "!!!");
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::Normal));
    assert_eq!(
        sample_board(&app).task(1).unwrap().title,
        "Design homepage wireframes"
    );

    app.handle_key(char_key('e'));
    type_str(&mut app, " v2");
    app.handle_key(key(KeyCode::Enter));
    assert!(matches!(app.mode(), Mode::Normal));
    assert_eq!(
        sample_board(&app).task(1).unwrap().title,
        "Design homepage wireframes v2"
    );
}

#[test]
fn edit_title_esc_from_detail_returns_to_detail() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('t'));
    type_str(&mut app, "!!!");
    app.handle_key(key(KeyCode::Esc));
    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.title, "Design homepage wireframes"),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
}

#[test]
fn reassign_from_detail() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('a'));
    match app.mode() {
        Mode::EditField { field, input, .. } => {
            assert_eq!(*field, TaskField::Assignee);
            assert_eq!(input, "Sarah Johnson");
        }
        other => panic!("expected EditField, got {other:?}"),
    }
    clear_input(&mut app);
    type_str(&mut app, "Mike Chen");
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(sample_board(&app).task(1).unwrap().assignee, "Mike Chen");
    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.assignee, "Mike Chen"),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
}

#[test]
fn blank_assignee_is_rejected_and_editor_stays_open() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('a'));
    clear_input(&mut app);
    app.handle_key(key(KeyCode::Enter));

    assert!(matches!(app.mode(), Mode::EditField { .. }));
    assert!(app.status_message().unwrap().starts_with("Error"));
    assert_eq!(sample_board(&app).task(1).unwrap().assignee, "Sarah Johnson");
}

#[test]
fn edit_and_clear_description() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('e'));
    match app.mode() {
        Mode::EditField { field, input, .. } => {
            assert_eq!(*field, TaskField::Description);
            assert_eq!(input, "Create wireframes for the new homepage layout");
        }
        other => panic!("expected EditField, got {other:?}"),
    }
    clear_input(&mut app);
    type_str(&mut app, "Low-fi sketches first");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        sample_board(&app).task(1).unwrap().description(),
        Some("Low-fi sketches first")
    );

    app.handle_key(char_key('e'));
    clear_input(&mut app);
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(sample_board(&app).task(1).unwrap().description(), None);
}

#[test]
fn reschedule_due_date() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('u'));
    match app.mode() {
        Mode::EditField { input, .. } => assert_eq!(input, "2024-01-25"),
        other => panic!("expected EditField, got {other:?}"),
    }
    clear_input(&mut app);
    type_str(&mut app, "2024-02-29");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(
        sample_board(&app).task(1).unwrap().due_date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert!(matches!(app.mode(), Mode::TaskDetail { .. }));
}

#[test]
fn bad_due_date_keeps_editor_open() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('u'));
    clear_input(&mut app);
    type_str(&mut app, "next week");
    app.handle_key(key(KeyCode::Enter));

    match app.mode() {
        Mode::EditField { input, .. } => assert_eq!(input, "next week"),
        other => panic!("expected EditField, got {other:?}"),
    }
    assert!(app.status_message().unwrap().starts_with("Error"));
    assert_eq!(
        sample_board(&app).task(1).unwrap().due_date,
        NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
    );
}

#[test]
fn priority_pick_from_board_returns_to_board() {
    let mut app = board_app();
    app.handle_key(char_key('p'));
    assert!(matches!(
        app.mode(),
        Mode::PriorityPick {
            task_id: 1,
            current: Priority::High,
            from_detail: false
        }
    ));
    app.handle_key(char_key('x'));
    assert!(matches!(app.mode(), Mode::PriorityPick { .. }));
    app.handle_key(char_key('3'));
    assert_eq!(sample_board(&app).task(1).unwrap().priority, Priority::Low);
    assert!(matches!(app.mode(), Mode::Normal));

    app.handle_key(char_key('p'));
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::Normal));
}

#[test]
fn priority_pick_from_detail_returns_to_detail() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('p'));
    app.handle_key(key(KeyCode::Esc));
    assert!(matches!(app.mode(), Mode::TaskDetail { .. }));

    app.handle_key(char_key('p'));
    app.handle_key(char_key('2'));
    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.priority, Priority::Medium),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
}

#[test]
fn move_pick_sends_task_to_chosen_column() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(char_key('v'));
    assert!(matches!(app.mode(), Mode::MovePick { .. }));
    app.handle_key(char_key('4'));

    let board = sample_board(&app);
    assert_eq!(board.task(1).unwrap().status, Status::Done);
    let ids: Vec<u32> = board.column(Status::Done).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![6, 7, 1]);
    match app.mode() {
        Mode::TaskDetail { task } => assert_eq!(task.status, Status::Done),
        other => panic!("expected TaskDetail, got {other:?}"),
    }
}

#[test]
fn help_closes_on_any_key() {
    let mut app = board_app();
    app.handle_key(char_key('?'));
    assert!(matches!(app.mode(), Mode::Help));
    app.handle_key(char_key('x'));
    assert!(matches!(app.mode(), Mode::Normal));
}

#[test]
fn edits_survive_navigation() {
    let mut app = board_app();
    app.handle_key(char_key('m'));
    app.handle_key(char_key('2'));
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.route(), &Route::ProjectDetail(1));
    assert_eq!(
        app.board().unwrap().column_count(Status::InProgress),
        3
    );
}

// ── Rendering ──

#[test]
fn board_render_shows_columns_and_cards() {
    let app = board_app();
    let screen = render(&app);
    assert!(screen.contains("Website Redesign"));
    assert!(screen.contains("To Do"));
    assert!(screen.contains("In Progress"));
    assert!(screen.contains("Design homepage wireframes"));
    assert!(screen.contains("1/25/2024"));
}

#[test]
fn dashboard_render_counts_tasks_due_today() {
    let app = make_app(Route::Dashboard);
    let screen = render(&app);
    assert!(screen.contains("Welcome back, John Doe"));
    assert!(screen.contains("1 tasks due today"));
}

#[test]
fn detail_overlay_renders() {
    let mut app = board_app();
    app.handle_key(key(KeyCode::Enter));
    let screen = render(&app);
    assert!(screen.contains("Task Detail"));
    assert!(screen.contains("Sarah Johnson"));
}
