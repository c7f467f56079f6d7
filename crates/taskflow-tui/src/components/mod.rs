pub mod dashboard;
pub mod landing;
pub mod project_list;
pub mod task_board;
pub mod theme;
