pub mod environment;
pub mod paths;

pub use environment::{home_dir, projects_root};
pub use paths::{format_path_with_tilde, normalize_path, project_slug};
