//! In-place text patches on files that already exist in the project

mod middleware;
mod replace;

pub use middleware::{insert_middleware_after, install_middleware_after};
pub use replace::replace_in_file;
