pub mod config;
pub mod list;
pub mod notebook;
pub mod task;

pub use config::*;
pub use list::*;
pub use notebook::*;
pub use task::*;
