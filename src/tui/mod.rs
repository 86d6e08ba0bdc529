pub mod app;
pub mod command;
pub mod command_actions;
pub mod input;
pub mod registry;
pub mod render;
pub mod theme;

pub use app::{App, ViewState, run};
