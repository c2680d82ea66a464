pub mod core;
pub mod forms;
pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod ui;

pub use shell::{run_cli, run_session};
