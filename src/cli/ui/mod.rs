pub mod columns;
pub mod menu;

pub use columns::{ColumnKind, ColumnSpec};
pub use menu::{back, exit, open_sub_menu, Action, Command, Menu, MenuLoop, Refresh, Resolved, BACK_KEY};
