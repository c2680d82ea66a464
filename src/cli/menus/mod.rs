//! The recipe manager's menus, built on the generic menu engine.

pub mod main_menu;
pub mod recipe_edit;
pub mod recipe_list;
pub mod recipe_view;

use crate::cli::ui::{ColumnKind, ColumnSpec};
use crate::config::Config;
use crate::errors::MenuError;
use crate::recipes::RecipeStore;

pub use main_menu::main_menu;

const NUMBER_WIDTH: i32 = 4;

/// State shared by every recipe menu.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub store: RecipeStore,
    pub layout: Layout,
}

impl AppContext {
    pub fn new(store: RecipeStore, layout: Layout) -> Self {
        Self { store, layout }
    }
}

/// Column widths applied to every menu table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name_width: i32,
    pub description_width: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Layout {
    fn from(config: &Config) -> Self {
        Self {
            name_width: config.name_width,
            description_width: config.description_width,
        }
    }
}

impl Layout {
    /// Number, key, and description columns followed by `extra`.
    pub fn columns(&self, extra: &[(i32, ColumnKind, &str)]) -> Result<Vec<ColumnSpec>, MenuError> {
        let mut columns = vec![
            ColumnSpec::new(NUMBER_WIDTH, ColumnKind::Integer, "#")?,
            ColumnSpec::new(self.name_width, ColumnKind::String, "Key")?,
            ColumnSpec::new(self.description_width, ColumnKind::String, "Description")?,
        ];
        for (width, kind, label) in extra {
            columns.push(ColumnSpec::new(*width, *kind, *label)?);
        }
        Ok(columns)
    }
}
