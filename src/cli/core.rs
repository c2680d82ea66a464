//! Dispatch outcomes and the error type returned by menu actions.

use std::io;

use crate::errors::{MenuError, StoreError};

/// What the enclosing menu loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Render the same menu again.
    Continue,
    /// Leave the current menu and return to its parent.
    Back,
    /// Unwind every menu and end the program.
    Exit,
}

impl LoopControl {
    /// Maps the result of a finished sub-menu onto its parent loop: only an
    /// exit keeps propagating.
    pub fn into_parent(self) -> LoopControl {
        match self {
            LoopControl::Exit => LoopControl::Exit,
            LoopControl::Continue | LoopControl::Back => LoopControl::Continue,
        }
    }
}

pub type CommandResult = Result<LoopControl, CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exit_escapes_a_sub_menu() {
        assert_eq!(LoopControl::Back.into_parent(), LoopControl::Continue);
        assert_eq!(LoopControl::Continue.into_parent(), LoopControl::Continue);
        assert_eq!(LoopControl::Exit.into_parent(), LoopControl::Exit);
    }
}
