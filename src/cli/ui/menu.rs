//! Numbered, keyed command menus with column-formatted rendering.

use std::collections::HashMap;

use strsim::levenshtein;
use tracing::{debug, warn};

use crate::cli::core::{CommandError, CommandResult, LoopControl};
use crate::cli::io::Console;
use crate::cli::ui::columns::{row_height, wrap_row, ColumnSpec};
use crate::errors::MenuError;

pub const BACK_KEY: &str = "back";

const MIN_COLUMNS: usize = 3;
const RULE_PADDING: usize = 5;
const SUGGESTION_DISTANCE: usize = 3;

/// Handler bound to a command. Receives the owning menu (and through it the
/// menu's typed context), the console, and the whitespace-split input whose
/// first element is the selector that was typed.
pub type Action<C> = fn(&mut Menu<C>, &mut Console, &[&str]) -> CommandResult;

/// Hook run before every render so a menu can rebuild its commands from
/// current application state.
pub type Refresh<C> = fn(&mut Menu<C>) -> Result<(), CommandError>;

/// Anything that can run as an interactive loop. Lets a command own a nested
/// menu whose context type differs from its parent's.
pub trait MenuLoop {
    fn run(&mut self, console: &mut Console) -> Result<LoopControl, MenuError>;
}

pub struct Command<C> {
    option_number: usize,
    pub name: String,
    pub description: String,
    pub additional_columns: Vec<String>,
    action: Action<C>,
    sub_menu: Option<Box<dyn MenuLoop>>,
}

impl<C> Command<C> {
    /// An empty `name` makes the command reachable by option number only.
    pub fn new(name: impl Into<String>, description: impl Into<String>, action: Action<C>) -> Self {
        Self {
            option_number: 0,
            name: name.into(),
            description: description.into(),
            additional_columns: Vec::new(),
            action,
            sub_menu: None,
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.additional_columns = columns;
        self
    }

    /// Attaches a nested menu that is entered after the action returns
    /// `Continue`.
    pub fn with_sub_menu<M: MenuLoop + 'static>(mut self, menu: M) -> Self {
        self.sub_menu = Some(Box::new(menu));
        self
    }

    /// 1-based position assigned when the command was added to a menu.
    pub fn option_number(&self) -> usize {
        self.option_number
    }
}

/// Outcome of resolving a typed token.
pub enum Resolved<'a, C> {
    Command(&'a Command<C>),
    Back,
}

pub struct Menu<C> {
    pub instructions: String,
    pub context: C,
    columns: Vec<ColumnSpec>,
    commands: Vec<Command<C>>,
    commands_by_key: HashMap<String, usize>,
    refresh: Option<Refresh<C>>,
    /// Bumped whenever the command list changes.
    generation: u64,
}

impl<C> Menu<C> {
    pub fn new(instructions: impl Into<String>, context: C) -> Self {
        Self {
            instructions: instructions.into(),
            context,
            columns: Vec::new(),
            commands: Vec::new(),
            commands_by_key: HashMap::new(),
            refresh: None,
            generation: 0,
        }
    }

    /// Configures the table layout. The first three columns hold the option
    /// number, name, and description; any further ones hold a command's
    /// additional columns in order.
    pub fn with_columns(mut self, columns: Vec<ColumnSpec>) -> Result<Self, MenuError> {
        if !columns.is_empty() && columns.len() < MIN_COLUMNS {
            return Err(MenuError::InvalidColumnSpec(format!(
                "a menu needs at least {MIN_COLUMNS} columns (number, name, description), got {}",
                columns.len()
            )));
        }
        self.columns = columns;
        Ok(self)
    }

    pub fn with_refresh(mut self, refresh: Refresh<C>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn add_command(&mut self, mut command: Command<C>) {
        let index = self.commands.len();
        command.option_number = index + 1;
        self.generation += 1;
        if !command.name.is_empty() {
            self.commands_by_key.insert(command.name.clone(), index);
        }
        self.commands.push(command);
    }

    /// Replaces every command, renumbering from 1 and rebuilding the key map.
    pub fn set_commands(&mut self, commands: Vec<Command<C>>) {
        self.commands.clear();
        self.commands_by_key.clear();
        self.generation += 1;
        for command in commands {
            self.add_command(command);
        }
    }

    pub fn commands(&self) -> &[Command<C>] {
        &self.commands
    }

    pub fn command(&self, key: &str) -> Option<&Command<C>> {
        self.commands_by_key
            .get(key)
            .and_then(|index| self.commands.get(*index))
    }

    pub fn render(&self) -> Result<String, MenuError> {
        let mut out = format!("\n{}\n", self.instructions);
        if self.columns.is_empty() {
            return Ok(out);
        }

        let widths: Vec<usize> = self.columns.iter().map(ColumnSpec::abs_width).collect();
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.justify(column.label()))
            .collect();
        out.push_str(&join_cells(&header));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + RULE_PADDING));
        out.push('\n');

        for command in &self.commands {
            let wrapped = wrap_row(&self.cells(command), &widths)?;
            for line in 0..row_height(&wrapped) {
                let row: Vec<String> = self
                    .columns
                    .iter()
                    .zip(&wrapped)
                    .map(|(column, fragments)| column.justify(&fragments[line]))
                    .collect();
                out.push_str(&join_cells(&row));
                out.push('\n');
            }
        }
        Ok(out)
    }

    fn cells(&self, command: &Command<C>) -> Vec<String> {
        let number = command.option_number.to_string();
        let raw: Vec<&str> = [number.as_str(), command.name.as_str(), command.description.as_str()]
            .into_iter()
            .chain(command.additional_columns.iter().map(String::as_str))
            .collect();
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                raw.get(idx)
                    .map(|value| column.format_value(value))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Resolves a 1-based option number, a registered key, or the reserved
    /// `back` token.
    pub fn resolve(&self, token: &str) -> Result<Resolved<'_, C>, MenuError> {
        if token.is_empty() {
            return Err(MenuError::Validation(
                "enter a command name or option number".into(),
            ));
        }
        if let Ok(option) = token.parse::<i64>() {
            return usize::try_from(option)
                .ok()
                .filter(|number| (1..=self.commands.len()).contains(number))
                .map(|number| Resolved::Command(&self.commands[number - 1]))
                .ok_or(MenuError::OptionOutOfRange {
                    option,
                    count: self.commands.len(),
                });
        }
        if let Some(command) = self.command(token) {
            return Ok(Resolved::Command(command));
        }
        if token == BACK_KEY {
            return Ok(Resolved::Back);
        }
        Err(MenuError::UnknownCommand {
            token: token.to_string(),
            suggestion: self.suggest(token),
        })
    }

    /// Accepts exactly the input whose selector [`Menu::resolve`] accepts.
    pub fn validate(&self, input: &str) -> Result<(), MenuError> {
        let selector = input.split_whitespace().next().unwrap_or("");
        self.resolve(selector).map(|_| ())
    }

    /// The command an action was invoked through.
    pub fn selected(&self, args: &[&str]) -> Result<&Command<C>, MenuError> {
        let selector = args.first().copied().unwrap_or("");
        match self.resolve(selector)? {
            Resolved::Command(command) => Ok(command),
            Resolved::Back => Err(MenuError::UnknownCommand {
                token: selector.to_string(),
                suggestion: None,
            }),
        }
    }

    fn suggest(&self, token: &str) -> Option<String> {
        self.commands
            .iter()
            .map(|command| command.name.as_str())
            .filter(|name| !name.is_empty())
            .chain(std::iter::once(BACK_KEY))
            .map(|name| (levenshtein(name, token), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name.to_string())
    }

    /// Runs the command selected by `input`. The action may rewrite the
    /// menu's commands; a sub-menu attached to the command is entered only if
    /// the command list was left untouched.
    pub fn dispatch(&mut self, console: &mut Console, input: &str) -> CommandResult {
        let args: Vec<&str> = input.split_whitespace().collect();
        let selector = args.first().copied().unwrap_or("");
        let index = match self.resolve(selector)? {
            Resolved::Back => return Ok(LoopControl::Back),
            Resolved::Command(command) => command.option_number - 1,
        };

        let action = self.commands[index].action;
        let generation = self.generation;
        debug!(option = index + 1, key = %self.commands[index].name, "dispatching command");

        let control = action(self, console, &args)?;
        if control != LoopControl::Continue || self.generation != generation {
            return Ok(control);
        }

        match self.commands.get_mut(index).and_then(|command| command.sub_menu.as_mut()) {
            Some(sub_menu) => Ok(sub_menu.run(console)?.into_parent()),
            None => Ok(LoopControl::Continue),
        }
    }

    /// Shows the menu and dispatches input until a command asks to go back or
    /// exit. Returns [`LoopControl::Back`] or [`LoopControl::Exit`]; running
    /// out of input counts as an exit.
    pub fn run(&mut self, console: &mut Console) -> Result<LoopControl, MenuError> {
        loop {
            if let Some(refresh) = self.refresh {
                if let Err(err) = refresh(self) {
                    warn!(error = %err, "menu refresh failed");
                    console.error(&err)?;
                }
            }
            console.write_text(&self.render()?)?;

            let input = match console.user_input("", |input| self.validate(input)) {
                Ok(input) => input,
                Err(MenuError::EndOfInput) => return Ok(LoopControl::Exit),
                Err(err) => return Err(err),
            };

            match self.dispatch(console, &input) {
                Ok(LoopControl::Continue) => {}
                Ok(control) => return Ok(control),
                Err(CommandError::Menu(MenuError::EndOfInput)) => return Ok(LoopControl::Exit),
                Err(CommandError::Menu(MenuError::Io(err))) | Err(CommandError::Io(err)) => {
                    return Err(MenuError::Io(err))
                }
                Err(err) => console.error(err)?,
            }
        }
    }
}

impl<C> MenuLoop for Menu<C> {
    fn run(&mut self, console: &mut Console) -> Result<LoopControl, MenuError> {
        Menu::run(self, console)
    }
}

fn join_cells(cells: &[String]) -> String {
    cells.join(" ").trim_end().to_string()
}

/// Leaves the current menu.
pub fn back<C>(_menu: &mut Menu<C>, _console: &mut Console, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Back)
}

/// Ends the program from any depth.
pub fn exit<C>(_menu: &mut Menu<C>, _console: &mut Console, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}

/// Action for commands whose only job is to open their attached sub-menu.
pub fn open_sub_menu<C>(_menu: &mut Menu<C>, _console: &mut Console, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Continue)
}
