//! Shell
//!
//! A line-oriented driver for a [`Session`]. Each input line stands for one click in a cart UI:
//! it is parsed into a [`Command`], dispatched, and the notification and fresh view are written
//! back.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::{
    commands::Command,
    menu::Menu,
    session::{Session, Update},
    view::ViewError,
};

const HELP: &str = "
 add <item>      add one of a menu item to the cart
 remove <item>   remove an item from the cart
 clear           empty the cart
 cart            show the cart
 checkout        review the total and proceed to payment
 pay             select a payment method and place the order
 cancel          leave the payment step
 menu            show the menu
 help            show this help
 quit            leave the shell
";

/// Problems with a single line of input. The shell reports these and keeps going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The first word is not a known command.
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    /// `add` named something that is not on the menu.
    #[error("'{0}' is not on the menu")]
    UnknownItem(String),

    /// `add` or `remove` without an item name.
    #[error("'{0}' needs an item name")]
    MissingItem(&'static str),
}

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Writing a view failed.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// A cart interaction.
    Command(Command),

    /// Print the menu.
    ShowMenu,

    /// Print the command list.
    Help,

    /// Leave the shell.
    Quit,
}

/// Parse one line of input. Blank lines yield `Ok(None)`.
///
/// Item names for `add` are resolved against the menu, which supplies the price. `remove` uses
/// the menu's spelling when the name is on the menu and the text as typed otherwise.
///
/// # Errors
///
/// Returns an [`InputError`] for unknown commands, unknown menu items or a missing item name.
pub fn parse_input(line: &str, menu: &Menu) -> Result<Option<ShellInput>, InputError> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let input = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(InputError::MissingItem("add"));
            }

            let item = menu
                .find(rest)
                .ok_or_else(|| InputError::UnknownItem(rest.to_string()))?;

            ShellInput::Command(item.add_command())
        }
        "remove" | "rm" => {
            if rest.is_empty() {
                return Err(InputError::MissingItem("remove"));
            }

            let name = menu.find(rest).map_or(rest, |item| item.name.as_str());

            ShellInput::Command(Command::remove(name))
        }
        "clear" => ShellInput::Command(Command::Clear),
        "cart" | "view" => ShellInput::Command(Command::ViewCart),
        "checkout" => ShellInput::Command(Command::ConfirmCheckout),
        "pay" => ShellInput::Command(Command::SelectPayment),
        "cancel" => ShellInput::Command(Command::CancelCheckout),
        "menu" => ShellInput::ShowMenu,
        "help" | "?" => ShellInput::Help,
        "quit" | "exit" => ShellInput::Quit,
        _ => return Err(InputError::UnknownCommand(verb.to_string())),
    };

    Ok(Some(input))
}

enum Flow {
    Continue,
    Quit,
}

/// Interactive cart shell over a menu.
#[derive(Debug)]
pub struct Shell {
    session: Session,
    menu: Menu,
}

impl Shell {
    /// Create a shell with an empty cart, displaying amounts in the menu's currency.
    pub fn new(menu: Menu) -> Self {
        Self {
            session: Session::new(menu.display_format()),
            menu,
        }
    }

    /// The session driven by this shell.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until it ends or the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Bad input lines are reported
    /// on `out` and do not stop the shell.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), ShellError> {
        writeln!(out, "Welcome! Type 'help' for a list of commands.")?;
        self.menu.write_to(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;

            if let Flow::Quit = self.handle_line(&line, &mut out)? {
                break;
            }

            write!(out, "> ")?;
            out.flush()?;
        }

        Ok(())
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, ShellError> {
        match parse_input(line, &self.menu) {
            Ok(None) => {}
            Ok(Some(ShellInput::Quit)) => return Ok(Flow::Quit),
            Ok(Some(ShellInput::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(ShellInput::ShowMenu)) => self.menu.write_to(&mut *out)?,
            Ok(Some(ShellInput::Command(command))) => {
                let update = self.session.dispatch(command);
                write_update(out, &update)?;
            }
            Err(err) => {
                debug!(%err, line, "input rejected");
                writeln!(out, "error: {err}")?;
            }
        }

        Ok(Flow::Continue)
    }
}

fn write_update(out: &mut impl Write, update: &Update) -> Result<(), ShellError> {
    if let Some(notification) = &update.notification {
        writeln!(out, "{notification}")?;
    }

    update.view.write_to(&mut *out)?;

    Ok(())
}
