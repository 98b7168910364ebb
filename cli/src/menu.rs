//! The interactive menu loop.
//!
//! ```text
//! ShowMenu -> AwaitChoice -> CollectInput -> DispatchOperation -> ShowMenu
//!                 |  ^            (1..=4)
//!                 |  '-- not a number
//!                 |-- 0 ---------> Exit
//!                 '-- other -----> ShowMenu ("Invalid option.")
//! ```
//!
//! A failed operation is printed and the loop continues. Only console I/O
//! errors end `run` early.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::api::TaskApi;
use crate::prompt::Console;
use crate::render;
use crate::transport::Transport;

/// Menu entries that lead to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    List,
    Update,
    Delete,
}

impl Action {
    /// `None` for `0` and for any number outside the menu.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Action::Create),
            2 => Some(Action::List),
            3 => Some(Action::Update),
            4 => Some(Action::Delete),
            _ => None,
        }
    }
}

/// An operation with all of its fields collected and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        title: String,
        completed: bool,
        user_id: i64,
    },
    List,
    Update {
        id: i64,
        title: String,
        completed: bool,
        user_id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug)]
enum State {
    ShowMenu,
    AwaitChoice,
    CollectInput(Action),
    DispatchOperation(Command),
    Exit,
}

const EXIT_CHOICE: i64 = 0;
const COMPLETED_PROMPT: &str = "Is the task completed? (true/false):";

/// Runs the menu until the user chooses `0`.
pub fn run<T, R, W>(api: &TaskApi<T>, console: &mut Console<R, W>) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    let mut state = State::ShowMenu;
    loop {
        state = match state {
            State::ShowMenu => {
                render::menu(console.output())?;
                State::AwaitChoice
            }
            State::AwaitChoice => {
                let choice = console.choice()?;
                match Action::from_choice(choice) {
                    Some(action) => State::CollectInput(action),
                    None if choice == EXIT_CHOICE => State::Exit,
                    None => {
                        render::invalid_option(console.output())?;
                        State::ShowMenu
                    }
                }
            }
            State::CollectInput(action) => State::DispatchOperation(collect(action, console)?),
            State::DispatchOperation(command) => {
                dispatch(api, command, console.output())?;
                State::ShowMenu
            }
            State::Exit => {
                debug!("menu exited");
                return Ok(());
            }
        };
    }
}

fn collect<R: BufRead, W: Write>(action: Action, console: &mut Console<R, W>) -> io::Result<Command> {
    let command = match action {
        Action::Create => Command::Create {
            title: console.title("Enter the task title:")?,
            completed: console.boolean(COMPLETED_PROMPT)?,
            user_id: console.integer("Enter the id of the owning user:")?,
        },
        Action::List => Command::List,
        Action::Update => Command::Update {
            id: console.integer("Enter the id of the task to update:")?,
            title: console.title("Enter the new task title:")?,
            completed: console.boolean(COMPLETED_PROMPT)?,
            user_id: console.integer("Enter the new id of the owning user:")?,
        },
        Action::Delete => Command::Delete {
            id: console.integer("Enter the id of the task to delete:")?,
        },
    };
    Ok(command)
}

/// Performs `command` and prints its outcome, success or failure.
pub fn dispatch<T: Transport, W: Write>(api: &TaskApi<T>, command: Command, out: &mut W) -> io::Result<()> {
    let outcome = match command {
        Command::Create {
            title,
            completed,
            user_id,
        } => api
            .create(&title, completed, user_id)
            .map(|task| render::created(out, task.as_ref())),
        Command::List => api.list().map(|tasks| render::listed(out, &tasks)),
        Command::Update {
            id,
            title,
            completed,
            user_id,
        } => api
            .update(id, &title, completed, user_id)
            .map(|()| render::updated(out, id)),
        Command::Delete { id } => api.delete(id).map(|()| render::deleted(out, id)),
    };
    match outcome {
        Ok(printed) => printed,
        Err(err) => render::request_error(out, &err),
    }
}
