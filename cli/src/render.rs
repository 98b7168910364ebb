//! Text shown to the user.

use std::io::{self, Write};

use todo_core::{ApiError, Task};

const SEPARATOR: &str = "-----------------------------";

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "What would you like to do?")?;
    writeln!(out, "1 - Create a new task")?;
    writeln!(out, "2 - List all tasks")?;
    writeln!(out, "3 - Update a task")?;
    writeln!(out, "4 - Delete a task")?;
    writeln!(out, "0 - Exit")?;
    out.flush()
}

pub fn invalid_option(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Invalid option.")
}

pub fn created(out: &mut impl Write, task: Option<&Task>) -> io::Result<()> {
    match task {
        Some(task) => {
            writeln!(out, "{SEPARATOR}")?;
            writeln!(out, "Task created successfully:")?;
            task_fields(out, task)
        }
        None => writeln!(out, "No task was created."),
    }
}

pub fn listed(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks found.");
    }
    for task in tasks {
        task_fields(out, task)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn updated(out: &mut impl Write, id: i64) -> io::Result<()> {
    writeln!(out, "Task with id {id} updated successfully.")
}

pub fn deleted(out: &mut impl Write, id: i64) -> io::Result<()> {
    writeln!(out, "Task with id {id} deleted successfully.")
}

pub fn request_error(out: &mut impl Write, err: &ApiError) -> io::Result<()> {
    writeln!(out, "Request error: {err}")
}

fn task_fields(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(out, "Id: {}", task.id())?;
    writeln!(out, "Title: {}", task.title())?;
    writeln!(out, "Completed: {}", task.completed())?;
    writeln!(out, "UserId: {}", task.user_id())
}
