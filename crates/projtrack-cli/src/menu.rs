//! Interactive menu loop
//!
//! One selection per iteration, and one recovery boundary for everything
//! that can go wrong underneath it.

use projtrack_core::commands::project::{NewProject, ProjectStore};
use projtrack_core::Result;
use std::io::{BufRead, Write};

use crate::prompt::Prompter;

/// Menu operations, printed one per line under the header
const OPERATIONS: &[&str] = &["1) Add a project"];

/// Selection produced by a blank line (or end-of-input) at the menu prompt
const EXIT_SELECTION: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Running,
    Exited,
}

/// Top-level driver: shows the menu, dispatches selections, reports errors.
pub struct MenuLoop<'a, R, W, S: ?Sized> {
    prompter: Prompter<R, W>,
    store: &'a S,
}

impl<'a, R, W, S> MenuLoop<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: ProjectStore + ?Sized,
{
    pub fn new(prompter: Prompter<R, W>, store: &'a S) -> Self {
        Self { prompter, store }
    }

    /// Drive the menu until the user exits or input runs out.
    ///
    /// Parse and store failures are reported here and the loop resumes.
    /// Only a failure to write the report itself ends the session early.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.dispatch().await {
                Ok(MenuState::Exited) => return Ok(()),
                Ok(MenuState::Running) => {}
                Err(err) => self
                    .prompter
                    .line(format_args!("\nError: {err} Try again."))?,
            }
        }
    }

    async fn dispatch(&mut self) -> Result<MenuState> {
        self.print_operations()?;

        let selection = self
            .prompter
            .prompt_int("Enter a menu selection")?
            .unwrap_or(EXIT_SELECTION);

        match selection {
            EXIT_SELECTION => {
                self.prompter.line("\nExiting the menu. Goodbye.")?;
                Ok(MenuState::Exited)
            }
            1 => {
                self.create_project().await?;
                Ok(MenuState::Running)
            }
            other => {
                self.prompter.line(format_args!(
                    "\n{other} is not a valid selection. Try again."
                ))?;
                Ok(MenuState::Running)
            }
        }
    }

    fn print_operations(&mut self) -> Result<()> {
        self.prompter
            .line("\nThese are the available selections. Press the Enter key to quit:")?;
        for operation in OPERATIONS {
            self.prompter.line(format_args!("\t{operation}"))?;
        }
        Ok(())
    }

    /// Prompt for each project field in order, store the result, report it.
    ///
    /// Absent answers stay absent; nothing is validated locally beyond the
    /// field parses themselves.
    async fn create_project(&mut self) -> Result<()> {
        let name = self.prompter.prompt_text("Enter the project name")?;
        let estimated_hours = self.prompter.prompt_decimal("Enter the estimated hours")?;
        let actual_hours = self.prompter.prompt_decimal("Enter the actual hours")?;
        let difficulty = self.prompter.prompt_int("Enter the project difficulty")?;
        let notes = self.prompter.prompt_text("Enter the project notes")?;

        let draft = NewProject {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };
        let created = self.store.add_project(draft).await?;

        self.prompter.line(format_args!(
            "You have successfully created project: {created}"
        ))?;
        Ok(())
    }
}
