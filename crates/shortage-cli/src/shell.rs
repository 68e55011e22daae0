//! Interactive prompt loop
//!
//! Turns typed text into validated values and registry calls. All session
//! state (who is logged in, whether they are an admin) lives here, never in
//! the registry.

use shortage_api::{
    AddOutcome, Caller, Category, DeleteOutcome, Room, Shortage, ShortageQuery, parse_priority,
};
use shortage_config::Settings;
use shortage_core::ShortageRegistry;
use shortage_util::{TrackerError, format_datetime_full, parse_optional_bound};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line-oriented front end over a [`ShortageRegistry`]
pub struct Shell<R, W> {
    registry: ShortageRegistry,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: ShortageRegistry, settings: Settings, input: R, output: W) -> Self {
        Self {
            registry,
            settings,
            input,
            output,
        }
    }

    /// Run a session until `exit` or end of input.
    ///
    /// If `user` is `None` the name is prompted for.
    pub fn run(&mut self, user: Option<String>) -> io::Result<()> {
        writeln!(self.output, "Welcome to the shortage tracker!")?;
        self.report_warnings()?;

        let user = match user {
            Some(user) => user,
            None => match self.prompt("Enter your name: ")? {
                Some(user) => user,
                None => return Ok(()),
            },
        };
        let caller = self.login(&user);
        if caller.is_admin {
            writeln!(self.output, "Logged in as {} (admin).", caller.user)?;
        }

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Commands: add | list | delete | exit")?;
            let Some(command) = self.prompt("Enter command: ")? else {
                break;
            };

            match command.to_lowercase().as_str() {
                "add" => self.add(&caller)?,
                "list" => self.list(&caller)?,
                "delete" => self.delete(&caller)?,
                "exit" | "quit" => break,
                "" => continue,
                other => writeln!(self.output, "Unknown command: {}", other)?,
            }

            self.report_warnings()?;
        }

        debug!(user = %caller.user, "Session ended");
        Ok(())
    }

    /// The registry, for inspection after a session
    pub fn registry(&self) -> &ShortageRegistry {
        &self.registry
    }

    fn login(&self, user: &str) -> Caller {
        let user = user.trim();
        Caller::new(user, self.settings.is_admin(user))
    }

    fn add(&mut self, caller: &Caller) -> io::Result<()> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            return self.reject(TrackerError::EmptyTitle);
        }

        let Some(room) = self.prompt("Room (MeetingRoom / Kitchen / Bathroom): ")? else {
            return Ok(());
        };
        let room: Room = match room.parse() {
            Ok(room) => room,
            Err(e) => return self.reject(e),
        };

        let Some(category) = self.prompt("Category (Electronics / Food / Other): ")? else {
            return Ok(());
        };
        let category: Category = match category.parse() {
            Ok(category) => category,
            Err(e) => return self.reject(e),
        };

        let Some(priority) = self.prompt("Priority (1-10): ")? else {
            return Ok(());
        };
        let priority = match parse_priority(&priority) {
            Ok(priority) => priority,
            Err(e) => return self.reject(e),
        };

        let shortage = Shortage::new(
            title,
            caller.user.clone(),
            room,
            category,
            priority,
            shortage_util::now(),
        );

        match self.registry.add(shortage) {
            AddOutcome::Inserted => writeln!(self.output, "Shortage added."),
            AddOutcome::Replaced { previous_priority } => writeln!(
                self.output,
                "Existing shortage replaced (priority {} -> {}).",
                previous_priority, priority
            ),
            AddOutcome::Rejected { existing_priority } => writeln!(
                self.output,
                "A shortage with this title and room already exists with priority {}. Not added.",
                existing_priority
            ),
        }
    }

    fn list(&mut self, caller: &Caller) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Filters ---")?;

        let mut query = ShortageQuery::all();
        let Some(title) = self.prompt("Title contains (optional): ")? else {
            return Ok(());
        };
        if !title.is_empty() {
            query = query.title_contains(title);
        }

        let Some(category) = self.prompt("Category (optional - Electronics / Food / Other): ")?
        else {
            return Ok(());
        };
        if !category.is_empty() {
            query = query.category(category);
        }

        let Some(room) = self.prompt("Room (optional - MeetingRoom / Kitchen / Bathroom): ")?
        else {
            return Ok(());
        };
        if !room.is_empty() {
            query = query.room(room);
        }

        let Some(start) = self.prompt("Created on - start date (YYYY-MM-DD) (optional): ")? else {
            return Ok(());
        };
        let Some(end) = self.prompt("Created on - end date (YYYY-MM-DD) (optional): ")? else {
            return Ok(());
        };
        query = query.created_between(parse_optional_bound(&start), parse_optional_bound(&end));

        let results = self.registry.query(caller, &query);
        if results.is_empty() {
            return writeln!(self.output, "No shortages found.");
        }
        for s in &results {
            writeln!(self.output, "{}", format_shortage(s))?;
        }
        Ok(())
    }

    fn delete(&mut self, caller: &Caller) -> io::Result<()> {
        let Some(title) = self.prompt("Title of the shortage to delete: ")? else {
            return Ok(());
        };
        let Some(room) =
            self.prompt("Room of the shortage to delete (MeetingRoom / Kitchen / Bathroom): ")?
        else {
            return Ok(());
        };

        match self.registry.delete(&title, &room, caller) {
            DeleteOutcome::Deleted => writeln!(self.output, "Shortage deleted."),
            DeleteOutcome::NotFound => writeln!(self.output, "Shortage not found."),
            DeleteOutcome::Forbidden => writeln!(
                self.output,
                "You can only delete shortages you reported."
            ),
            DeleteOutcome::InvalidRoom => self.reject(TrackerError::room(room)),
        }
    }

    fn reject(&mut self, error: TrackerError) -> io::Result<()> {
        writeln!(self.output, "{}.", error)
    }

    fn report_warnings(&mut self) -> io::Result<()> {
        for warning in self.registry.drain_warnings() {
            writeln!(self.output, "Warning: {}", warning)?;
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// One-line rendering used by `list`
pub fn format_shortage(s: &Shortage) -> String {
    format!(
        "{} - {} - {} - Priority: {} - Created by: {} on {}",
        s.title,
        s.room,
        s.category,
        s.priority,
        s.reported_by,
        format_datetime_full(&s.created_on)
    )
}
