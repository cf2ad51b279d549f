use crate::model::Journal;
use crate::notifier::Notifier;
use crate::suggest::suggest_task;
use anyhow::{anyhow, Context, Result};
use humantime::format_duration;
use prettytable::Table;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration as STDDuration;

const NAME_WIDTH: usize = 40;

/// Run the interactive menu until the user exits or input ends.
pub fn menu<I, O, R>(
    journal: &mut Journal,
    notifier: &Notifier,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    writeln!(output, "=== Smart Study Optimizer ===")?;
    loop {
        writeln!(output, "\n1. Add a new task")?;
        writeln!(output, "2. Get a task suggestion")?;
        writeln!(output, "3. Exit")?;
        let choice = match prompt(input, output, "Choose an option: ")? {
            Some(choice) => choice,
            None => {
                writeln!(output)?;
                return Ok(());
            }
        };

        match choice.trim() {
            "1" => {
                let name = required(prompt(input, output, "Task name: ")?)?;
                let minutes =
                    parse_number(&required(prompt(input, output, "Estimated duration (minutes): ")?)?)?;
                journal.add_task(&name, minutes)?;
                writeln!(output, "Task '{}' added!", name)?;
            }
            "2" => {
                let energy =
                    parse_number(&required(prompt(input, output, "Your energy level (1-10): ")?)?)?;
                let task = suggest_task(journal.tasks(), energy, rng).cloned();
                match task {
                    Some(task) => {
                        writeln!(
                            output,
                            "Suggested task: {} ({} mins)",
                            task.name, task.estimated_minutes
                        )?;
                        let start = required(prompt(input, output, "Start this task? (y/n): ")?)?;
                        if start.trim().to_lowercase() == "y" {
                            writeln!(output, "Task started... Press Enter when done")?;
                            output.flush()?;
                            required(read_line(input)?)?;
                            journal.log_completion(&task.name, task.estimated_minutes)?;
                            notifier.notify(
                                "Task Completed!",
                                &format!("You finished '{}'", task.name),
                            );
                        }
                    }
                    None => writeln!(output, "No tasks available. Add some first!")?,
                }
            }
            "3" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please select 1, 2, or 3.")?,
        }
    }
}

/// Add a task from the command line.
pub fn add_task<O: Write>(
    journal: &mut Journal,
    name: &str,
    estimated_minutes: u32,
    output: &mut O,
) -> Result<()> {
    journal.add_task(name, estimated_minutes)?;
    writeln!(
        output,
        "{}. {} ({})",
        journal.tasks().len(),
        name,
        fmt_minutes(estimated_minutes)
    )?;
    Ok(())
}

/// Print every task in a table.
pub fn list<O: Write>(journal: &Journal, output: &mut O) -> Result<()> {
    if journal.tasks().is_empty() {
        writeln!(output, "No tasks available. Add some first!")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["#", "task", "estimated duration"]);
    for (i, task) in journal.tasks().iter().enumerate() {
        table.add_row(row![
            i + 1,
            textwrap::fill(&task.name, NAME_WIDTH),
            fmt_minutes(task.estimated_minutes)
        ]);
    }
    table.print(output).context("Failed to print tasks.")?;
    Ok(())
}

/// Print the completed sessions in a table, followed by the total time.
pub fn history<O: Write>(journal: &Journal, output: &mut O) -> Result<()> {
    if journal.logs().is_empty() {
        writeln!(output, "No completed sessions yet.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["task", "duration", "finished at"]);
    let mut total = 0u64;
    for entry in journal.logs() {
        total += u64::from(entry.duration);
        table.add_row(row![
            textwrap::fill(&entry.task, NAME_WIDTH),
            fmt_minutes(entry.duration),
            entry.timestamp
        ]);
    }
    table.print(output).context("Failed to print history.")?;
    writeln!(
        output,
        "{} sessions, {} in total.",
        journal.logs().len(),
        format_duration(STDDuration::from_secs(total * 60))
    )?;
    Ok(())
}

fn fmt_minutes(minutes: u32) -> String {
    format_duration(STDDuration::from_secs(u64::from(minutes) * 60)).to_string()
}

/// Print `message` and read one line. `None` at end of input.
fn prompt<I: BufRead, O: Write>(input: &mut I, output: &mut O, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    read_line(input)
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input.")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
}

fn required(line: Option<String>) -> Result<String> {
    line.ok_or_else(|| anyhow!("Unexpected end of input."))
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid number: '{}'", text))
}
