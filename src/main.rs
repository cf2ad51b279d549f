#[macro_use]
extern crate prettytable;

use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use std::path::PathBuf;
use structopt::StructOpt;

mod cli;
mod interface;
mod logging;
mod model;
mod notifier;
mod suggest;

use cli::{Command::*, CommandLineArgs};
use model::Journal;
use notifier::Notifier;

const DATA_FILE_NAME: &str = "user_data.json";

/// Path of the data file in the user's data directory, creating the
/// directory if needed.
fn find_default_data_file() -> anyhow::Result<Option<PathBuf>> {
    if let Some(base_dirs) = ProjectDirs::from("com", "studyoptimizer", "study-optimizer") {
        let root_dir = base_dirs.data_dir();
        if !root_dir.exists() {
            std::fs::create_dir_all(root_dir)
                .with_context(|| format!("Failed to create directory {}.", root_dir.display()))?;
        }
        let mut path = PathBuf::from(root_dir);
        path.push(DATA_FILE_NAME);
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    // Get the command-line arguments.
    let CommandLineArgs {
        action,
        data_file,
        no_notify,
    } = CommandLineArgs::from_args();

    // Unpack the data file.
    let data_file = match data_file {
        Some(path) => path,
        None => find_default_data_file()?.ok_or(anyhow!("Failed to find data file."))?,
    };

    let mut journal = Journal::open(&data_file)?;
    tracing::debug!(path = %journal.path().display(), "using data file");
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    // Perform the action.
    match action.unwrap_or(Menu) {
        Menu => {
            let notifier = if no_notify {
                Notifier::disabled()
            } else {
                Notifier::new()
            };
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            interface::menu(
                &mut journal,
                &notifier,
                &mut rand::thread_rng(),
                &mut input,
                &mut output,
            )
        }
        Add {
            name,
            estimated_minutes,
        } => interface::add_task(&mut journal, &name, estimated_minutes, &mut output),
        List => interface::list(&journal, &mut output),
        History => interface::history(&journal, &mut output),
    }?;
    Ok(())
}
