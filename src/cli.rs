use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Run the interactive menu (default).
    Menu,
    /// Add a new task without entering the menu.
    Add {
        /// The task name.
        #[structopt()]
        name: String,

        /// The task estimated duration, in minutes.
        #[structopt()]
        estimated_minutes: u32,
    },
    /// List all stored tasks.
    List,
    /// Show the log of completed sessions.
    History,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "study-optimizer",
    about = "Pick your next study task by energy level."
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Option<Command>,

    /// Use a different data file.
    #[structopt(parse(from_os_str), short, long)]
    pub data_file: Option<PathBuf>,

    /// Do not send desktop notifications.
    #[structopt(long)]
    pub no_notify: bool,
}
