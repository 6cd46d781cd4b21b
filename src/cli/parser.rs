use crate::core::form::EntryForm;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimebank
/// CLI application to keep a monthly time bank of worked hours
#[derive(Parser)]
#[command(
    name = "rtimebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time bank CLI: record daily clock-ins and see the monthly hour balance",
    long_about = None
)]
pub struct Cli {
    /// Use this SQLite file instead of the configured backend
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Do not touch any backend: entries live in memory for this run
    #[arg(global = true, long = "local")]
    pub local: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// First clock-in (HH:MM, empty or --:-- to clear)
    #[arg(long = "in1", value_name = "HH:MM")]
    pub in1: Option<String>,

    /// First clock-out
    #[arg(long = "out1", value_name = "HH:MM")]
    pub out1: Option<String>,

    /// Second clock-in
    #[arg(long = "in2", value_name = "HH:MM")]
    pub in2: Option<String>,

    /// Second clock-out
    #[arg(long = "out2", value_name = "HH:MM")]
    pub out2: Option<String>,

    /// Mark the day as a holiday (empty pairs get the standard schedule)
    #[arg(long = "holiday", overrides_with = "no_holiday")]
    pub holiday: bool,

    /// Remove the holiday flag
    #[arg(long = "no-holiday")]
    pub no_holiday: bool,

    /// normal, absence, compensation, vacation, medical, optional, other
    #[arg(long = "reason", short = 'r')]
    pub reason: Option<String>,

    /// Free text note
    #[arg(long = "note", short = 'n')]
    pub note: Option<String>,
}

impl EntryArgs {
    pub fn to_form(&self, clear_times: bool) -> EntryForm {
        let holiday = match (self.holiday, self.no_holiday) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        EntryForm {
            clock_in_1: self.in1.clone(),
            clock_out_1: self.out1.clone(),
            clock_in_2: self.in2.clone(),
            clock_out_2: self.out2.clone(),
            holiday,
            reason: self.reason.clone(),
            note: self.note.clone(),
            clear_times,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the month: totals and one row per calendar day
    List {
        /// Month to show (YYYY-MM), current month by default
        #[arg(long, short)]
        month: Option<String>,

        /// Step one month back from --month (or the current month)
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Step one month forward
        #[arg(long)]
        next: bool,

        /// Print JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Record a day
    Add {
        /// Date of the day (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Change a recorded day
    Edit {
        /// Entry id (see the Id column of `list`)
        id: String,

        /// Move the entry to another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        fields: EntryArgs,

        /// Clear all four times before applying the new ones
        #[arg(long = "clear-times")]
        clear_times: bool,
    },

    /// Delete a recorded day by id
    Del {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Interactive session on one month (keeps local mode entries)
    Shell {
        /// Month to start from (YYYY-MM)
        #[arg(long, short)]
        month: Option<String>,
    },
}

/// Commands read by the interactive shell, one per line.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Show the active month
    #[command(alias = "ls")]
    List,

    /// Previous month
    #[command(alias = "p")]
    Prev,

    /// Next month
    #[command(alias = "n")]
    Next,

    /// Jump to a month (YYYY-MM)
    Goto { month: String },

    /// Record a day
    Add {
        date: String,

        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Change a recorded day
    Edit {
        id: String,

        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        fields: EntryArgs,

        #[arg(long = "clear-times")]
        clear_times: bool,
    },

    /// Delete a recorded day
    Del {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Leave the shell
    #[command(aliases = ["exit", "q"])]
    Quit,
}
