use crate::export::ExportFormat;
use crate::utils::time::slot_value_parser;
use clap::{Parser, Subcommand};

/// Command-line interface definition for otlog
/// CLI application to log overtime work into a CSV file
#[derive(Parser)]
#[command(
    name = "otlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "OT reporting tool: log overtime work by date into a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the CSV data file (useful for tests or a custom location)
    #[arg(global = true, long = "data", value_name = "CSV")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log of operations
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Save the work log for a date (a second save for the same date is recorded as an update)
    Save {
        /// Date of the overtime (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Working description (read from stdin when omitted)
        #[arg(short = 'm', long = "log", help = "Working description")]
        log: Option<String>,

        /// Start time (HH:MM, 30-minute steps from 06:00 to 23:30)
        #[arg(long = "start", value_parser = slot_value_parser, help = "Start time (HH:MM, default from config: 18:00)")]
        start: Option<String>,

        /// End time (HH:MM, 30-minute steps from 06:00 to 23:30)
        #[arg(long = "end", value_parser = slot_value_parser, help = "End time (HH:MM, default from config: 20:00)")]
        end: Option<String>,
    },

    /// Delete the work log of a date
    Del {
        /// Date to delete (YYYY-MM-DD, default: today)
        date: Option<String>,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show saved work logs
    List {
        #[arg(long, short, help = "Filter by year/month/day: YYYY, YYYY-MM or YYYY-MM-DD")]
        period: Option<String>,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export saved work logs (default: work_log.csv in the current directory)
    Export {
        #[arg(long, value_enum, help = "Output format (default: from the file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", default_value = crate::export::DEFAULT_EXPORT_FILE)]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
