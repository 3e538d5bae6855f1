use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourbook.
/// CLI application to track working hours, absences and overtime using SQLite.
#[derive(Parser)]
#[command(
    name = "hourbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working hours and absences, and compute a running overtime balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (default: `default_user` from the config file)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record a time entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Worked hours (decimal, e.g. 8.5)
        hours: f64,

        /// Entry kind: work, break, company, office, warehouse, car,
        /// vacation, sick, holiday, unpaid, overtime_reduction
        #[arg(long = "kind", default_value = "work")]
        kind: String,

        /// Start time "HH:MM" (informational)
        #[arg(long = "start")]
        start: Option<String>,

        /// End time "HH:MM" (informational)
        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Delete a time entry by id
    Del {
        id: i64,
    },

    /// Submit all entries up to and including a date (sets the balance cutoff)
    Submit {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Office confirmation of an entry (required for future overtime reductions)
    Confirm {
        id: i64,
    },

    /// Manage absence periods
    Absence {
        #[command(subcommand)]
        action: AbsenceCommands,
    },

    /// Manage vacation requests
    Request {
        #[command(subcommand)]
        action: RequestCommands,
    },

    /// Show or change per-user accounting settings
    Settings {
        #[arg(long = "show", help = "Print the current settings")]
        show: bool,

        /// Weekly targets Mon..Sun, e.g. "8.5,8.5,8.5,8.5,4.5,0,0"
        #[arg(long = "targets")]
        targets: Option<String>,

        /// Employment start date (YYYY-MM-DD)
        #[arg(long = "start-date")]
        start_date: Option<String>,

        /// Carried-over balance in hours (signed)
        #[arg(long = "initial-balance")]
        initial_balance: Option<f64>,

        #[arg(long = "vacation-days")]
        vacation_days: Option<i64>,

        #[arg(long = "display-name")]
        display_name: Option<String>,
    },

    /// List day summaries for a period (YYYY, YYYY-MM, YYYY-MM-DD or start:end)
    List {
        period: Option<String>,
    },

    /// Month (YYYY-MM) or year (YYYY) report with trend
    Report {
        period: String,

        /// Compute as of this date instead of today (YYYY-MM-DD)
        #[arg(long = "as-of")]
        as_of: Option<String>,
    },

    /// Overtime balance snapshot
    Balance {
        /// Compute as of this date instead of today (YYYY-MM-DD)
        #[arg(long = "as-of")]
        as_of: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export entries to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export: YYYY, YYYY-MM, YYYY-MM-DD, start:end, or "all"
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AbsenceCommands {
    /// Record an absence period
    Add {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day (YYYY-MM-DD)
        end: String,
        /// vacation, sick, holiday or unpaid
        kind: String,
        #[arg(long = "note")]
        note: Option<String>,
    },
    /// Delete an absence period by id
    Del {
        id: i64,
    },
    /// Remove a single day from whichever period covers it
    DelDay {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// List absence periods, with per-year day counts
    List {
        #[arg(long = "year")]
        year: Option<i32>,
    },
}

#[derive(Subcommand)]
pub enum RequestCommands {
    /// File a vacation request
    Add {
        start: String,
        end: String,
        #[arg(long = "note")]
        note: Option<String>,
    },
    /// List vacation requests
    List,
    /// Approve a pending request (creates the vacation period)
    Approve {
        id: i64,
    },
    /// Reject a pending request
    Reject {
        id: i64,
    },
    /// Delete a request
    Del {
        id: i64,
    },
}
