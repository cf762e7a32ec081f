use crate::export::{ExportFormat, ReportKind};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rAccessLog
/// CLI application to analyze badge access logs
#[derive(Parser)]
#[command(
    name = "raccesslog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze access-control logs: presence time, late/early arrivals, temperature alerts",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Credentials for the login gate (only checked when auth.required is set)
    #[arg(global = true, long = "login", value_name = "USER:PASSWORD")]
    pub login: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input file and filters shared by every analysis command.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Access log (CSV with User, Department, Door, Card ID, Time, Entry/Exit[, Body Temp])
    #[arg(long, short = 'f', value_name = "CSV")]
    pub file: String,

    /// Only this user ("all" for everyone)
    #[arg(long, short = 'u')]
    pub user: Option<String>,

    /// Only this department ("all" for every department)
    #[arg(long = "dept", short = 'd')]
    pub dept: Option<String>,

    /// Date range: YYYY, YYYY-MM, YYYY-MM-DD or START:END in the same format
    #[arg(long, short = 'r', conflicts_with_all = ["from", "to"])]
    pub range: Option<String>,

    /// First day included (YYYY-MM-DD, default: first day in the log)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day included (YYYY-MM-DD, default: last day in the log)
    #[arg(long)]
    pub to: Option<String>,

    /// Skip malformed rows instead of aborting
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresenceView {
    /// Hours per user/day (2 decimals)
    Trend,
    /// h/m/s per user/day
    Detail,
    /// Hours per user/ISO week
    Weekly,
    /// Every reconstructed entry/exit interval
    Intervals,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlertKind {
    EarlyArrival,
    LateArrival,
    EarlyExit,
    LateDeparture,
    HighTemp,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List users and departments found in the log
    Options {
        #[arg(long, short = 'f', value_name = "CSV")]
        file: String,
    },

    /// Metrics, alert counts and absent users
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Filtered events with policy flags (timeline)
    Events {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Show only flagged events")]
        flagged: bool,
    },

    /// Presence time per user and day
    Presence {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value = "detail")]
        view: PresenceView,
    },

    /// Events breaking the office-hours or temperature policy
    Alerts {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, help = "Only one kind of alert")]
        kind: Option<AlertKind>,
    },

    /// Users of the log with no event in the selection
    Absent {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// First entry and last exit per user
    FirstLast {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Event count per user, day and hour
    Heatmap {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export one report table
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "events")]
        report: ReportKind,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long)]
        force: bool,
    },
}
