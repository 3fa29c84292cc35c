//! CLI argument definitions for the admin console.

use std::path::PathBuf;

use admin_model::{ResourceKind, SortOrder};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "admin",
    version,
    about = "Admin console for cards and users",
    long_about = "List, delete and block or activate cards and users through the admin API.\n\n\
                  Connection settings come from settings.toml, then ADMIN_API_URL /\n\
                  ADMIN_API_TOKEN, then --base-url / --token."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Admin API base URL (overrides settings and ADMIN_API_URL).
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides settings and ADMIN_API_TOKEN).
    #[arg(long = "token", value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one page of a collection.
    List(ListArgs),

    /// Delete a record after confirmation.
    Delete(DeleteArgs),

    /// Block or activate a record after confirmation.
    SetStatus(SetStatusArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Collection to list.
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// 1-based page number.
    #[arg(long = "page", default_value_t = 1)]
    pub page: u32,

    /// Rows per page (defaults to the display setting).
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,

    /// Column to sort by.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort direction for --sort.
    #[arg(long = "order", value_enum, default_value = "asc", requires = "sort")]
    pub order: OrderArg,

    /// Filter text (full name for cards, email for users).
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,

    /// Columns to hide.
    #[arg(long = "hide", value_name = "COLUMN", num_args = 1..)]
    pub hide: Vec<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Collection the record belongs to.
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Record id.
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct SetStatusArgs {
    /// Collection the record belongs to.
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Record id.
    pub id: String,

    /// New status.
    #[arg(value_enum)]
    pub status: StatusArg,

    /// Skip the confirmation prompt.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

/// Collection choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ResourceArg {
    Cards,
    Users,
}

impl From<ResourceArg> for ResourceKind {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Cards => Self::Cards,
            ResourceArg::Users => Self::Users,
        }
    }
}

/// Sort direction choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

/// Status choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Blocked,
}

impl StatusArg {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
