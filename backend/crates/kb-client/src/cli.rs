use crate::commands::Commands;

use kb_core::{ActivityType, UserRole};

use clap::Parser;

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Kanban board command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the address in the kb config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// User ID sent as X-User-Id (the server's default user otherwise)
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

pub(crate) fn parse_role(value: &str) -> Result<UserRole, String> {
    value.parse::<UserRole>().map_err(|e| e.to_string())
}

pub(crate) fn parse_activity_type(value: &str) -> Result<ActivityType, String> {
    value.parse::<ActivityType>().map_err(|e| e.to_string())
}
