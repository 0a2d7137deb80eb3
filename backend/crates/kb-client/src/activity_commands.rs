use crate::cli::parse_activity_type;

use kb_core::ActivityType;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List the activity feed, newest first
    List {
        /// card, board, comment, member or other
        #[arg(long = "type", value_parser = parse_activity_type)]
        kind: Option<ActivityType>,
        /// Only read (true) or unread (false) entries
        #[arg(long)]
        read: Option<bool>,
        #[arg(long)]
        board_id: Option<String>,
    },
    /// Get an activity
    Get {
        /// Activity ID
        id: String,
    },
    /// Mark an activity as read
    Read {
        /// Activity ID
        id: String,
    },
    /// Mark every activity as read
    ReadAll,
    /// Like or unlike an activity
    Like {
        /// Activity ID
        id: String,
    },
    /// Comment on an activity
    Comment {
        /// Activity ID
        id: String,
        #[arg(long)]
        text: String,
    },
}
