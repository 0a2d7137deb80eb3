use crate::cli::parse_role;

use kb_core::UserRole;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,
    /// Get a user
    Get {
        /// User ID
        id: String,
    },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
    },
    /// Update a user
    Update {
        /// User ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}
