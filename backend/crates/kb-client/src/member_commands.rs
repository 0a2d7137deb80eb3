use crate::cli::parse_role;

use kb_core::UserRole;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List members of a board
    List {
        #[arg(long)]
        board_id: String,
    },
    /// Add a member by email
    Add {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        email: String,
        /// admin, editor or viewer (default: viewer)
        #[arg(long, value_parser = parse_role)]
        role: Option<UserRole>,
    },
    /// Change a member's role
    Role {
        #[arg(long)]
        board_id: String,
        /// Member ID
        id: String,
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
    },
    /// Remove a member from a board
    Remove {
        #[arg(long)]
        board_id: String,
        /// Member ID
        id: String,
    },
}
