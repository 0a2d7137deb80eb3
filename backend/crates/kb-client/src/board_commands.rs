use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// List all boards
    List,
    /// Get a board with its columns and cards
    Get {
        /// Board ID
        id: String,
    },
    /// Create a board
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a board
    Update {
        /// Board ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a board and everything on it
    Delete {
        /// Board ID
        id: String,
    },
    /// Activity recorded for a board, newest first
    Activities {
        /// Board ID
        id: String,
    },
}
