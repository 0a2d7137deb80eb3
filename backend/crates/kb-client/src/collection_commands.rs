use clap::Subcommand;

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List all collections
    List,
    /// Get a collection
    Get {
        /// Collection ID
        id: String,
    },
    /// Create a collection
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Update a collection
    Update {
        /// Collection ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a collection (its boards are kept)
    Delete {
        /// Collection ID
        id: String,
    },
    /// List boards in a collection
    Boards {
        /// Collection ID
        id: String,
    },
    /// Put a board into a collection
    AddBoard {
        /// Collection ID
        id: String,
        #[arg(long)]
        board_id: String,
    },
    /// Take a board out of a collection
    RemoveBoard {
        /// Collection ID
        id: String,
        #[arg(long)]
        board_id: String,
    },
}
