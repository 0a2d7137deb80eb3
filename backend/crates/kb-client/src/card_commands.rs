use clap::Subcommand;

#[derive(Subcommand)]
pub enum CardCommands {
    /// List cards in a column
    List {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        column_id: String,
    },
    /// Get a card
    Get {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        column_id: String,
        /// Card ID
        id: String,
    },
    /// Add a card at the end of a column
    Add {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        column_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Update a card
    Update {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        column_id: String,
        /// Card ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Delete a card
    Delete {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        column_id: String,
        /// Card ID
        id: String,
    },
    /// Move a card to another column, or to another position in its own
    Move {
        #[arg(long)]
        board_id: String,
        /// Column the card is in now
        #[arg(long)]
        column_id: String,
        /// Card ID
        id: String,
        /// Destination column ID
        #[arg(long)]
        to: String,
        /// Position in the destination (appended when omitted)
        #[arg(long)]
        index: Option<usize>,
    },
}
