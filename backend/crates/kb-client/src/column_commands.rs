use clap::Subcommand;

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// List columns on a board
    List {
        #[arg(long)]
        board_id: String,
    },
    /// Add a column at the end of a board
    Add {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        name: String,
    },
    /// Rename a column
    Rename {
        #[arg(long)]
        board_id: String,
        /// Column ID
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a column and its cards
    Delete {
        #[arg(long)]
        board_id: String,
        /// Column ID
        id: String,
    },
}
