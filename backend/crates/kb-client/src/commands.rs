use crate::{
    activity_commands::ActivityCommands, board_commands::BoardCommands,
    card_commands::CardCommands, collection_commands::CollectionCommands,
    column_commands::ColumnCommands, member_commands::MemberCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Column operations
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Card operations
    Card {
        #[command(subcommand)]
        action: CardCommands,
    },

    /// Board member operations
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },

    /// Collection operations
    Collection {
        #[command(subcommand)]
        action: CollectionCommands,
    },

    /// Activity feed operations
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
