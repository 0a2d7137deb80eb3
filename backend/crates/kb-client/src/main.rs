//! kb - Kanban board CLI
//!
//! # Examples
//!
//! ```bash
//! # List all boards
//! kb board list --pretty
//!
//! # Add a card
//! kb card add --board-id <id> --column-id <id> --title "Write tests"
//!
//! # Move it to another column, first position
//! kb card move <card-id> --board-id <id> --column-id <id> --to <column-id> --index 0
//! ```

mod activity_commands;
mod board_commands;
mod card_commands;
mod cli;
mod collection_commands;
mod column_commands;
mod commands;
mod member_commands;
mod user_commands;

use crate::{
    activity_commands::ActivityCommands, board_commands::BoardCommands,
    card_commands::CardCommands, cli::Cli, collection_commands::CollectionCommands,
    column_commands::ColumnCommands, commands::Commands, member_commands::MemberCommands,
    user_commands::UserCommands,
};

use kb_client::{CliClientResult, Client, KanbanApi};
use kb_core::{
    ActivityFilter, BoardPatch, CardPatch, CollectionPatch, ColumnPatch, NewBoard, NewCard,
    NewCollection, NewColumn, NewUser, UserPatch,
};

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::{Value, json};

const FALLBACK_SERVER_URL: &str = "http://127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flag > kb config > fallback
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url, cli.user_id.as_deref());

    let result = match cli.command {
        Commands::Board { action } => run_board(&client, action).await,
        Commands::Column { action } => run_column(&client, action).await,
        Commands::Card { action } => run_card(&client, action).await,
        Commands::Member { action } => run_member(&client, action).await,
        Commands::Collection { action } => run_collection(&client, action).await,
        Commands::Activity { action } => run_activity(&client, action).await,
        Commands::User { action } => run_user(&client, action).await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn to_value<T: Serialize>(value: T) -> CliClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}

async fn run_board(client: &Client, action: BoardCommands) -> CliClientResult<Value> {
    match action {
        BoardCommands::List => to_value(client.list_boards().await?),
        BoardCommands::Get { id } => to_value(client.get_board(&id).await?),
        BoardCommands::Create {
            name,
            description,
            color,
        } => {
            let data = NewBoard {
                description: description.unwrap_or_default(),
                color: color.unwrap_or_default(),
                ..NewBoard::named(name)
            };
            to_value(client.create_board(&data).await?)
        }
        BoardCommands::Update {
            id,
            name,
            description,
            color,
        } => {
            let patch = BoardPatch {
                name,
                description,
                color,
                ..BoardPatch::default()
            };
            to_value(client.update_board(&id, &patch).await?)
        }
        BoardCommands::Delete { id } => to_value(client.delete_board(&id).await?),
        BoardCommands::Activities { id } => to_value(client.list_board_activities(&id).await?),
    }
}

async fn run_column(client: &Client, action: ColumnCommands) -> CliClientResult<Value> {
    match action {
        ColumnCommands::List { board_id } => to_value(client.list_columns(&board_id).await?),
        ColumnCommands::Add { board_id, name } => {
            to_value(client.add_column(&board_id, &NewColumn::named(name)).await?)
        }
        ColumnCommands::Rename { board_id, id, name } => to_value(
            client
                .update_column(&board_id, &id, &ColumnPatch::renamed(name))
                .await?,
        ),
        ColumnCommands::Delete { board_id, id } => {
            to_value(client.delete_column(&board_id, &id).await?)
        }
    }
}

async fn run_card(client: &Client, action: CardCommands) -> CliClientResult<Value> {
    match action {
        CardCommands::List {
            board_id,
            column_id,
        } => to_value(client.list_cards(&board_id, &column_id).await?),
        CardCommands::Get {
            board_id,
            column_id,
            id,
        } => to_value(client.get_card(&board_id, &column_id, &id).await?),
        CardCommands::Add {
            board_id,
            column_id,
            title,
            description,
            due_date,
        } => {
            let data = NewCard {
                description: description.unwrap_or_default(),
                due_date,
                ..NewCard::titled(title)
            };
            to_value(client.add_card(&board_id, &column_id, &data).await?)
        }
        CardCommands::Update {
            board_id,
            column_id,
            id,
            title,
            description,
            due_date,
        } => {
            let patch = CardPatch {
                title,
                description,
                due_date,
                ..CardPatch::default()
            };
            to_value(
                client
                    .update_card(&board_id, &column_id, &id, &patch)
                    .await?,
            )
        }
        CardCommands::Delete {
            board_id,
            column_id,
            id,
        } => to_value(client.delete_card(&board_id, &column_id, &id).await?),
        CardCommands::Move {
            board_id,
            column_id,
            id,
            to,
            index,
        } => to_value(
            client
                .move_card(&board_id, &column_id, &id, &to, index)
                .await?,
        ),
    }
}

async fn run_member(client: &Client, action: MemberCommands) -> CliClientResult<Value> {
    match action {
        MemberCommands::List { board_id } => to_value(client.list_members(&board_id).await?),
        MemberCommands::Add {
            board_id,
            email,
            role,
        } => to_value(client.add_member(&board_id, &email, role).await?),
        MemberCommands::Role { board_id, id, role } => {
            to_value(client.update_member_role(&board_id, &id, role).await?)
        }
        MemberCommands::Remove { board_id, id } => {
            to_value(client.remove_member(&board_id, &id).await?)
        }
    }
}

async fn run_collection(client: &Client, action: CollectionCommands) -> CliClientResult<Value> {
    match action {
        CollectionCommands::List => to_value(client.list_collections().await?),
        CollectionCommands::Get { id } => to_value(client.get_collection(&id).await?),
        CollectionCommands::Create {
            name,
            description,
            color,
            icon,
        } => {
            let data = NewCollection {
                description,
                color: color.unwrap_or_default(),
                icon,
                ..NewCollection::named(name)
            };
            to_value(client.create_collection(&data).await?)
        }
        CollectionCommands::Update {
            id,
            name,
            description,
            color,
            icon,
        } => {
            let patch = CollectionPatch {
                name,
                description,
                color,
                icon,
            };
            to_value(client.update_collection(&id, &patch).await?)
        }
        CollectionCommands::Delete { id } => to_value(client.delete_collection(&id).await?),
        CollectionCommands::Boards { id } => to_value(client.list_collection_boards(&id).await?),
        CollectionCommands::AddBoard { id, board_id } => {
            to_value(client.add_board_to_collection(&id, &board_id).await?)
        }
        CollectionCommands::RemoveBoard { id, board_id } => {
            to_value(client.remove_board_from_collection(&id, &board_id).await?)
        }
    }
}

async fn run_activity(client: &Client, action: ActivityCommands) -> CliClientResult<Value> {
    match action {
        ActivityCommands::List {
            kind,
            read,
            board_id,
        } => {
            let filter = ActivityFilter {
                kind,
                read,
                board_id,
            };
            to_value(client.list_activities(&filter).await?)
        }
        ActivityCommands::Get { id } => to_value(client.get_activity(&id).await?),
        ActivityCommands::Read { id } => to_value(client.mark_as_read(&id).await?),
        ActivityCommands::ReadAll => {
            let updated = client.mark_all_as_read().await?;
            Ok(json!({ "updated": updated }))
        }
        ActivityCommands::Like { id } => to_value(client.toggle_like(&id).await?),
        ActivityCommands::Comment { id, text } => to_value(client.add_comment(&id, &text).await?),
    }
}

async fn run_user(client: &Client, action: UserCommands) -> CliClientResult<Value> {
    match action {
        UserCommands::List => to_value(client.list_users().await?),
        UserCommands::Get { id } => to_value(client.get_user(&id).await?),
        UserCommands::Create { name, email, role } => {
            let data = NewUser {
                name,
                email,
                role: role.unwrap_or_default(),
                ..NewUser::default()
            };
            to_value(client.create_user(&data).await?)
        }
        UserCommands::Update {
            id,
            name,
            email,
            role,
        } => {
            let patch = UserPatch {
                name,
                email,
                role,
                ..UserPatch::default()
            };
            to_value(client.update_user(&id, &patch).await?)
        }
        UserCommands::Delete { id } => to_value(client.delete_user(&id).await?),
    }
}

fn discover_server_url() -> String {
    match kb_config::Config::load() {
        Ok(config) => format!("http://{}", config.bind_addr()),
        Err(e) => {
            eprintln!("Warning: could not read kb config ({}), using {}", e, FALLBACK_SERVER_URL);
            FALLBACK_SERVER_URL.to_string()
        }
    }
}
