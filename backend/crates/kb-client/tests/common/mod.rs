#![allow(dead_code)]

use kb_client::{Client, KanbanApi};
use kb_core::{
    Activity, ActivityType, Board, NewActivity, NewBoard, NewCard, NewColumn, UserSummary,
};

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Mock server plus a client pointed at it
pub struct TestServer {
    pub server: MockServer,
    pub client: Client,
}

impl TestServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = Client::new(&server.uri(), Some("user-test"));
        Self { server, client }
    }

    pub fn api(&self) -> Arc<dyn KanbanApi> {
        Arc::new(self.client.clone())
    }
}

/// "To Do" = [X, Y], "Doing" = []
pub fn sample_board() -> Board {
    NewBoard {
        columns: vec![
            NewColumn {
                name: "To Do".to_string(),
                cards: vec![NewCard::titled("X"), NewCard::titled("Y")],
            },
            NewColumn::named("Doing"),
        ],
        ..NewBoard::named("Sprint Board")
    }
    .into_board()
}

pub fn titles(board: &Board, column_index: usize) -> Vec<String> {
    board.columns[column_index]
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

/// Activity stamped `minutes_ago` minutes in the past
pub fn activity(kind: ActivityType, board_id: &str, minutes_ago: i64) -> Activity {
    let mut activity = NewActivity::new(
        UserSummary::new("Test User", "TU").with_id("user-test"),
        kind,
        format!("did something {} minutes ago", minutes_ago),
    )
    .board(board_id, "Sprint Board")
    .into_activity();
    activity.timestamp = Utc::now() - TimeDelta::minutes(minutes_ago);
    activity
}

pub fn data<T: Serialize>(value: &T) -> Value {
    json!({ "data": value })
}

pub fn error_body(message: &str, code: &str) -> Value {
    json!({ "error": message, "code": code })
}
