#![allow(dead_code)]

use kb_config::ValidationConfig;
use kb_core::{Activity, Board, NewBoard, NewCard, NewColumn, UserSummary};
use kb_db::{MemoryStore, Repositories};
use kb_service::Services;

pub struct TestContext {
    pub store: MemoryStore,
    pub repos: Repositories,
    pub services: Services,
    pub actor: UserSummary,
}

impl TestContext {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let repos = Repositories::in_memory(&store);
        let services = Services::new(repos.clone(), ValidationConfig::default());
        Self {
            store,
            repos,
            services,
            actor: UserSummary::new("Test User", "TU").with_id("user-test"),
        }
    }

    /// Board with "To Do" = [X, Y] and "Doing" = [], created straight in
    /// the store so no activity is recorded.
    pub async fn board(&self) -> Board {
        self.repos
            .boards
            .create(NewBoard {
                columns: vec![
                    NewColumn {
                        name: "To Do".to_string(),
                        cards: vec![NewCard::titled("X"), NewCard::titled("Y")],
                    },
                    NewColumn::named("Doing"),
                ],
                ..NewBoard::named("Sprint Board")
            })
            .await
            .unwrap()
    }

    pub async fn reload(&self, board: &Board) -> Board {
        self.repos
            .boards
            .find_by_id(&board.id)
            .await
            .unwrap()
            .unwrap()
    }

    pub async fn activities(&self) -> Vec<Activity> {
        self.repos.activities.find_all().await.unwrap()
    }
}

pub fn titles(board: &Board, column_index: usize) -> Vec<String> {
    board.columns[column_index]
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}
