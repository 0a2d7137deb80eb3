use kb_core::{
    ActivityType, Board, NewActivity, NewBoard, NewCard, NewColumn, UserSummary,
};
use kb_db::{MemoryStore, Repositories};

/// Empty store plus repositories over it
pub fn create_test_repositories() -> (MemoryStore, Repositories) {
    let store = MemoryStore::new();
    let repos = Repositories::in_memory(&store);
    (store, repos)
}

/// "To Do" = [X, Y], "Doing" = []
pub fn create_test_board_input() -> NewBoard {
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
}

pub async fn create_test_board(repos: &Repositories) -> Board {
    repos.boards.create(create_test_board_input()).await.unwrap()
}

pub fn test_actor() -> UserSummary {
    UserSummary::new("Test User", "TU").with_id("user-test")
}

pub fn test_activity(board: &Board, action: &str) -> NewActivity {
    NewActivity::new(test_actor(), ActivityType::Board, action).board(&board.id, &board.name)
}

pub fn titles(board: &Board, column_index: usize) -> Vec<String> {
    board.columns[column_index]
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}
