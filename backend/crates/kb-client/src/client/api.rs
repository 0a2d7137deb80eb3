use crate::CliClientResult;

use kb_core::{
    Activity, ActivityFilter, Board, BoardMember, BoardPatch, Card, CardPatch, Collection,
    CollectionPatch, Column, ColumnPatch, NewBoard, NewCard, NewCollection, NewColumn, NewUser,
    User, UserPatch, UserRole,
};

use async_trait::async_trait;

/// The Kanban REST API as seen by the state layer.
///
/// `Client` talks HTTP; tests substitute their own implementation.
#[async_trait]
pub trait KanbanApi: Send + Sync {
    // Boards
    async fn list_boards(&self) -> CliClientResult<Vec<Board>>;
    async fn get_board(&self, board_id: &str) -> CliClientResult<Board>;
    async fn create_board(&self, data: &NewBoard) -> CliClientResult<Board>;
    async fn update_board(&self, board_id: &str, patch: &BoardPatch) -> CliClientResult<Board>;
    async fn delete_board(&self, board_id: &str) -> CliClientResult<Board>;
    async fn list_board_activities(&self, board_id: &str) -> CliClientResult<Vec<Activity>>;

    // Columns
    async fn list_columns(&self, board_id: &str) -> CliClientResult<Vec<Column>>;
    async fn add_column(&self, board_id: &str, data: &NewColumn) -> CliClientResult<Column>;
    async fn update_column(
        &self,
        board_id: &str,
        column_id: &str,
        patch: &ColumnPatch,
    ) -> CliClientResult<Column>;
    async fn delete_column(&self, board_id: &str, column_id: &str) -> CliClientResult<Column>;

    // Cards
    async fn list_cards(&self, board_id: &str, column_id: &str) -> CliClientResult<Vec<Card>>;
    async fn get_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> CliClientResult<Card>;
    async fn add_card(
        &self,
        board_id: &str,
        column_id: &str,
        data: &NewCard,
    ) -> CliClientResult<Card>;
    async fn update_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
        patch: &CardPatch,
    ) -> CliClientResult<Card>;
    async fn delete_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> CliClientResult<Card>;
    /// Move a card to `destination_column_id`, at `index` or appended.
    async fn move_card(
        &self,
        board_id: &str,
        source_column_id: &str,
        card_id: &str,
        destination_column_id: &str,
        index: Option<usize>,
    ) -> CliClientResult<Card>;

    // Members
    async fn list_members(&self, board_id: &str) -> CliClientResult<Vec<BoardMember>>;
    async fn add_member(
        &self,
        board_id: &str,
        email: &str,
        role: Option<UserRole>,
    ) -> CliClientResult<BoardMember>;
    async fn update_member_role(
        &self,
        board_id: &str,
        member_id: &str,
        role: UserRole,
    ) -> CliClientResult<BoardMember>;
    async fn remove_member(&self, board_id: &str, member_id: &str)
    -> CliClientResult<BoardMember>;

    // Collections
    async fn list_collections(&self) -> CliClientResult<Vec<Collection>>;
    async fn get_collection(&self, collection_id: &str) -> CliClientResult<Collection>;
    async fn create_collection(&self, data: &NewCollection) -> CliClientResult<Collection>;
    async fn update_collection(
        &self,
        collection_id: &str,
        patch: &CollectionPatch,
    ) -> CliClientResult<Collection>;
    async fn delete_collection(&self, collection_id: &str) -> CliClientResult<Collection>;
    async fn list_collection_boards(&self, collection_id: &str) -> CliClientResult<Vec<Board>>;
    async fn add_board_to_collection(
        &self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board>;
    async fn remove_board_from_collection(
        &self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board>;

    // Activities
    async fn list_activities(&self, filter: &ActivityFilter) -> CliClientResult<Vec<Activity>>;
    async fn get_activity(&self, activity_id: &str) -> CliClientResult<Activity>;
    async fn mark_as_read(&self, activity_id: &str) -> CliClientResult<Activity>;
    /// Returns how many activities were unread before the call
    async fn mark_all_as_read(&self) -> CliClientResult<usize>;
    async fn toggle_like(&self, activity_id: &str) -> CliClientResult<Activity>;
    async fn add_comment(&self, activity_id: &str, text: &str) -> CliClientResult<Activity>;

    // Users
    async fn list_users(&self) -> CliClientResult<Vec<User>>;
    async fn get_user(&self, user_id: &str) -> CliClientResult<User>;
    async fn create_user(&self, data: &NewUser) -> CliClientResult<User>;
    async fn update_user(&self, user_id: &str, patch: &UserPatch) -> CliClientResult<User>;
    async fn delete_user(&self, user_id: &str) -> CliClientResult<User>;
}
