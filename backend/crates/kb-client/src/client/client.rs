use crate::{CliClientResult, ClientError, KanbanApi};

use kb_core::{
    Activity, ActivityFilter, Board, BoardMember, BoardPatch, Card, CardPatch, Collection,
    CollectionPatch, Column, ColumnPatch, NewBoard, NewCard, NewCollection, NewColumn, NewUser,
    User, UserPatch, UserRole,
};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Success envelope returned by every endpoint
#[derive(Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Deserialize)]
struct MarkAllReadResponse {
    updated: usize,
}

/// HTTP client for the kb-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn url(&self, path: &str) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ClientError::url(format!("{}: {}", raw, e)))
    }

    /// Build a request with optional user ID header
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, url);

        if let Some(ref user_id) = self.user_id {
            req = req.header(USER_ID_HEADER, user_id);
        }

        req
    }

    /// Send and unwrap the `{data}` envelope, mapping error bodies to
    /// `ClientError::Api`
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let code = body
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN");
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .or_else(|| status.canonical_reason())
                .unwrap_or("Unknown error");
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        let envelope: DataResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> CliClientResult<T> {
        let req = self.request(Method::GET, self.url(path)?);
        self.execute(req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> CliClientResult<T> {
        let req = self.request(Method::DELETE, self.url(path)?);
        self.execute(req).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> CliClientResult<T> {
        let req = self.request(method, self.url(path)?).json(body);
        self.execute(req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> CliClientResult<T> {
        let req = self.request(Method::POST, self.url(path)?);
        self.execute(req).await
    }
}

fn card_path(board_id: &str, column_id: &str, card_id: &str) -> String {
    format!(
        "/api/boards/{}/columns/{}/cards/{}",
        board_id, column_id, card_id
    )
}

/// Query pairs for the activity feed, omitting unset fields
pub fn activity_query(filter: &ActivityFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(kind) = filter.kind {
        pairs.push(("type", kind.as_str().to_string()));
    }
    if let Some(read) = filter.read {
        pairs.push(("read", read.to_string()));
    }
    if let Some(board_id) = &filter.board_id {
        pairs.push(("boardId", board_id.clone()));
    }
    pairs
}

#[async_trait]
impl KanbanApi for Client {
    // =========================================================================
    // Board Operations
    // =========================================================================

    async fn list_boards(&self) -> CliClientResult<Vec<Board>> {
        self.get("/api/boards").await
    }

    async fn get_board(&self, board_id: &str) -> CliClientResult<Board> {
        self.get(&format!("/api/boards/{}", board_id)).await
    }

    async fn create_board(&self, data: &NewBoard) -> CliClientResult<Board> {
        self.send_json(Method::POST, "/api/boards", data).await
    }

    async fn update_board(&self, board_id: &str, patch: &BoardPatch) -> CliClientResult<Board> {
        self.send_json(Method::PATCH, &format!("/api/boards/{}", board_id), patch)
            .await
    }

    async fn delete_board(&self, board_id: &str) -> CliClientResult<Board> {
        self.delete(&format!("/api/boards/{}", board_id)).await
    }

    async fn list_board_activities(&self, board_id: &str) -> CliClientResult<Vec<Activity>> {
        self.get(&format!("/api/boards/{}/activities", board_id))
            .await
    }

    // =========================================================================
    // Column Operations
    // =========================================================================

    async fn list_columns(&self, board_id: &str) -> CliClientResult<Vec<Column>> {
        self.get(&format!("/api/boards/{}/columns", board_id)).await
    }

    async fn add_column(&self, board_id: &str, data: &NewColumn) -> CliClientResult<Column> {
        self.send_json(
            Method::POST,
            &format!("/api/boards/{}/columns", board_id),
            data,
        )
        .await
    }

    async fn update_column(
        &self,
        board_id: &str,
        column_id: &str,
        patch: &ColumnPatch,
    ) -> CliClientResult<Column> {
        self.send_json(
            Method::PATCH,
            &format!("/api/boards/{}/columns/{}", board_id, column_id),
            patch,
        )
        .await
    }

    async fn delete_column(&self, board_id: &str, column_id: &str) -> CliClientResult<Column> {
        self.delete(&format!("/api/boards/{}/columns/{}", board_id, column_id))
            .await
    }

    // =========================================================================
    // Card Operations
    // =========================================================================

    async fn list_cards(&self, board_id: &str, column_id: &str) -> CliClientResult<Vec<Card>> {
        self.get(&format!(
            "/api/boards/{}/columns/{}/cards",
            board_id, column_id
        ))
        .await
    }

    async fn get_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> CliClientResult<Card> {
        self.get(&card_path(board_id, column_id, card_id)).await
    }

    async fn add_card(
        &self,
        board_id: &str,
        column_id: &str,
        data: &NewCard,
    ) -> CliClientResult<Card> {
        self.send_json(
            Method::POST,
            &format!("/api/boards/{}/columns/{}/cards", board_id, column_id),
            data,
        )
        .await
    }

    async fn update_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
        patch: &CardPatch,
    ) -> CliClientResult<Card> {
        self.send_json(
            Method::PATCH,
            &card_path(board_id, column_id, card_id),
            patch,
        )
        .await
    }

    async fn delete_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> CliClientResult<Card> {
        self.delete(&card_path(board_id, column_id, card_id)).await
    }

    async fn move_card(
        &self,
        board_id: &str,
        source_column_id: &str,
        card_id: &str,
        destination_column_id: &str,
        index: Option<usize>,
    ) -> CliClientResult<Card> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MoveRequest<'a> {
            destination_column_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            index: Option<usize>,
        }

        let body = MoveRequest {
            destination_column_id,
            index,
        };
        let path = format!("{}/move", card_path(board_id, source_column_id, card_id));
        self.send_json(Method::POST, &path, &body).await
    }

    // =========================================================================
    // Member Operations
    // =========================================================================

    async fn list_members(&self, board_id: &str) -> CliClientResult<Vec<BoardMember>> {
        self.get(&format!("/api/boards/{}/members", board_id)).await
    }

    async fn add_member(
        &self,
        board_id: &str,
        email: &str,
        role: Option<UserRole>,
    ) -> CliClientResult<BoardMember> {
        #[derive(Serialize)]
        struct AddMemberRequest<'a> {
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<UserRole>,
        }

        let body = AddMemberRequest { email, role };
        self.send_json(
            Method::POST,
            &format!("/api/boards/{}/members", board_id),
            &body,
        )
        .await
    }

    async fn update_member_role(
        &self,
        board_id: &str,
        member_id: &str,
        role: UserRole,
    ) -> CliClientResult<BoardMember> {
        #[derive(Serialize)]
        struct UpdateMemberRequest {
            role: UserRole,
        }

        self.send_json(
            Method::PATCH,
            &format!("/api/boards/{}/members/{}", board_id, member_id),
            &UpdateMemberRequest { role },
        )
        .await
    }

    async fn remove_member(
        &self,
        board_id: &str,
        member_id: &str,
    ) -> CliClientResult<BoardMember> {
        self.delete(&format!("/api/boards/{}/members/{}", board_id, member_id))
            .await
    }

    // =========================================================================
    // Collection Operations
    // =========================================================================

    async fn list_collections(&self) -> CliClientResult<Vec<Collection>> {
        self.get("/api/collections").await
    }

    async fn get_collection(&self, collection_id: &str) -> CliClientResult<Collection> {
        self.get(&format!("/api/collections/{}", collection_id))
            .await
    }

    async fn create_collection(&self, data: &NewCollection) -> CliClientResult<Collection> {
        self.send_json(Method::POST, "/api/collections", data).await
    }

    async fn update_collection(
        &self,
        collection_id: &str,
        patch: &CollectionPatch,
    ) -> CliClientResult<Collection> {
        self.send_json(
            Method::PATCH,
            &format!("/api/collections/{}", collection_id),
            patch,
        )
        .await
    }

    async fn delete_collection(&self, collection_id: &str) -> CliClientResult<Collection> {
        self.delete(&format!("/api/collections/{}", collection_id))
            .await
    }

    async fn list_collection_boards(&self, collection_id: &str) -> CliClientResult<Vec<Board>> {
        self.get(&format!("/api/collections/{}/boards", collection_id))
            .await
    }

    async fn add_board_to_collection(
        &self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board> {
        self.post_empty(&format!(
            "/api/collections/{}/boards/{}",
            collection_id, board_id
        ))
        .await
    }

    async fn remove_board_from_collection(
        &self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board> {
        self.delete(&format!(
            "/api/collections/{}/boards/{}",
            collection_id, board_id
        ))
        .await
    }

    // =========================================================================
    // Activity Operations
    // =========================================================================

    async fn list_activities(&self, filter: &ActivityFilter) -> CliClientResult<Vec<Activity>> {
        let mut url = self.url("/api/activities")?;
        let pairs = activity_query(filter);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    async fn get_activity(&self, activity_id: &str) -> CliClientResult<Activity> {
        self.get(&format!("/api/activities/{}", activity_id)).await
    }

    async fn mark_as_read(&self, activity_id: &str) -> CliClientResult<Activity> {
        self.post_empty(&format!("/api/activities/{}/read", activity_id))
            .await
    }

    async fn mark_all_as_read(&self) -> CliClientResult<usize> {
        let response: MarkAllReadResponse = self.post_empty("/api/activities/read-all").await?;
        Ok(response.updated)
    }

    async fn toggle_like(&self, activity_id: &str) -> CliClientResult<Activity> {
        self.post_empty(&format!("/api/activities/{}/like", activity_id))
            .await
    }

    async fn add_comment(&self, activity_id: &str, text: &str) -> CliClientResult<Activity> {
        #[derive(Serialize)]
        struct AddCommentRequest<'a> {
            text: &'a str,
        }

        self.send_json(
            Method::POST,
            &format!("/api/activities/{}/comments", activity_id),
            &AddCommentRequest { text },
        )
        .await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    async fn list_users(&self) -> CliClientResult<Vec<User>> {
        self.get("/api/users").await
    }

    async fn get_user(&self, user_id: &str) -> CliClientResult<User> {
        self.get(&format!("/api/users/{}", user_id)).await
    }

    async fn create_user(&self, data: &NewUser) -> CliClientResult<User> {
        self.send_json(Method::POST, "/api/users", data).await
    }

    async fn update_user(&self, user_id: &str, patch: &UserPatch) -> CliClientResult<User> {
        self.send_json(Method::PATCH, &format!("/api/users/{}", user_id), patch)
            .await
    }

    async fn delete_user(&self, user_id: &str) -> CliClientResult<User> {
        self.delete(&format!("/api/users/{}", user_id)).await
    }
}
