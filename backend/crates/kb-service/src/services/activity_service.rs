use crate::services::lookup;
use crate::validation::required_name;
use crate::{Result as ServiceErrorResult, ServiceError};

use kb_config::ValidationConfig;
use kb_core::ids::{COMMENT_ID_PREFIX, new_id};
use kb_core::{Activity, ActivityFilter, ActivityPatch, Comment, UserSummary};
use kb_db::Repositories;

use chrono::Utc;

#[derive(Clone)]
pub struct ActivityService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl ActivityService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    /// Activities matching `filter`, newest first
    pub async fn list(&self, filter: &ActivityFilter) -> ServiceErrorResult<Vec<Activity>> {
        let activities = self.repos.activities.find_all().await?;
        Ok(filter.apply(activities))
    }

    pub async fn list_for_board(&self, board_id: &str) -> ServiceErrorResult<Vec<Activity>> {
        lookup::board(&self.repos, board_id).await?;
        Ok(self.repos.activities.find_by_board(board_id).await?)
    }

    pub async fn get(&self, activity_id: &str) -> ServiceErrorResult<Activity> {
        self.repos
            .activities
            .find_by_id(activity_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::ACTIVITY_NOT_FOUND))
    }

    pub async fn mark_as_read(&self, activity_id: &str) -> ServiceErrorResult<Activity> {
        self.patch(activity_id, ActivityPatch::mark_read()).await
    }

    /// Returns how many activities were unread before the call.
    pub async fn mark_all_as_read(&self) -> ServiceErrorResult<usize> {
        Ok(self.repos.activities.mark_all_read().await?)
    }

    pub async fn toggle_like(&self, activity_id: &str) -> ServiceErrorResult<Activity> {
        self.repos
            .activities
            .toggle_like(activity_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::ACTIVITY_NOT_FOUND))
    }

    pub async fn add_comment(
        &self,
        actor: &UserSummary,
        activity_id: &str,
        text: &str,
    ) -> ServiceErrorResult<Activity> {
        let text = required_name(text, "text", self.limits.max_comment_length)?;
        let comment = Comment {
            id: new_id(COMMENT_ID_PREFIX),
            user: actor.clone(),
            text,
            created_at: Utc::now(),
        };
        self.patch(activity_id, ActivityPatch::comment(comment)).await
    }

    async fn patch(
        &self,
        activity_id: &str,
        patch: ActivityPatch,
    ) -> ServiceErrorResult<Activity> {
        self.repos
            .activities
            .update(activity_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::ACTIVITY_NOT_FOUND))
    }
}
