use crate::{CliClientResult, KanbanApi};

use kb_core::{Activity, ActivityFilter};

use std::sync::Arc;

use log::warn;

/// Local copy of the activity feed.
///
/// The full feed is fetched once; filtering is a projection over it and
/// never drops entries. Read and like changes are sent to the server and
/// mirrored here when they succeed.
pub struct NotificationFeed {
    api: Arc<dyn KanbanApi>,
    activities: Vec<Activity>,
    filter: ActivityFilter,
    error: Option<String>,
}

impl NotificationFeed {
    pub fn new(api: Arc<dyn KanbanApi>) -> Self {
        Self {
            api,
            activities: Vec::new(),
            filter: ActivityFilter::default(),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> &ActivityFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ActivityFilter) {
        self.filter = filter;
    }

    /// Everything loaded, newest first
    pub fn all(&self) -> &[Activity] {
        &self.activities
    }

    /// Entries passing the current filter, newest first
    pub fn visible(&self) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| self.filter.matches(a))
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.activities.iter().filter(|a| !a.read).count()
    }

    pub async fn load(&mut self) -> CliClientResult<()> {
        match self.api.list_activities(&ActivityFilter::default()).await {
            Ok(mut activities) => {
                activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                self.activities = activities;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load activities: {}", e);
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    pub async fn mark_as_read(&mut self, activity_id: &str) -> CliClientResult<Activity> {
        let activity = self.api.mark_as_read(activity_id).await?;
        self.replace(&activity);
        Ok(activity)
    }

    /// Returns how many were unread on the server
    pub async fn mark_all_as_read(&mut self) -> CliClientResult<usize> {
        let updated = self.api.mark_all_as_read().await?;
        for activity in &mut self.activities {
            activity.read = true;
        }
        Ok(updated)
    }

    pub async fn toggle_like(&mut self, activity_id: &str) -> CliClientResult<Activity> {
        let activity = self.api.toggle_like(activity_id).await?;
        self.replace(&activity);
        Ok(activity)
    }

    pub async fn add_comment(
        &mut self,
        activity_id: &str,
        text: &str,
    ) -> CliClientResult<Activity> {
        let activity = self.api.add_comment(activity_id, text).await?;
        self.replace(&activity);
        Ok(activity)
    }

    fn replace(&mut self, activity: &Activity) {
        if let Some(existing) = self.activities.iter_mut().find(|a| a.id == activity.id) {
            *existing = activity.clone();
        }
    }
}
