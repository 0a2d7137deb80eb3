use crate::ids::{ACTIVITY_ID_PREFIX, new_id};
use crate::{Activity, ActivityType, Comment, UserSummary};

use chrono::Utc;

/// An activity before the store stamps its id and timestamp
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub user: UserSummary,
    pub action: String,
    pub kind: ActivityType,
    pub board_id: Option<String>,
    pub board_name: Option<String>,
    pub column_id: Option<String>,
    pub column_name: Option<String>,
    pub card_id: Option<String>,
    pub card_name: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl NewActivity {
    pub fn new(user: UserSummary, kind: ActivityType, action: impl Into<String>) -> Self {
        Self {
            user,
            action: action.into(),
            kind,
            board_id: None,
            board_name: None,
            column_id: None,
            column_name: None,
            card_id: None,
            card_name: None,
            before: None,
            after: None,
        }
    }

    pub fn board(mut self, id: &str, name: &str) -> Self {
        self.board_id = Some(id.to_string());
        self.board_name = Some(name.to_string());
        self
    }

    pub fn column(mut self, id: &str, name: &str) -> Self {
        self.column_id = Some(id.to_string());
        self.column_name = Some(name.to_string());
        self
    }

    pub fn card(mut self, id: &str, name: &str) -> Self {
        self.card_id = Some(id.to_string());
        self.card_name = Some(name.to_string());
        self
    }

    pub fn change(mut self, before: &str, after: &str) -> Self {
        self.before = Some(before.to_string());
        self.after = Some(after.to_string());
        self
    }

    pub fn into_activity(self) -> Activity {
        Activity {
            id: new_id(ACTIVITY_ID_PREFIX),
            user: self.user,
            action: self.action,
            timestamp: Utc::now(),
            board_id: self.board_id,
            board_name: self.board_name,
            column_id: self.column_id,
            column_name: self.column_name,
            card_id: self.card_id,
            card_name: self.card_name,
            before: self.before,
            after: self.after,
            kind: self.kind,
            read: false,
            liked: false,
            comments: Vec::new(),
        }
    }
}

/// Mutable activity state. Everything else about an activity is fixed.
#[derive(Debug, Clone, Default)]
pub struct ActivityPatch {
    pub read: Option<bool>,
    pub liked: Option<bool>,
    pub append_comment: Option<Comment>,
}

impl ActivityPatch {
    pub fn mark_read() -> Self {
        Self {
            read: Some(true),
            ..Self::default()
        }
    }

    pub fn liked(liked: bool) -> Self {
        Self {
            liked: Some(liked),
            ..Self::default()
        }
    }

    pub fn comment(comment: Comment) -> Self {
        Self {
            append_comment: Some(comment),
            ..Self::default()
        }
    }

    pub fn apply_to(self, activity: &mut Activity) {
        if let Some(read) = self.read {
            activity.read = read;
        }
        if let Some(liked) = self.liked {
            activity.liked = liked;
        }
        if let Some(comment) = self.append_comment {
            activity.comments.push(comment);
        }
    }
}
