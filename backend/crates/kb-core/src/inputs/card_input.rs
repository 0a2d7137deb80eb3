use crate::ids::{CARD_ID_PREFIX, new_id};
use crate::{Attachment, Card, CountedList, Label, UserSummary};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCard {
    pub title: String,
    pub description: String,
    pub labels: Vec<Label>,
    pub due_date: Option<String>,
    pub members: Vec<UserSummary>,
    pub attachments: CountedList<Attachment>,
    pub comments: u32,
}

impl NewCard {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn into_card(self, column_id: &str) -> Card {
        Card {
            id: new_id(CARD_ID_PREFIX),
            title: self.title,
            description: self.description,
            labels: self.labels,
            due_date: self.due_date,
            members: self.members,
            attachments: self.attachments,
            comments: self.comments,
            column_id: column_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub labels: Option<Vec<Label>>,
    pub due_date: Option<String>,
    pub members: Option<Vec<UserSummary>>,
    pub attachments: Option<CountedList<Attachment>>,
    pub comments: Option<u32>,
}

impl CardPatch {
    pub fn retitled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(self, card: &mut Card) {
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(labels) = self.labels {
            card.labels = labels;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = Some(due_date);
        }
        if let Some(members) = self.members {
            card.members = members;
        }
        if let Some(attachments) = self.attachments {
            card.attachments = attachments;
        }
        if let Some(comments) = self.comments {
            card.comments = comments;
        }
    }
}
