use crate::services::lookup;
use crate::validation::{sanitize_string, validate_email, validate_string};
use crate::{Result as ServiceErrorResult, ServiceError, activity_log};

use kb_config::ValidationConfig;
use kb_core::ids::{MEMBER_ID_PREFIX, new_id};
use kb_core::{BoardMember, BoardPatch, CountedList, UserRole, UserSummary};
use kb_db::Repositories;

use serde::Deserialize;

/// Request to add someone to a board by email
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMember {
    pub email: String,
    /// Defaults to viewer
    pub role: Option<UserRole>,
}

#[derive(Clone)]
pub struct MemberService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl MemberService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list_members(&self, board_id: &str) -> ServiceErrorResult<Vec<BoardMember>> {
        let board = lookup::board(&self.repos, board_id).await?;
        Ok(board.members.items)
    }

    /// Add a member by email. Known users keep their profile; unknown
    /// addresses get a placeholder derived from the email.
    pub async fn add_member(
        &self,
        actor: &UserSummary,
        board_id: &str,
        data: NewMember,
    ) -> ServiceErrorResult<BoardMember> {
        let email = sanitize_string(&data.email);
        validate_string(&email, "email", 1, self.limits.max_name_length)?;
        validate_email(&email)?;

        let board = lookup::board(&self.repos, board_id).await?;
        let already_member = board.members.iter().any(|m| {
            m.email
                .as_deref()
                .is_some_and(|e| e.eq_ignore_ascii_case(&email))
        });
        if already_member {
            return Err(ServiceError::validation(
                format!("{} is already a member of this board", email),
                Some("email"),
            ));
        }

        let mut member = match self.repos.users.find_by_email(&email).await? {
            Some(user) => BoardMember::from(&user),
            None => placeholder_member(&email),
        };
        member.role = data.role.unwrap_or_default();

        let mut members = board.members.clone();
        members.push(member.clone());
        let board = self.save_members(board_id, members).await?;

        self.repos
            .activities
            .create(activity_log::member_added(actor, &board, &member))
            .await?;

        Ok(member)
    }

    pub async fn update_member_role(
        &self,
        actor: &UserSummary,
        board_id: &str,
        member_id: &str,
        role: UserRole,
    ) -> ServiceErrorResult<BoardMember> {
        let board = lookup::board(&self.repos, board_id).await?;

        let mut members = board.members.clone();
        let member = members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| ServiceError::not_found(lookup::MEMBER_NOT_FOUND))?;
        let previous = member.role;
        member.role = role;
        let member = member.clone();

        let board = self.save_members(board_id, members).await?;

        self.repos
            .activities
            .create(activity_log::member_role_changed(
                actor, &board, &member, previous,
            ))
            .await?;

        Ok(member)
    }

    pub async fn remove_member(
        &self,
        actor: &UserSummary,
        board_id: &str,
        member_id: &str,
    ) -> ServiceErrorResult<BoardMember> {
        let board = lookup::board(&self.repos, board_id).await?;

        let mut members = board.members.clone();
        let member = members
            .remove_first(|m| m.id == member_id)
            .ok_or_else(|| ServiceError::not_found(lookup::MEMBER_NOT_FOUND))?;

        let board = self.save_members(board_id, members).await?;

        self.repos
            .activities
            .create(activity_log::member_removed(actor, &board, &member))
            .await?;

        Ok(member)
    }

    async fn save_members(
        &self,
        board_id: &str,
        members: CountedList<BoardMember>,
    ) -> ServiceErrorResult<kb_core::Board> {
        let patch = BoardPatch {
            members: Some(members),
            ..BoardPatch::default()
        };
        self.repos
            .boards
            .update(board_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))
    }
}

fn placeholder_member(email: &str) -> BoardMember {
    let name = email.split('@').next().unwrap_or(email).to_string();
    BoardMember {
        id: new_id(MEMBER_ID_PREFIX),
        initials: name.chars().take(2).collect::<String>().to_uppercase(),
        name,
        email: Some(email.to_string()),
        avatar: None,
        role: UserRole::default(),
    }
}
