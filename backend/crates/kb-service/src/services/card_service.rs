use crate::services::lookup;
use crate::validation::{optional_text, required_name};
use crate::{Result as ServiceErrorResult, ServiceError, activity_log};

use kb_config::ValidationConfig;
use kb_core::{Card, CardPatch, NewCard, UserSummary};
use kb_db::Repositories;

use log::debug;

#[derive(Clone)]
pub struct CardService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl CardService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list_cards(
        &self,
        board_id: &str,
        column_id: &str,
    ) -> ServiceErrorResult<Vec<Card>> {
        let board = lookup::board(&self.repos, board_id).await?;
        Ok(lookup::column(&board, column_id)?.cards.clone())
    }

    pub async fn get_card(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> ServiceErrorResult<Card> {
        let board = lookup::board(&self.repos, board_id).await?;
        let column = lookup::column(&board, column_id)?;
        Ok(lookup::card(column, card_id)?.clone())
    }

    pub async fn add_card(
        &self,
        actor: &UserSummary,
        board_id: &str,
        column_id: &str,
        mut data: NewCard,
    ) -> ServiceErrorResult<Card> {
        data.title = required_name(&data.title, "title", self.limits.max_title_length)?;
        data.description = optional_text(
            &data.description,
            "description",
            self.limits.max_description_length,
        )?;

        let board = lookup::board(&self.repos, board_id).await?;
        let column = lookup::column(&board, column_id)?;

        let card = self
            .repos
            .cards
            .create(board_id, column_id, data)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::COLUMN_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::card_added(actor, &board, column, &card))
            .await?;

        Ok(card)
    }

    /// Apply `patch`. An activity is recorded only when the title changes.
    pub async fn update_card(
        &self,
        actor: &UserSummary,
        board_id: &str,
        column_id: &str,
        card_id: &str,
        mut patch: CardPatch,
    ) -> ServiceErrorResult<Card> {
        if let Some(title) = &patch.title {
            patch.title = Some(required_name(title, "title", self.limits.max_title_length)?);
        }
        if let Some(description) = &patch.description {
            patch.description = Some(optional_text(
                description,
                "description",
                self.limits.max_description_length,
            )?);
        }

        let board = lookup::board(&self.repos, board_id).await?;
        let column = lookup::column(&board, column_id)?;
        let before = lookup::card(column, card_id)?;

        let after = self
            .repos
            .cards
            .update(board_id, column_id, card_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::CARD_NOT_FOUND))?;

        if before.title != after.title {
            self.repos
                .activities
                .create(activity_log::card_renamed(
                    actor, &board, column, before, &after,
                ))
                .await?;
        }

        Ok(after)
    }

    pub async fn delete_card(
        &self,
        actor: &UserSummary,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> ServiceErrorResult<Card> {
        let board = lookup::board(&self.repos, board_id).await?;
        let column = lookup::column(&board, column_id)?;

        let card = self
            .repos
            .cards
            .delete(board_id, column_id, card_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::CARD_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::card_deleted(actor, &board, column, &card))
            .await?;

        Ok(card)
    }

    /// Move a card to `destination_column_id`, at `index` or at the end.
    ///
    /// Source and destination may be the same column, which reorders the
    /// card in place. One card activity is recorded with the source and
    /// destination column names as before/after.
    pub async fn move_card(
        &self,
        actor: &UserSummary,
        board_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        card_id: &str,
        index: Option<usize>,
    ) -> ServiceErrorResult<Card> {
        let board = lookup::board(&self.repos, board_id).await?;
        let source = lookup::column(&board, source_column_id)?;
        let destination = lookup::column(&board, destination_column_id)?;
        lookup::card(source, card_id)?;

        let card = self
            .repos
            .cards
            .move_card(
                board_id,
                card_id,
                source_column_id,
                destination_column_id,
                index,
            )
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::CARD_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::card_moved(
                actor,
                &board,
                source,
                destination,
                &card,
            ))
            .await?;

        debug!(
            "Moved card {} from {} to {}",
            card.id, source.id, destination.id
        );
        Ok(card)
    }
}
