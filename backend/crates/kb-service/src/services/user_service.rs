use crate::services::lookup;
use crate::validation::{required_name, sanitize_string, validate_email};
use crate::{Result as ServiceErrorResult, ServiceError};

use kb_config::ValidationConfig;
use kb_core::{NewUser, User, UserPatch};
use kb_db::Repositories;

#[derive(Clone)]
pub struct UserService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl UserService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list(&self) -> ServiceErrorResult<Vec<User>> {
        Ok(self.repos.users.find_all().await?)
    }

    pub async fn get(&self, user_id: &str) -> ServiceErrorResult<User> {
        self.repos
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::USER_NOT_FOUND))
    }

    pub async fn create(&self, mut data: NewUser) -> ServiceErrorResult<User> {
        data.name = required_name(&data.name, "name", self.limits.max_name_length)?;
        if let Some(email) = &data.email {
            let email = sanitize_string(email);
            validate_email(&email)?;
            self.ensure_email_free(&email, None).await?;
            data.email = Some(email);
        }

        Ok(self.repos.users.create(data).await?)
    }

    pub async fn update(&self, user_id: &str, mut patch: UserPatch) -> ServiceErrorResult<User> {
        if let Some(name) = &patch.name {
            patch.name = Some(required_name(name, "name", self.limits.max_name_length)?);
        }
        if let Some(email) = &patch.email {
            let email = sanitize_string(email);
            validate_email(&email)?;
            self.ensure_email_free(&email, Some(user_id)).await?;
            patch.email = Some(email);
        }

        self.repos
            .users
            .update(user_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::USER_NOT_FOUND))
    }

    pub async fn delete(&self, user_id: &str) -> ServiceErrorResult<User> {
        self.repos
            .users
            .delete(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::USER_NOT_FOUND))
    }

    async fn ensure_email_free(
        &self,
        email: &str,
        owner_id: Option<&str>,
    ) -> ServiceErrorResult<()> {
        match self.repos.users.find_by_email(email).await? {
            Some(existing) if Some(existing.id.as_str()) != owner_id => {
                Err(ServiceError::validation(
                    format!("Email {} is already in use", email),
                    Some("email"),
                ))
            }
            _ => Ok(()),
        }
    }
}
