use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{NewUser, User, UserPatch};

use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> DbErrorResult<Vec<User>>;

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>>;

    /// Case-insensitive email lookup
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn create(&self, user: NewUser) -> DbErrorResult<User>;

    async fn update(&self, id: &str, patch: UserPatch) -> DbErrorResult<Option<User>>;

    async fn delete(&self, id: &str) -> DbErrorResult<Option<User>>;
}

pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        Ok(self.store.read().await.users.clone())
    }

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>> {
        let data = self.store.read().await;
        Ok(data.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let data = self.store.read().await;
        Ok(data
            .users
            .iter()
            .find(|u| {
                u.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .cloned())
    }

    async fn create(&self, user: NewUser) -> DbErrorResult<User> {
        let user = user.into_user();
        self.store.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> DbErrorResult<Option<User>> {
        let mut data = self.store.write().await;
        let Some(user) = data.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        patch.apply_to(user);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> DbErrorResult<Option<User>> {
        let mut data = self.store.write().await;
        let Some(index) = data.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.users.remove(index)))
    }
}
