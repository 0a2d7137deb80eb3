use crate::ids::{USER_ID_PREFIX, new_id};
use crate::{User, UserRole, initials_for};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    /// Derived from `name` when absent
    pub initials: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    pub fn into_user(self) -> User {
        let initials = self
            .initials
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| initials_for(&self.name));
        User {
            id: new_id(USER_ID_PREFIX),
            name: self.name,
            email: self.email,
            initials,
            avatar: self.avatar,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub initials: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<UserRole>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = Some(email);
        }
        if let Some(initials) = self.initials {
            user.initials = initials;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}
