use crate::core::constants::{API_INFO, USER_CREATED, USER_DELETED, USER_UPDATED};
use crate::core::errors::UsergraphError;
use crate::core::models::{HelloResponse, User, UserPatch};
use crate::infrastructure::storage::Storage;
use tracing::{debug, info};

pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        info!("Initializing UserService");
        UserService { storage }
    }

    pub fn info(&self) -> &'static str {
        API_INFO
    }

    pub fn hello(&self) -> HelloResponse {
        HelloResponse::now()
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UsergraphError> {
        let users = self.storage.list_all().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, UsergraphError> {
        let user = self.storage.find_by_id(user_id).await?;
        if user.is_none() {
            debug!("User {} not found", user_id);
        }
        Ok(user)
    }

    pub async fn create_user(&self, name: String, email: String) -> Result<User, UsergraphError> {
        let user = self.storage.append(name, email).await?;
        info!(action = USER_CREATED, user_id = %user.id, "Created user {}", user.email);
        Ok(user)
    }

    /// Returns `None` when no user has `user_id`; that is not an error.
    pub async fn update_user(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, UsergraphError> {
        if patch.is_empty() {
            debug!("Update for user {} carries no fields", user_id);
        }
        let updated = self.storage.replace(user_id, patch).await?;
        match &updated {
            Some(user) => info!(action = USER_UPDATED, user_id = %user.id, "Updated user"),
            None => debug!("Update skipped, user {} not found", user_id),
        }
        Ok(updated)
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<bool, UsergraphError> {
        let removed = self.storage.remove_by_id(user_id).await?;
        if removed {
            info!(action = USER_DELETED, user_id = %user_id, "Deleted user");
        } else {
            debug!("Delete skipped, user {} not found", user_id);
        }
        Ok(removed)
    }

    pub async fn user_count(&self) -> Result<usize, UsergraphError> {
        self.storage.count().await
    }
}
