use crate::core::errors::UsergraphError;
use crate::core::models::{User, UserPatch};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

struct UserTable {
    rows: Vec<User>,
    next_id: u64,
}

#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<UserTable>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store pre-populated with `users`, in order. New ids continue after the
    /// largest numeric id among them.
    pub fn with_users(users: Vec<User>) -> Self {
        let highest = users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .max(users.len() as u64);
        InMemoryStorage {
            users: Arc::new(RwLock::new(UserTable {
                rows: users,
                next_id: highest + 1,
            })),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, UsergraphError> {
        let users = self.users.read().await;
        Ok(users.rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UsergraphError> {
        let users = self.users.read().await;
        Ok(users.rows.clone())
    }

    async fn append(&self, name: String, email: String) -> Result<User, UsergraphError> {
        let mut users = self.users.write().await;
        let user = User {
            id: users.next_id.to_string(),
            name,
            email,
        };
        // Ids are never handed out twice, even after the record is deleted.
        users.next_id += 1;
        users.rows.push(user.clone());
        Ok(user)
    }

    async fn replace(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, UsergraphError> {
        let mut users = self.users.write().await;
        let Some(slot) = users.rows.iter_mut().find(|u| u.id == user_id) else {
            return Ok(None);
        };
        let updated = slot.merged(patch);
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn remove_by_id(&self, user_id: &str) -> Result<bool, UsergraphError> {
        let mut users = self.users.write().await;
        let before = users.rows.len();
        users.rows.retain(|u| u.id != user_id);
        Ok(users.rows.len() < before)
    }

    async fn count(&self) -> Result<usize, UsergraphError> {
        Ok(self.users.read().await.rows.len())
    }
}
