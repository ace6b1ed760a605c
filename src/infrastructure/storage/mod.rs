use crate::core::errors::UsergraphError;
use crate::core::models::{User, UserPatch};
use async_trait::async_trait;

/// Ordered collection of user records. Every method runs to completion as a
/// single step; callers never observe a half-applied write.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, UsergraphError>;
    async fn list_all(&self) -> Result<Vec<User>, UsergraphError>;
    async fn append(&self, name: String, email: String) -> Result<User, UsergraphError>;
    async fn replace(&self, user_id: &str, patch: UserPatch) -> Result<Option<User>, UsergraphError>;
    async fn remove_by_id(&self, user_id: &str) -> Result<bool, UsergraphError>;
    async fn count(&self) -> Result<usize, UsergraphError>;
}

pub mod in_memory;
