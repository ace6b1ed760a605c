//! Statically declared GraphQL schema. Each field is a typed resolver that
//! forwards to [`UserService`]; argument shapes are checked by the executor
//! before any resolver runs.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Result, Schema};

use crate::core::errors::UsergraphError;
use crate::core::models::{HelloResponse, User, UserPatch};
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub type AppService = Arc<UserService<InMemoryStorage>>;
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(service: AppService) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

fn service<'a>(ctx: &Context<'a>) -> Result<&'a AppService> {
    ctx.data::<AppService>()
        .map_err(|e| UsergraphError::InternalServerError(e.message).extend())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn info(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        Ok(Some(service(ctx)?.info().to_string()))
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        service(ctx)?.list_users().await.map_err(|e| e.extend())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        service(ctx)?.get_user(&id).await.map_err(|e| e.extend())
    }

    async fn hello(&self, ctx: &Context<'_>) -> Result<HelloResponse> {
        Ok(service(ctx)?.hello())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, name: String, email: String) -> Result<User> {
        service(ctx)?.create_user(name, email).await.map_err(|e| e.extend())
    }

    /// Fields left out (or sent as null) keep their current value.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<User>> {
        service(ctx)?
            .update_user(&id, UserPatch { name, email })
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        service(ctx)?.delete_user(&id).await.map_err(|e| e.extend())
    }
}
