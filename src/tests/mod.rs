mod config_tests;

use std::sync::Arc;

use crate::api::schema::{AppService, AppSchema, build_schema};
use crate::core::constants::DEMO_USERS;
use crate::core::models::User;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// John Doe, Jane Smith and Bob Johnson with ids "1" to "3".
pub fn seeded_users() -> Vec<User> {
    DEMO_USERS
        .iter()
        .map(|(id, name, email)| User::new(*id, *name, *email))
        .collect()
}

pub fn create_test_storage() -> InMemoryStorage {
    InMemoryStorage::with_users(seeded_users())
}

pub fn create_test_service() -> AppService {
    init_tracing();
    Arc::new(UserService::new(create_test_storage()))
}

pub fn create_test_schema() -> (AppSchema, AppService) {
    let service = create_test_service();
    (build_schema(service.clone()), service)
}
