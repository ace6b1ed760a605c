pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod startup;

pub use crate::core::errors::UsergraphError;
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
