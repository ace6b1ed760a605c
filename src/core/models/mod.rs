pub mod hello;
pub mod user;

pub use hello::HelloResponse;
pub use user::{User, UserPatch};
