use async_graphql::SimpleObject;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::constants::HELLO_MESSAGE;

#[derive(Clone, Debug, Serialize, Deserialize, SimpleObject)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
}

impl HelloResponse {
    /// Greeting stamped with the current UTC time, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn now() -> Self {
        HelloResponse {
            message: HELLO_MESSAGE.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
