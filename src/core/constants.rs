pub const API_INFO: &str = "GraphQL API for Nuxt Application";
pub const HELLO_MESSAGE: &str = "Hello World from GraphQL!";
pub const BACKEND_HELLO_MESSAGE: &str = "Hello World from Nuxt Backend";

// Service log actions
pub const USER_CREATED: &str = "USER_CREATED";
pub const USER_UPDATED: &str = "USER_UPDATED";
pub const USER_DELETED: &str = "USER_DELETED";

/// Records loaded into the store at startup unless seeding is disabled.
pub const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("1", "John Doe", "john@example.com"),
    ("2", "Jane Smith", "jane@example.com"),
    ("3", "Bob Johnson", "bob@example.com"),
];
