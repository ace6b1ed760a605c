use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub environment: Environment,
    pub api_base_url: String,
    pub seed_demo_data: bool,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; missing or unparseable
    /// values fall back to defaults. `NODE_ENV` and `NUXT_PUBLIC_API_BASE` are
    /// read when `APP_ENV` and `PUBLIC_API_BASE` are unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            environment: lookup("APP_ENV")
                .or_else(|| lookup("NODE_ENV"))
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Development),
            api_base_url: lookup("PUBLIC_API_BASE")
                .or_else(|| lookup("NUXT_PUBLIC_API_BASE"))
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            seed_demo_data: lookup("SEED_DEMO_DATA").and_then(|v| v.parse().ok()).unwrap_or(true),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
