//! API Configuration
//!
//! Where the `/foods` backend lives.

/// Backend base URL used when `FOOD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// REST backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server base URL (e.g., "http://localhost:3333")
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Configuration baked in at compile time
    pub fn from_env() -> Self {
        option_env!("FOOD_API_URL").map(Self::new).unwrap_or_default()
    }

    /// Join a resource path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
