use gloo::storage::{LocalStorage, Storage};
use shared::DisplayConfig;

/// Where the API lives when `CRM_API_BASE_URL` is not set at build time
const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_LOG_FILTER: &str = "info";
/// localStorage key the login page writes the API token to
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub auth_token: Option<String>,
    /// `EnvFilter` directive, e.g. `info` or `domain=debug,info`
    pub log_filter: String,
    pub display: DisplayConfig,
}

impl ClientConfig {
    pub fn load() -> Self {
        Self {
            api_base_url: option_env!("CRM_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL).to_string(),
            auth_token: stored_token(),
            log_filter: option_env!("CRM_LOG").unwrap_or(DEFAULT_LOG_FILTER).to_string(),
            display: DisplayConfig::default(),
        }
    }
}

fn stored_token() -> Option<String> {
    // Stored as a bare string, not JSON, so read it raw.
    LocalStorage::raw()
        .get_item(AUTH_TOKEN_KEY)
        .ok()
        .flatten()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
