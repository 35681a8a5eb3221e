//! Application configuration.
//!
//! All values are resolved at compile time from the build environment, the
//! way the original deployment baked them into the bundle. Redirect URIs are
//! not configured here: they are derived from the browser origin at runtime
//! by the session layer.

/// OIDC parameters for the identity provider redirect contract.
#[derive(Debug, Clone, PartialEq)]
pub struct OidcConfig {
    pub authority: String,
    pub client_id: String,
    pub response_type: String,
    pub scope: String,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the notes REST API, without a trailing slash.
    pub api_url: String,
    pub oidc: OidcConfig,
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables,
    /// falling back to local development defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("STONE_NOTES_API_URL", "http://localhost:8080"),
            oidc: OidcConfig {
                authority: env_or("OIDC_AUTHORITY", "http://localhost:8081"),
                client_id: env_or("OIDC_CLIENT_ID", "stone-notes"),
                response_type: env_or("OIDC_RESPONSE_TYPE", "token id_token"),
                scope: env_or("OIDC_SCOPE", "openid profile"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    let value = match key {
        "STONE_NOTES_API_URL" => option_env!("STONE_NOTES_API_URL"),
        "OIDC_AUTHORITY" => option_env!("OIDC_AUTHORITY"),
        "OIDC_CLIENT_ID" => option_env!("OIDC_CLIENT_ID"),
        "OIDC_RESPONSE_TYPE" => option_env!("OIDC_RESPONSE_TYPE"),
        "OIDC_SCOPE" => option_env!("OIDC_SCOPE"),
        _ => None,
    };
    value.unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env();
        assert!(!config.api_url.is_empty());
        assert!(!config.oidc.authority.is_empty());
        assert!(!config.oidc.client_id.is_empty());
        assert!(config.oidc.scope.contains("openid"));
    }
}
