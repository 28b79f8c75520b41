//! Server configuration
//!
//! Site address and output paths come from Leptos configuration
//! (`[package.metadata.leptos]`, overridable with `LEPTOS_*` variables).
//! This only adds what the server needs on top of that.

const DEFAULT_LOG_FILTER: &str = "peace_site=debug,peace_core=debug,tower_http=debug";

/// Server-side settings read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `tracing_subscriber` filter directive
    pub log_filter: String,
    /// Alternate Cargo.toml holding the Leptos metadata
    pub leptos_config_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            leptos_config_file: lookup("PEACE_LEPTOS_CONFIG").filter(|v| !v.trim().is_empty()),
        }
    }
}
