//! Backend Configuration
//!
//! Resolves the REST backend base URL from build-time environment values.

use std::sync::OnceLock;

/// Env keys checked in order; the first non-empty one wins
pub const BASE_URL_KEYS: [&str; 3] = [
    "REACT_APP_API_BASE",
    "REACT_APP_BACKEND_URL",
    "REACT_APP_API_BASE_URL",
];

/// Used when none of the keys are set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    /// Reads the keys baked in at compile time (see `build.rs` for `.env` support)
    pub fn from_build_env() -> Self {
        let base_url = resolve_base_url(|key| {
            match key {
                "REACT_APP_API_BASE" => option_env!("REACT_APP_API_BASE"),
                "REACT_APP_BACKEND_URL" => option_env!("REACT_APP_BACKEND_URL"),
                "REACT_APP_API_BASE_URL" => option_env!("REACT_APP_API_BASE_URL"),
                _ => None,
            }
            .map(str::to_string)
        });
        Self { base_url }
    }

    /// Full URL for an API path such as `/recipes`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Process-wide config, resolved once
pub fn api_config() -> &'static ApiConfig {
    static CONFIG: OnceLock<ApiConfig> = OnceLock::new();
    CONFIG.get_or_init(ApiConfig::from_build_env)
}

/// Pick the first usable value from `lookup` in key order, falling back to
/// [`DEFAULT_BASE_URL`]. Never fails.
pub fn resolve_base_url<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    BASE_URL_KEYS
        .iter()
        .filter_map(|key| lookup(*key))
        .map(|value| normalize_base_url(&value))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Trim whitespace and strip every trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(resolve_base_url(|_| None), "http://localhost:3001");
    }

    #[test]
    fn test_precedence_order() {
        let lookup = lookup_from(&[
            ("REACT_APP_API_BASE_URL", "http://third"),
            ("REACT_APP_BACKEND_URL", "http://second"),
        ]);
        assert_eq!(resolve_base_url(lookup), "http://second");

        let lookup = lookup_from(&[
            ("REACT_APP_API_BASE", "http://first"),
            ("REACT_APP_BACKEND_URL", "http://second"),
        ]);
        assert_eq!(resolve_base_url(lookup), "http://first");
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let lookup = lookup_from(&[("REACT_APP_API_BASE", "http://host/")]);
        assert_eq!(resolve_base_url(lookup), "http://host");

        let lookup = lookup_from(&[("REACT_APP_BACKEND_URL", " https://api.example.com/v1/// ")]);
        assert_eq!(resolve_base_url(lookup), "https://api.example.com/v1");
    }

    #[test]
    fn test_empty_values_skipped() {
        let lookup = lookup_from(&[
            ("REACT_APP_API_BASE", "   "),
            ("REACT_APP_BACKEND_URL", "/"),
            ("REACT_APP_API_BASE_URL", "http://fallthrough:8000"),
        ]);
        assert_eq!(resolve_base_url(lookup), "http://fallthrough:8000");
    }

    #[test]
    fn test_endpoint_joins_path() {
        let config = ApiConfig { base_url: "http://localhost:3001".into() };
        assert_eq!(config.endpoint("/recipes"), "http://localhost:3001/recipes");
    }
}
