//! Dashboard configuration.
//!
//! Defaults are embedded as TOML. The API base URL can be replaced at build
//! time through `SERVER_URI`, or `NEXT_PUBLIC_SERVER_URI` for deployments that
//! still export the storefront's variable name; `SERVER_URI` wins when both
//! are set. An empty base URL means "same host as the page, port 3000".

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListsConfig,
    pub toasts: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub server_uri: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToastConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
server_uri = ""

[lists]
page_size = 20
page_size_options = [10, 20, 50, 100]
search_debounce_ms = 300

[toasts]
timeout_ms = 4000
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let server_uri = server_uri_override(
        option_env!("SERVER_URI"),
        option_env!("NEXT_PUBLIC_SERVER_URI"),
    );
    match load_config(server_uri) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid embedded configuration: {}", e);
            AppConfig::fallback()
        }
    }
});

/// Configuration of this build
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// First build-time base URL that is set and not blank
pub fn server_uri_override<'a>(
    server_uri: Option<&'a str>,
    next_public_server_uri: Option<&'a str>,
) -> Option<&'a str> {
    [server_uri, next_public_server_uri]
        .into_iter()
        .flatten()
        .find(|uri| !uri.trim().is_empty())
}

/// Parse the embedded defaults and apply the build-time override
pub fn load_config(server_uri: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(uri) = server_uri.map(str::trim).filter(|u| !u.is_empty()) {
        log::info!("API base URL overridden at build time: {}", uri);
        config.api.server_uri = uri.trim_end_matches('/').to_string();
    }
    Ok(config)
}

impl AppConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                server_uri: String::new(),
            },
            lists: ListsConfig {
                page_size: 20,
                page_size_options: vec![20, 50, 100],
                search_debounce_ms: 300,
            },
            toasts: ToastConfig { timeout_ms: 4000 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.server_uri, "");
        assert_eq!(config.lists.page_size, 20);
        assert_eq!(config.lists.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.lists.search_debounce_ms, 300);
        assert_eq!(config.toasts.timeout_ms, 4000);
    }

    #[test]
    fn test_server_uri_override() {
        let config = load_config(Some("https://api.example.com/")).unwrap();
        assert_eq!(config.api.server_uri, "https://api.example.com");

        let config = load_config(Some("   ")).unwrap();
        assert_eq!(config.api.server_uri, "");
    }

    #[test]
    fn test_server_uri_variables() {
        assert_eq!(server_uri_override(None, None), None);
        assert_eq!(
            server_uri_override(None, Some("https://shop.example.com")),
            Some("https://shop.example.com")
        );
        assert_eq!(
            server_uri_override(Some("https://api.example.com"), Some("https://shop.example.com")),
            Some("https://api.example.com")
        );
        assert_eq!(
            server_uri_override(Some(" "), Some("https://shop.example.com")),
            Some("https://shop.example.com")
        );

        let config = load_config(server_uri_override(None, Some("https://shop.example.com/"))).unwrap();
        assert_eq!(config.api.server_uri, "https://shop.example.com");
    }
}
