//! API URL helpers

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the configured server URI; when none is configured, builds it from
/// the current window location with port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.example.com"
/// - Empty string if neither is available
pub fn api_base() -> String {
    let configured = &config().api.server_uri;
    if !configured.is_empty() {
        return configured.clone();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// URL of a REST resource relative to `base`, e.g. `{base}/api/orders/{id}`
///
/// Segments are percent-encoded; the resource path itself may contain `/`.
pub fn resource_url(base: &str, resource: &str, segments: &[&str]) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), resource.trim_matches('/'));
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url() {
        assert_eq!(
            resource_url("http://localhost:3000/", "orders", &[]),
            "http://localhost:3000/api/orders"
        );
        assert_eq!(
            resource_url("https://x.io", "affiliate/orders", &["bulk", "update-commission"]),
            "https://x.io/api/affiliate/orders/bulk/update-commission"
        );
        assert_eq!(
            resource_url("", "blogs", &["a b/c"]),
            "/api/blogs/a%20b%2Fc"
        );
    }
}
