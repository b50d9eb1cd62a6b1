use std::env;

/// Local backend the original web client was pointed at.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Environment variable overriding the backend location.
pub const BASE_URL_ENV: &str = "POSTWALL_URL";

/// Resolve the backend base URL based on priority:
/// 1. Explicit --base-url flag
/// 2. POSTWALL_URL environment variable
/// 3. Default local backend
///
/// Trailing slashes are stripped so endpoint paths join cleanly.
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.trim_end_matches('/').to_string();
    }

    if let Ok(url) = env::var(BASE_URL_ENV)
        && !url.is_empty()
    {
        return url.trim_end_matches('/').to_string();
    }

    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins_and_is_trimmed() {
        assert_eq!(
            resolve_base_url(Some("http://feed.local:8080/")),
            "http://feed.local:8080"
        );
    }

    // Single test for the env-dependent branches: resolve_base_url
    // reads POSTWALL_URL, so the chain is exercised sequentially here
    // rather than across parallel test threads.
    #[test]
    fn test_priority_chain() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);

        // set_var is unsafe in edition 2024; this test owns the
        // variable and removes it before finishing.
        unsafe { env::set_var(BASE_URL_ENV, "http://from-env:9000/") };
        assert_eq!(resolve_base_url(None), "http://from-env:9000");
        assert_eq!(
            resolve_base_url(Some("http://explicit:1")),
            "http://explicit:1"
        );
        unsafe { env::remove_var(BASE_URL_ENV) };
    }
}
