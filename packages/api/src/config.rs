//! # Backend addresses
//!
//! Two base URLs are configurable:
//!
//! | Variable | Field | Used for |
//! |----------|-------|----------|
//! | `API_URL` | [`ApiConfig::api_url`] | every REST call (`/user`, `/projects`, …) |
//! | `SANCTUM_URL` | [`ApiConfig::sanctum_url`] | `sanctum/csrf-cookie`, which lives on the backend's root domain even when the API sits under a sub-path |
//!
//! Both default to [`DEFAULT_BASE_URL`]. Native builds read them from the
//! process environment (after loading `.env` with `dotenvy`); WASM builds have
//! no environment at runtime, so the values are baked in at compile time.
//! Empty values count as unset.

/// Fallback for both base URLs.
pub const DEFAULT_BASE_URL: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the REST API, always ending in `/`.
    pub api_url: String,
    /// Root of the backend that serves the CSRF cookie, always ending in `/`.
    pub sanctum_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>, sanctum_url: impl Into<String>) -> Self {
        Self {
            api_url: with_trailing_slash(api_url.into()),
            sanctum_url: with_trailing_slash(sanctum_url.into()),
        }
    }

    /// Load the configuration for the current platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration for the current platform.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_URL" => option_env!("API_URL").map(str::to_string),
            "SANCTUM_URL" => option_env!("SANCTUM_URL").map(str::to_string),
            _ => None,
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        };
        Self::new(read("API_URL"), read("SANCTUM_URL"))
    }

    /// Absolute URL of the CSRF cookie endpoint.
    pub fn csrf_cookie_url(&self) -> String {
        format!("{}sanctum/csrf-cookie", self.sanctum_url)
    }
}

fn with_trailing_slash(url: String) -> String {
    let mut url = url.trim().to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
