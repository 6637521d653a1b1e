//! Shared backend constructor and context accessor.
//!
//! Returns the [`api::Backend`] implementation for the current build:
//! - **default**: [`api::HttpBackend`] configured from the environment
//! - **`demo` feature**: a seeded [`api::MemoryBackend`], no server needed

use api::ApiError;
use dioxus::prelude::*;

#[cfg(not(feature = "demo"))]
pub type AppBackend = api::HttpBackend;

#[cfg(feature = "demo")]
pub type AppBackend = api::MemoryBackend;

/// Create the backend the app talks to.
pub fn make_backend() -> Result<AppBackend, ApiError> {
    #[cfg(not(feature = "demo"))]
    {
        api::HttpBackend::new(&api::ApiConfig::from_env())
    }
    #[cfg(feature = "demo")]
    {
        Ok(api::MemoryBackend::demo())
    }
}

/// The backend provided at the root of the app.
pub fn use_backend() -> AppBackend {
    use_context::<AppBackend>()
}
