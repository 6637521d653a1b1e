//! # HTTP backend
//!
//! [`HttpBackend`] is the single shared client for the REST API. It is built
//! once from an [`ApiConfig`] and cloned freely (the inner `reqwest::Client`
//! is reference counted).
//!
//! ## Cookies
//!
//! The backend authenticates with a session cookie and protects state
//! changes with Laravel's CSRF double-submit cookie:
//!
//! - in the browser every request is sent with `credentials: include`, and
//!   the `XSRF-TOKEN` cookie is read from `document.cookie`;
//! - on native targets both clients share one [`Jar`], which is also where
//!   the `XSRF-TOKEN` value is read from.
//!
//! The token is echoed back in the `X-XSRF-TOKEN` header, percent-decoded
//! the same way browsers' HTTP libraries do.
//!
//! ## CSRF cookie client
//!
//! `sanctum/csrf-cookie` is served from the backend's root domain, which may
//! differ from the API base URL. It is fetched with a second client whose
//! URL is fixed at construction time; the API client's base address is
//! never touched, so no concurrent request can ever observe the wrong one.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use reqwest::header::ACCEPT;
#[cfg(not(target_arch = "wasm32"))]
use reqwest::cookie::Jar;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::Backend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Credentials, NewProject, NewTask, Paginated, Project, ProjectDetail, ProjectId, Task, TaskId,
    User,
};

const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Backend reached over HTTP with cookie credentials.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    csrf_client: Client,
    api_url: Url,
    csrf_url: Url,
    #[cfg(not(target_arch = "wasm32"))]
    jar: Arc<Jar>,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let api_url = parse_url(&config.api_url)?;
        let csrf_url = parse_url(&config.csrf_cookie_url())?;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let jar = Arc::new(Jar::default());
            let client = Client::builder().cookie_provider(jar.clone()).build()?;
            let csrf_client = Client::builder().cookie_provider(jar.clone()).build()?;
            Ok(Self {
                client,
                csrf_client,
                api_url,
                csrf_url,
                jar,
            })
        }

        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self {
                client: Client::new(),
                csrf_client: Client::new(),
                api_url,
                csrf_url,
            })
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.api_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ApiError::InvalidUrl(path.to_string()))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        if let Some(token) = self.xsrf_token() {
            request = request.header(XSRF_HEADER, token);
        }
        Ok(with_credentials(request))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        check_status(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await.map(drop)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn xsrf_token(&self) -> Option<String> {
        use reqwest::cookie::CookieStore;

        let header = self.jar.cookies(&self.api_url)?;
        xsrf_from_cookies(header.to_str().ok()?)
    }

    #[cfg(target_arch = "wasm32")]
    fn xsrf_token(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        xsrf_from_cookies(&document.cookie().ok()?)
    }
}

impl Backend for HttpBackend {
    async fn fetch_csrf_cookie(&self) -> Result<(), ApiError> {
        let request = self
            .csrf_client
            .get(self.csrf_url.clone())
            .header(ACCEPT, "application/json");
        self.send_unit(with_credentials(request)).await?;
        tracing::debug!(url = %self.csrf_url, "csrf cookie refreshed");
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "login")?.json(credentials))
            .await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.send_json(self.request(Method::GET, "user")?).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::POST, "logout")?).await
    }

    async fn list_projects(&self, page: u32) -> Result<Paginated<Project>, ApiError> {
        let request = self
            .request(Method::GET, "projects")?
            .query(&[("page", page.max(1))]);
        self.send_json(request).await
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        self.send_json(self.request(Method::POST, "projects")?.json(project))
            .await
    }

    async fn project(&self, id: ProjectId) -> Result<ProjectDetail, ApiError> {
        self.send_json(self.request(Method::GET, &format!("projects/{id}"))?)
            .await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        self.send_json(self.request(Method::POST, "tasks")?.json(task))
            .await
    }

    async fn toggle_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.send_unit(self.request(Method::PATCH, &format!("tasks/{id}/toggle"))?)
            .await
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), body.message))
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

fn parse_url(url: &str) -> Result<Url, ApiError> {
    Url::parse(url).map_err(|_| ApiError::InvalidUrl(url.to_string()))
}

/// Find the `XSRF-TOKEN` value in a `Cookie` header / `document.cookie` string.
fn xsrf_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == XSRF_COOKIE)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xsrf_from_cookies() {
        let cookies = "laravel_session=abc; XSRF-TOKEN=eyJpdiI6Ik1%3D; theme=dark";
        assert_eq!(xsrf_from_cookies(cookies), Some("eyJpdiI6Ik1=".to_string()));
        assert_eq!(xsrf_from_cookies("laravel_session=abc"), None);
        assert_eq!(xsrf_from_cookies(""), None);
    }

    #[test]
    fn test_endpoints_resolve_under_api_path() {
        let backend = HttpBackend::new(&ApiConfig::new(
            "https://plan.example.com/api",
            "https://plan.example.com",
        ))
        .unwrap();
        assert_eq!(
            backend.endpoint("/projects/3").unwrap().as_str(),
            "https://plan.example.com/api/projects/3"
        );
        assert_eq!(
            backend.endpoint("tasks/9/toggle").unwrap().as_str(),
            "https://plan.example.com/api/tasks/9/toggle"
        );
        assert_eq!(
            backend.csrf_url.as_str(),
            "https://plan.example.com/sanctum/csrf-cookie"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::new("not a url", "http://localhost/");
        assert!(matches!(HttpBackend::new(&config), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_xsrf_read_from_shared_jar() {
        let backend = HttpBackend::new(&ApiConfig::default()).unwrap();
        assert_eq!(backend.xsrf_token(), None);

        let url = Url::parse("http://localhost/").unwrap();
        backend.jar.add_cookie_str("XSRF-TOKEN=abc%2Bdef; Path=/", &url);
        assert_eq!(backend.xsrf_token(), Some("abc+def".to_string()));
    }
}
