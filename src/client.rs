//! HTTP adapter over the remote e-learning service.
//!
//! One request path for every resource client: base URL joining, vendor
//! token header on every call, bearer token injection from the injected
//! session store, and the global 401 teardown.

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{AuthApi, CourseApi, EnrollmentApi, UserApi};
use crate::config::{ApiConfig, VENDOR_TOKEN_HEADER};
use crate::error::{ErrorKind, Result};
use crate::session::SessionStore;

/// Invoked once per 401 response, after the stored token has been cleared.
/// Stands in for the browser app's forced navigation to the login view.
pub type UnauthorizedHook = Box<dyn Fn() + Send + Sync>;

pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<ApiClient> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(ApiClient {
            http,
            config,
            session,
            on_unauthorized: None,
        })
    }

    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> ApiClient {
        self.on_unauthorized = Some(hook);
        self
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn course(&self) -> CourseApi<'_> {
        CourseApi::new(self)
    }

    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    pub fn enrollment(&self) -> EnrollmentApi<'_> {
        EnrollmentApi::new(self)
    }

    pub async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let req = self.builder(Method::GET, path).query(query);
        self.execute(path, req).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<Value> {
        let mut req = self.builder(Method::POST, path);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.execute(path, req).await
    }

    /// POST with the arguments in the query string and an empty body, which
    /// a few of the remote's lookup endpoints expect.
    pub async fn post_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let req = self.builder(Method::POST, path).query(query);
        self.execute(path, req).await
    }

    /// POST a multipart form, for the image-upload endpoints.
    pub async fn post_multipart(&self, path: &str, form: reqwest::multipart::Form) -> Result<Value> {
        let req = self.builder(Method::POST, path).multipart(form);
        self.execute(path, req).await
    }

    /// Multipart POST with extra arguments in the query string.
    pub async fn post_multipart_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        form: reqwest::multipart::Form,
    ) -> Result<Value> {
        let req = self.builder(Method::POST, path).query(query).multipart(form);
        self.execute(path, req).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let req = self.builder(Method::PUT, path).json(body);
        self.execute(path, req).await
    }

    pub async fn delete<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let req = self.builder(Method::DELETE, path).query(query);
        self.execute(path, req).await
    }

    fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut req = self
            .http
            .request(method, url)
            .header(VENDOR_TOKEN_HEADER, &self.config.vendor_token);

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    async fn execute(&self, path: &str, req: reqwest::RequestBuilder) -> Result<Value> {
        let resp = req.send().await?;
        let status = resp.status();
        debug!(path, status = status.as_u16(), "request completed");

        if status == StatusCode::UNAUTHORIZED {
            warn!(path, "unauthorized response, clearing session");
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ErrorKind::Unauthorized.into());
        }

        let text = resp.text().await?;

        if !status.is_success() {
            // Surface the remote's own message verbatim when the body has one.
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or(text);
            return Err(ErrorKind::ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        // The remote serves some success bodies as bare strings with a JSON
        // content type and some as plain text; treat unparseable success
        // bodies as their raw text.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
