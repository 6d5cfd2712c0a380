use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::{Error, ErrorKind, Result};
use crate::model::{AuthUser, LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use crate::store::normalize::normalize_entity;

/// Session slice. Anonymous until a login succeeds or a stored token is
/// restored; any logout or 401 returns it to anonymous.
#[derive(Debug, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state seeded from the session store: a persisted token counts
    /// as authenticated until [`restore_session`](Self::restore_session)
    /// refutes it.
    pub fn new(session: &dyn SessionStore) -> AuthState {
        let token = session.token();
        AuthState {
            is_authenticated: token.is_some(),
            token,
            ..AuthState::default()
        }
    }

    pub async fn login(&mut self, api: &ApiClient, req: &LoginRequest) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let payload = match api.auth().login(req).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        // The login body carries the identity either nested under `user` or
        // flattened at the top level.
        let user: AuthUser = match payload.get("user").filter(|v| v.is_object()) {
            Some(nested) => serde_json::from_value(nested.clone())?,
            None => serde_json::from_value(payload.clone()).unwrap_or_default(),
        };

        let token = payload
            .get("accessToken")
            .and_then(Value::as_str)
            .or_else(|| payload.get("token").and_then(Value::as_str))
            .map(String::from)
            .or_else(|| user.access_token.clone())
            .ok_or_else(|| {
                Error::from(ErrorKind::ParseError(
                    "login response carried no access token".to_string(),
                ))
            })?;

        api.session().set_token(&token);
        self.token = Some(token);
        self.user = Some(user);
        self.is_authenticated = true;
        Ok(())
    }

    /// Register only authenticates when the remote hands back a `user`
    /// object with a token; otherwise the account exists but the caller
    /// still has to log in.
    pub async fn register(&mut self, api: &ApiClient, req: &RegisterRequest) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let payload = match api.auth().register(req).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        if let Some(nested) = payload.get("user").filter(|v| v.is_object()) {
            let user: AuthUser = serde_json::from_value(nested.clone())?;
            if let Some(token) = user.access_token.clone() {
                api.session().set_token(&token);
                self.token = Some(token);
                self.is_authenticated = true;
            }
            self.user = Some(user);
        }
        Ok(())
    }

    /// Re-enter the authenticated state from a persisted token, then confirm
    /// the identity with the remote. Confirmation failure of any kind ends
    /// anonymous with the token cleared; never authenticated with a stale
    /// cached user.
    pub async fn restore_session(&mut self, api: &ApiClient) -> Result<()> {
        let Some(token) = api.session().token() else {
            debug!("no persisted token, staying anonymous");
            return Ok(());
        };

        self.token = Some(token);
        self.is_authenticated = true;
        self.is_loading = true;

        let confirmed = match api.auth().current_user().await {
            Ok(payload) => normalize_entity::<AuthUser>(&payload),
            Err(e) => Err(e),
        };
        self.is_loading = false;

        match confirmed {
            Ok(user) => {
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                api.session().clear();
                self.token = None;
                self.user = None;
                self.is_authenticated = false;
                self.error = Some(remote_message(&e));
                Err(e)
            }
        }
    }

    pub fn logout(&mut self, session: &dyn SessionStore) {
        session.clear();
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.error = None;
    }

    /// A 401 observed by any caller; the adapter has already cleared the
    /// persisted token.
    pub fn on_unauthorized(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, e: Error) -> Error {
        self.is_loading = false;
        self.error = Some(remote_message(&e));
        e
    }
}

/// The remote's own message when it reported one, otherwise the transport
/// error's rendering.
pub(crate) fn remote_message(e: &Error) -> String {
    match *e.inner {
        ErrorKind::ApiError { ref message, .. } => message.clone(),
        _ => e.to_string(),
    }
}
