use serde_json::{json, Value};

use super::endpoints;
use crate::client::ApiClient;
use crate::error::Result;
use crate::model::{LoginRequest, RegisterRequest};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> AuthApi<'a> {
        AuthApi { client }
    }

    /// Log in with either an account id or an email; the identifier fields
    /// coalesce into the wire payload, missing ones become empty strings.
    pub async fn login(&self, req: &LoginRequest) -> Result<Value> {
        let payload = json!({
            "taiKhoan": req.account_id.as_deref()
                .or(req.email.as_deref())
                .unwrap_or(""),
            "matKhau": req.password.as_deref().unwrap_or(""),
        });

        self.client.post(endpoints::LOGIN, Some(&payload)).await
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<Value> {
        self.client.post(endpoints::REGISTER, Some(req)).await
    }

    /// Identity of the bearer-token holder; the remote serves this as a POST.
    pub async fn current_user(&self) -> Result<Value> {
        self.client.post::<Value>(endpoints::CURRENT_USER, None).await
    }

    pub async fn account_info(&self) -> Result<Value> {
        self.client.post::<Value>(endpoints::ACCOUNT_INFO, None).await
    }
}
