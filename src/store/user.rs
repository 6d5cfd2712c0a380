use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::model::{User, UserListParams, UserType};
use crate::store::auth::remote_message;
use crate::store::normalize::{normalize_entity, normalize_list};

/// User-administration slice, keyed by account id.
#[derive(Debug, Default)]
pub struct UserState {
    pub users: Vec<User>,
    pub user_types: Vec<UserType>,
    pub total: u64,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UserState {
    pub fn new() -> UserState {
        UserState::default()
    }

    pub async fn fetch_users(&mut self, api: &ApiClient, params: &UserListParams) -> Result<()> {
        self.begin();
        let payload = match api.user().list(params).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.users = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn fetch_users_paginated(
        &mut self,
        api: &ApiClient,
        params: &UserListParams,
    ) -> Result<()> {
        self.begin();
        let payload = match api.user().list_paginated(params).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.users = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn search_users(&mut self, api: &ApiClient, params: &UserListParams) -> Result<()> {
        self.begin();
        let payload = match api.user().search(params).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.users = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn fetch_user_types(&mut self, api: &ApiClient) -> Result<()> {
        self.begin();
        let payload = match api.user().user_types().await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        self.user_types = normalize_list(&payload).items;
        Ok(())
    }

    pub async fn create_user(&mut self, api: &ApiClient, user: &User) -> Result<()> {
        let payload = match api.user().create(user).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };

        match normalize_entity::<User>(&payload) {
            Ok(created) => {
                self.users.insert(0, created);
                self.total += 1;
                Ok(())
            }
            Err(e) => self.resync(api, e).await,
        }
    }

    pub async fn update_user(&mut self, api: &ApiClient, user: &User) -> Result<()> {
        let payload = match api.user().update(user).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };

        match normalize_entity::<User>(&payload) {
            Ok(updated) => {
                if let Some(slot) = self
                    .users
                    .iter_mut()
                    .find(|u| u.account_id == updated.account_id)
                {
                    *slot = updated;
                }
                Ok(())
            }
            Err(e) => self.resync(api, e).await,
        }
    }

    pub async fn delete_user(&mut self, api: &ApiClient, account_id: &str) -> Result<()> {
        if let Err(e) = api.user().delete(account_id).await {
            return Err(self.fail(e));
        }

        if let Some(idx) = self.users.iter().position(|u| u.account_id == account_id) {
            self.users.remove(idx);
        }
        self.total = self.total.saturating_sub(1);
        Ok(())
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn fail(&mut self, e: Error) -> Error {
        self.is_loading = false;
        self.error = Some(remote_message(&e));
        e
    }

    async fn resync(&mut self, api: &ApiClient, shape_error: Error) -> Result<()> {
        let _ = self.fetch_users(api, &UserListParams::default()).await;
        self.error = Some(remote_message(&shape_error));
        Err(shape_error)
    }
}
