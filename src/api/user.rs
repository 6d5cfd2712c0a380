use serde_json::{json, Value};

use super::endpoints;
use crate::client::ApiClient;
use crate::error::Result;
use crate::model::{User, UserListParams};

pub struct UserApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> UserApi<'a> {
        UserApi { client }
    }

    pub async fn list(&self, params: &UserListParams) -> Result<Value> {
        self.client.get(endpoints::USER_LIST, params).await
    }

    pub async fn list_paginated(&self, params: &UserListParams) -> Result<Value> {
        self.client.get(endpoints::USER_LIST_PAGINATED, params).await
    }

    pub async fn search(&self, params: &UserListParams) -> Result<Value> {
        self.client.get(endpoints::USER_SEARCH, params).await
    }

    pub async fn user_types(&self) -> Result<Value> {
        self.client.get(endpoints::USER_TYPES, &[] as &[(&str, &str)]).await
    }

    pub async fn create(&self, user: &User) -> Result<Value> {
        self.client.post(endpoints::USER_CREATE, Some(user)).await
    }

    pub async fn update(&self, user: &User) -> Result<Value> {
        self.client.put(endpoints::USER_UPDATE, user).await
    }

    pub async fn delete(&self, account_id: &str) -> Result<Value> {
        self.client
            .delete(endpoints::USER_DELETE, &[("TaiKhoan", account_id)])
            .await
    }

    /// Courses the account has not enrolled in; arguments go in the query
    /// string on this one.
    pub async fn courses_not_enrolled(&self, account_id: &str) -> Result<Value> {
        self.client
            .post_query(endpoints::COURSES_NOT_ENROLLED, &[("TaiKhoan", account_id)])
            .await
    }

    pub async fn courses_pending_approval(&self, account_id: &str) -> Result<Value> {
        self.client
            .post(
                endpoints::COURSES_PENDING_APPROVAL,
                Some(&json!({ "taiKhoan": account_id })),
            )
            .await
    }

    pub async fn courses_approved(&self, account_id: &str) -> Result<Value> {
        self.client
            .post(
                endpoints::COURSES_APPROVED,
                Some(&json!({ "taiKhoan": account_id })),
            )
            .await
    }

    pub async fn users_not_enrolled(&self, course_id: &str) -> Result<Value> {
        self.client
            .post(
                endpoints::USERS_NOT_ENROLLED,
                Some(&json!({ "maKhoaHoc": course_id })),
            )
            .await
    }

    pub async fn users_pending_for_course(&self, course_id: &str) -> Result<Value> {
        self.client
            .post(
                endpoints::USERS_PENDING_FOR_COURSE,
                Some(&json!({ "maKhoaHoc": course_id })),
            )
            .await
    }

    pub async fn users_approved_for_course(&self, course_id: &str) -> Result<Value> {
        self.client
            .post(
                endpoints::USERS_APPROVED_FOR_COURSE,
                Some(&json!({ "maKhoaHoc": course_id })),
            )
            .await
    }
}
