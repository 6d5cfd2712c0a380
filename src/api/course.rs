use reqwest::multipart::Form;
use serde_json::{json, Value};

use super::endpoints;
use crate::client::ApiClient;
use crate::error::Result;
use crate::model::{Course, CourseListParams};

pub struct CourseApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CourseApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> CourseApi<'a> {
        CourseApi { client }
    }

    pub async fn list(&self, params: &CourseListParams) -> Result<Value> {
        self.client.get(endpoints::COURSE_LIST, params).await
    }

    pub async fn list_paginated(&self, params: &CourseListParams) -> Result<Value> {
        self.client.get(endpoints::COURSE_LIST_PAGINATED, params).await
    }

    pub async fn by_category(&self, category_id: &str, group_code: &str) -> Result<Value> {
        self.client
            .get(
                endpoints::COURSE_BY_CATEGORY,
                &[("maDanhMuc", category_id), ("MaNhom", group_code)],
            )
            .await
    }

    pub async fn categories(&self) -> Result<Value> {
        self.client.get(endpoints::COURSE_CATEGORIES, &[] as &[(&str, &str)]).await
    }

    pub async fn detail(&self, course_id: &str) -> Result<Value> {
        self.client
            .get(endpoints::COURSE_DETAIL, &[("maKhoaHoc", course_id)])
            .await
    }

    /// Create expects the course wrapped in a `kh` envelope.
    pub async fn create(&self, course: &Course) -> Result<Value> {
        self.client
            .post(endpoints::COURSE_CREATE, Some(&json!({ "kh": course })))
            .await
    }

    pub async fn update(&self, course: &Course) -> Result<Value> {
        self.client
            .put(endpoints::COURSE_UPDATE, &json!({ "kh": course }))
            .await
    }

    pub async fn delete(&self, course_id: &str) -> Result<Value> {
        self.client
            .delete(endpoints::COURSE_DELETE, &[("MaKhoaHoc", course_id)])
            .await
    }

    // The upload endpoints take multipart forms; the caller assembles the
    // form (image part plus course text fields) and the remote does the
    // rest, same as the other operations.

    pub async fn upload_image(&self, form: Form) -> Result<Value> {
        self.client
            .post_multipart(endpoints::COURSE_UPLOAD_IMAGE, form)
            .await
    }

    pub async fn create_with_image(&self, form: Form) -> Result<Value> {
        self.client
            .post_multipart(endpoints::COURSE_UPLOAD_CREATE, form)
            .await
    }

    pub async fn update_with_image(&self, form: Form) -> Result<Value> {
        self.client
            .post_multipart(endpoints::COURSE_UPLOAD_UPDATE, form)
            .await
    }

    /// Image upload addressed by course title and group code in the query
    /// string rather than by form fields.
    pub async fn upload_generic(
        &self,
        form: Form,
        title: Option<&str>,
        group_code: Option<&str>,
    ) -> Result<Value> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(title) = title {
            query.push(("tenKhoaHoc", title));
        }
        if let Some(group_code) = group_code {
            query.push(("maNhom", group_code));
        }

        self.client
            .post_multipart_query(endpoints::COURSE_UPLOAD_IMAGE, &query, form)
            .await
    }
}
