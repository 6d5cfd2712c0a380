use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::model::{Category, Course, CourseListParams};
use crate::store::auth::remote_message;
use crate::store::normalize::{normalize_entity, normalize_list};

/// Catalog slice: the normalized course cache plus the categories lookup.
#[derive(Debug, Default)]
pub struct CourseState {
    pub courses: Vec<Course>,
    pub current_course: Option<Course>,
    pub categories: Vec<Category>,
    pub total: u64,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CourseState {
    pub fn new() -> CourseState {
        CourseState::default()
    }

    pub async fn fetch_courses(&mut self, api: &ApiClient, params: &CourseListParams) -> Result<()> {
        self.begin();
        let payload = match api.course().list(params).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.courses = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn fetch_courses_paginated(
        &mut self,
        api: &ApiClient,
        params: &CourseListParams,
    ) -> Result<()> {
        self.begin();
        let payload = match api.course().list_paginated(params).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.courses = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn fetch_by_category(
        &mut self,
        api: &ApiClient,
        category_id: &str,
        group_code: &str,
    ) -> Result<()> {
        self.begin();
        let payload = match api.course().by_category(category_id, group_code).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        let page = normalize_list(&payload);
        self.courses = page.items;
        self.total = page.total;
        Ok(())
    }

    pub async fn fetch_categories(&mut self, api: &ApiClient) -> Result<()> {
        self.begin();
        let payload = match api.course().categories().await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        self.categories = normalize_list(&payload).items;
        Ok(())
    }

    pub async fn fetch_detail(&mut self, api: &ApiClient, course_id: &str) -> Result<()> {
        self.begin();
        let payload = match api.course().detail(course_id).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };
        self.is_loading = false;

        self.current_course = Some(normalize_entity(&payload)?);
        Ok(())
    }

    /// On success the created course goes to the head of the cached list.
    /// When the response shape is unrecognizable the cache is refetched from
    /// the server instead of guessing, and the shape error surfaces.
    pub async fn create_course(&mut self, api: &ApiClient, course: &Course) -> Result<()> {
        let payload = match api.course().create(course).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };

        match normalize_entity::<Course>(&payload) {
            Ok(created) => {
                self.courses.insert(0, created);
                self.total += 1;
                Ok(())
            }
            Err(e) => self.resync(api, e).await,
        }
    }

    pub async fn update_course(&mut self, api: &ApiClient, course: &Course) -> Result<()> {
        let payload = match api.course().update(course).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e)),
        };

        match normalize_entity::<Course>(&payload) {
            Ok(updated) => {
                if let Some(slot) = self
                    .courses
                    .iter_mut()
                    .find(|c| c.course_id == updated.course_id)
                {
                    *slot = updated;
                }
                Ok(())
            }
            Err(e) => self.resync(api, e).await,
        }
    }

    pub async fn delete_course(&mut self, api: &ApiClient, course_id: &str) -> Result<()> {
        if let Err(e) = api.course().delete(course_id).await {
            return Err(self.fail(e));
        }

        if let Some(idx) = self.courses.iter().position(|c| c.course_id == course_id) {
            self.courses.remove(idx);
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
        // Best effort: the shape error is what the caller needs to see.
        let _ = self.fetch_courses(api, &CourseListParams::default()).await;
        self.error = Some(remote_message(&shape_error));
        Err(shape_error)
    }
}
