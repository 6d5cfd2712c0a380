use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::model::{Course, EnrollmentPayload, EnrollmentStatus, User};
use crate::store::auth::remote_message;
use crate::store::normalize::normalize_list;

/// Enrollment slice. Status is never served by a single endpoint; it is
/// derived by cross-referencing the approved and pending lists, with
/// approved taking precedence when a course shows up in both.
#[derive(Debug, Default)]
pub struct EnrollmentState {
    pub approved_courses: Vec<Course>,
    pub pending_courses: Vec<Course>,
    pub not_enrolled_users: Vec<User>,
    pub pending_users: Vec<User>,
    pub approved_users: Vec<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl EnrollmentState {
    pub fn new() -> EnrollmentState {
        EnrollmentState::default()
    }

    /// Both per-account lists in parallel; either call degrades to an empty
    /// list on failure rather than failing the pair.
    pub async fn fetch_my_courses(&mut self, api: &ApiClient, account_id: &str) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let user_api = api.user();
        let (approved, pending) = tokio::join!(
            user_api.courses_approved(account_id),
            user_api.courses_pending_approval(account_id),
        );

        self.approved_courses = degraded(approved, "approved courses");
        self.pending_courses = degraded(pending, "pending courses");
        self.is_loading = false;
        Ok(())
    }

    /// Derive one course's status for an account from the freshly fetched
    /// per-account lists.
    pub async fn fetch_status(
        &mut self,
        api: &ApiClient,
        account_id: &str,
        course_id: &str,
    ) -> Result<EnrollmentStatus> {
        self.fetch_my_courses(api, account_id).await?;
        Ok(derive_status(
            course_id,
            &self.approved_courses,
            &self.pending_courses,
        ))
    }

    /// Admin view of one course: the three user rosters fetched in parallel,
    /// each individually degrading to empty on failure.
    pub async fn fetch_course_rosters(&mut self, api: &ApiClient, course_id: &str) -> Result<()> {
        self.is_loading = true;
        self.error = None;

        let user_api = api.user();
        let (not_enrolled, pending, approved) = tokio::join!(
            user_api.users_not_enrolled(course_id),
            user_api.users_pending_for_course(course_id),
            user_api.users_approved_for_course(course_id),
        );

        self.not_enrolled_users = degraded(not_enrolled, "not-enrolled roster");
        self.pending_users = degraded(pending, "pending roster");
        self.approved_users = degraded(approved, "approved roster");
        self.is_loading = false;
        Ok(())
    }

    pub async fn enroll(&mut self, api: &ApiClient, payload: &EnrollmentPayload) -> Result<()> {
        api.enrollment().enroll(payload).await.map_err(|e| self.fail(e))?;
        Ok(())
    }

    pub async fn approve(&mut self, api: &ApiClient, payload: &EnrollmentPayload) -> Result<()> {
        api.enrollment().approve(payload).await.map_err(|e| self.fail(e))?;
        Ok(())
    }

    pub async fn cancel(&mut self, api: &ApiClient, payload: &EnrollmentPayload) -> Result<()> {
        api.enrollment().cancel(payload).await.map_err(|e| self.fail(e))?;
        Ok(())
    }

    fn fail(&mut self, e: Error) -> Error {
        self.is_loading = false;
        self.error = Some(remote_message(&e));
        e
    }
}

/// Approved wins over pending when the remote erroneously reports both.
pub fn derive_status(
    course_id: &str,
    approved: &[Course],
    pending: &[Course],
) -> EnrollmentStatus {
    if approved.iter().any(|c| c.course_id == course_id) {
        EnrollmentStatus::Approved
    } else if pending.iter().any(|c| c.course_id == course_id) {
        EnrollmentStatus::Pending
    } else {
        EnrollmentStatus::NotEnrolled
    }
}

fn degraded<T: serde::de::DeserializeOwned>(result: Result<Value>, what: &str) -> Vec<T> {
    match result {
        Ok(payload) => normalize_list(&payload).items,
        Err(e) => {
            debug!(error = %e, "{what} fetch failed, defaulting to empty");
            Vec::new()
        }
    }
}
