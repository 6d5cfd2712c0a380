use serde_json::Value;

use super::endpoints;
use crate::client::ApiClient;
use crate::error::Result;
use crate::model::EnrollmentPayload;

pub struct EnrollmentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EnrollmentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> EnrollmentApi<'a> {
        EnrollmentApi { client }
    }

    /// Student-side enrollment request; lands in the pending queue.
    pub async fn enroll(&self, payload: &EnrollmentPayload) -> Result<Value> {
        self.client.post(endpoints::ENROLL, Some(payload)).await
    }

    /// Admin-side approval of a pending enrollment.
    pub async fn approve(&self, payload: &EnrollmentPayload) -> Result<Value> {
        self.client.post(endpoints::ENROLL_APPROVE, Some(payload)).await
    }

    pub async fn cancel(&self, payload: &EnrollmentPayload) -> Result<Value> {
        self.client.post(endpoints::ENROLL_CANCEL, Some(payload)).await
    }
}
