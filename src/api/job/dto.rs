use serde::Serialize;

use super::models::Job;

pub const JOB_CREATED_MESSAGE: &str = "Job creation successful";

/// Response for a successful job creation
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJobResponse {
    pub message: String,
    pub created_job: Job,
}

impl CreatedJobResponse {
    pub fn new(created_job: Job) -> Self {
        Self {
            message: JOB_CREATED_MESSAGE.to_string(),
            created_job,
        }
    }
}

/// Body of every rejected request
///
/// `status` always carries the status code of the response it is sent with.
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
}
