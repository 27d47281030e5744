use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload sent by a client to submit a job
///
/// Missing keys decode to empty strings so that they are rejected by
/// validation rather than by the JSON decoder.
#[derive(Deserialize, Debug, Default, Validate)]
pub struct JobRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is a required job field"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "body is a required job field"))]
    pub body: String,
}

/// A job accepted by the server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub name: String,
    pub body: String,
    pub created_date_time: String,
}
