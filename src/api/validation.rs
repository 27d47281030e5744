use validator::Validate;

use crate::api::job::error::JobError;
use crate::api::job::models::JobRequest;

/// Fields are checked in this order and the first failure is reported
const FIELD_ORDER: [&str; 2] = ["name", "body"];

/// Validate a decoded job request
///
/// Returns a `JobError::Validation` naming the offending field.
pub fn validate_job_request(req: &JobRequest) -> Result<(), JobError> {
    let validation_errors = match req.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = validation_errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(errors) = field_errors.get(field) {
            let message = errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            return Err(JobError::validation(field, message));
        }
    }

    Err(JobError::validation("payload", validation_errors.to_string()))
}
