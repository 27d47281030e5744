use actix_web::http::{Method, StatusCode};
use actix_web::web::{self, BytesMut, Data, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse};
use futures_util::StreamExt;

use super::error::{ErrorCategory, JobError};
use super::models::{Job, JobRequest};
use super::responses::{reject_request, send_job_created};
use crate::api::log_sink::LogRecord;
use crate::api::state::AppState;
use crate::api::validation::validate_job_request;

/// Single entry point of the service
///
/// Only `POST` creates a job, every other method is rejected with 405.
pub async fn handle_job_request(
    req: HttpRequest,
    payload: web::Payload,
    state: Data<AppState>,
) -> HttpResponse {
    if *req.method() != Method::POST {
        return reject_request(
            state.log.as_ref(),
            &req,
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Method Not Allowed",
            &format!("method {} not allowed", req.method()),
        );
    }

    handle_job_creation(&req, payload, &state).await
}

async fn handle_job_creation(
    req: &HttpRequest,
    payload: web::Payload,
    state: &AppState,
) -> HttpResponse {
    match create_job_from_request(payload, state).await {
        Ok(job) => send_job_created(state.log.as_ref(), job),
        Err(err) => reject_request(
            state.log.as_ref(),
            req,
            status_for(&err),
            "handle_job_creation",
            &err.client_message(),
            &err.to_string(),
        ),
    }
}

/// The only place where an error is turned into an HTTP status
fn status_for(err: &JobError) -> StatusCode {
    match err.category() {
        ErrorCategory::Client => StatusCode::BAD_REQUEST,
        ErrorCategory::Server => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Decode, validate and build a job from the request body
async fn create_job_from_request(
    payload: web::Payload,
    state: &AppState,
) -> Result<Job, JobError> {
    let body = read_body(payload, state.max_payload_size).await?;

    let job_request: JobRequest = serde_json::from_slice(&body)
        .map_err(|e| JobError::validation("request_body", format!("invalid JSON: {}", e)))?;

    if let Err(err) = validate_job_request(&job_request) {
        let message = match err {
            JobError::Validation { message, .. } => message,
            other => other.to_string(),
        };
        return Err(JobError::validation(
            "payload",
            format!("validation failed: {}", message),
        ));
    }

    let job = state
        .jobs
        .create_job(&job_request)
        .map_err(|e| JobError::internal("job_creation", e))?;

    state.log.append(LogRecord::JobCreated {
        id: job.id.clone(),
        name: job.name.clone(),
    });
    Ok(job)
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<BytesMut, JobError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| JobError::Unclassified(Box::new(e)))?;
        if body.len() + chunk.len() > limit {
            return Err(JobError::validation(
                "request_body",
                format!("payload exceeds {} bytes", limit),
            ));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Every path is served by the job handler; only the method matters
pub fn job_config(config: &mut ServiceConfig) {
    config.service(web::resource("/{tail:.*}").to(handle_job_request));
}
