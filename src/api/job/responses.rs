use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use super::dto::{CreatedJobResponse, ErrorResponse};
use super::models::Job;
use crate::api::log_sink::{LogRecord, LogSink, RejectionRecord};

/// Respond with 201 and the created job
///
/// An encoding failure is logged only; the status is already decided.
pub fn send_job_created(log: &dyn LogSink, job: Job) -> HttpResponse {
    let created_job_response = CreatedJobResponse::new(job);

    let mut response = HttpResponse::Created();
    response.content_type(ContentType::json());

    match serde_json::to_string(&created_job_response) {
        Ok(body) => {
            log.append(LogRecord::ResponseSent { body: body.clone() });
            response.body(body)
        }
        Err(e) => {
            log.append(LogRecord::ResponseWriteFailed {
                detail: e.to_string(),
            });
            response.finish()
        }
    }
}

/// Reject a request with a JSON error body and one log record
///
/// # Arguments
/// - `stage` - name of the handler stage that rejected the request
/// - `message` - client-safe text placed in the response body
/// - `detail` - full error text, logged only
pub fn reject_request(
    log: &dyn LogSink,
    req: &HttpRequest,
    status: StatusCode,
    stage: &'static str,
    message: &str,
    detail: &str,
) -> HttpResponse {
    let error_response = ErrorResponse {
        error: status.canonical_reason().unwrap_or("Unknown").to_string(),
        message: message.to_string(),
        status: status.as_u16(),
    };

    let mut response = HttpResponse::build(status);
    response.content_type(ContentType::json());

    let response = match serde_json::to_string(&error_response) {
        Ok(body) => response.body(body),
        Err(e) => {
            log.append(LogRecord::ResponseWriteFailed {
                detail: format!("encoding error response: {}", e),
            });
            response.finish()
        }
    };

    log.append(LogRecord::Rejected(RejectionRecord {
        stage,
        method: req.method().to_string(),
        path: req.path().to_string(),
        remote_addr: req
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        status: status.as_u16(),
        detail: detail.to_string(),
    }));

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::log_sink::MemorySink;
    use actix_web::body::to_bytes;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test::TestRequest;
    use serde_json::{json, Value};

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn created_response_wraps_job() {
        let sink = MemorySink::default();
        let job = Job {
            id: "6f1c2a9e-3b7d-4c1e-9a2b-0d4e5f6a7b8c".to_string(),
            name: "Alice".to_string(),
            body: "Hello".to_string(),
            created_date_time: "2024-01-02T03:04:05Z".to_string(),
        };

        let response = send_job_created(&sink, job.clone());
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = body_json(response).await;
        assert_eq!(body["message"], "Job creation successful");
        let echoed: Job = serde_json::from_value(body["createdJob"].clone()).unwrap();
        assert_eq!(echoed, job);

        assert!(matches!(
            sink.records().as_slice(),
            [LogRecord::ResponseSent { .. }]
        ));
    }

    #[actix_web::test]
    async fn rejection_status_matches_body() {
        let sink = MemorySink::default();
        let req = TestRequest::post()
            .uri("/jobs")
            .peer_addr("10.0.0.7:4100".parse().unwrap())
            .to_http_request();

        let response = reject_request(
            &sink,
            &req,
            StatusCode::INTERNAL_SERVER_ERROR,
            "handle_job_creation",
            "Internal Server Error",
            "internal error during job_creation: boom",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Internal Server Error",
                "message": "Internal Server Error",
                "status": 500,
            })
        );

        assert_eq!(
            sink.rejections(),
            vec![RejectionRecord {
                stage: "handle_job_creation",
                method: "POST".to_string(),
                path: "/jobs".to_string(),
                remote_addr: "10.0.0.7:4100".to_string(),
                status: 500,
                detail: "internal error during job_creation: boom".to_string(),
            }]
        );
    }
}
