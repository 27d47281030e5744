use std::sync::Arc;

use crate::api::job::JobService;
use crate::api::log_sink::LogSink;

/// Shared by every request handler through `web::Data`
pub struct AppState {
    pub jobs: JobService,
    pub log: Arc<dyn LogSink>,
    /// Largest accepted request body, in bytes
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(jobs: JobService, log: Arc<dyn LogSink>, max_payload_size: usize) -> Self {
        AppState {
            jobs,
            log,
            max_payload_size,
        }
    }
}
