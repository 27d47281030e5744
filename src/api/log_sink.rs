use std::fmt;

use tracing::{error, info, warn};

/// Operator-facing details of a rejected request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionRecord {
    pub stage: &'static str,
    pub method: String,
    pub path: String,
    pub remote_addr: String,
    pub status: u16,
    /// Full error text, may contain more than the client was told
    pub detail: String,
}

impl fmt::Display for RejectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} from {} -> {} ({})",
            self.stage, self.method, self.path, self.remote_addr, self.status, self.detail
        )
    }
}

/// One entry emitted by the request pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    JobCreated { id: String, name: String },
    ResponseSent { body: String },
    ResponseWriteFailed { detail: String },
    Rejected(RejectionRecord),
}

/// Append-only destination for pipeline log records
///
/// Shared by every in-flight request, so each append must land as a whole entry.
pub trait LogSink: Send + Sync {
    fn append(&self, record: LogRecord);
}

/// Forwards records to the global tracing subscriber, one event per record
pub struct TracingSink;

impl LogSink for TracingSink {
    fn append(&self, record: LogRecord) {
        match record {
            LogRecord::JobCreated { id, name } => {
                info!(job_id = %id, job_name = %name, "job ({}) created with id ({})", name, id);
            }
            LogRecord::ResponseSent { body } => {
                info!("Response sent: {}", body);
            }
            LogRecord::ResponseWriteFailed { detail } => {
                error!("Error writing to response body: {}", detail);
            }
            LogRecord::Rejected(rejection) if rejection.status >= 500 => {
                error!(
                    stage = rejection.stage,
                    method = %rejection.method,
                    path = %rejection.path,
                    remote_addr = %rejection.remote_addr,
                    status = rejection.status,
                    error = %rejection.detail,
                    "{}",
                    rejection
                );
            }
            LogRecord::Rejected(rejection) => {
                warn!(
                    stage = rejection.stage,
                    method = %rejection.method,
                    path = %rejection.path,
                    remote_addr = %rejection.remote_addr,
                    status = rejection.status,
                    error = %rejection.detail,
                    "{}",
                    rejection
                );
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemorySink;

#[cfg(test)]
mod memory {
    use std::sync::Mutex;

    use super::{LogRecord, LogSink, RejectionRecord};

    /// Keeps every appended record for later assertions
    #[derive(Default)]
    pub struct MemorySink {
        records: Mutex<Vec<LogRecord>>,
    }

    impl MemorySink {
        pub fn records(&self) -> Vec<LogRecord> {
            self.records.lock().unwrap().clone()
        }

        pub fn rejections(&self) -> Vec<RejectionRecord> {
            self.records()
                .into_iter()
                .filter_map(|record| match record {
                    LogRecord::Rejected(rejection) => Some(rejection),
                    _ => None,
                })
                .collect()
        }
    }

    impl LogSink for MemorySink {
        fn append(&self, record: LogRecord) {
            self.records.lock().unwrap().push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn rejection_renders_as_single_line() {
        let record = RejectionRecord {
            stage: "handle_job_creation",
            method: "POST".to_string(),
            path: "/".to_string(),
            remote_addr: "127.0.0.1:5000".to_string(),
            status: 400,
            detail: "validation error in field name: name is a required job field".to_string(),
        };

        assert_eq!(
            record.to_string(),
            "handle_job_creation: POST / from 127.0.0.1:5000 -> 400 \
             (validation error in field name: name is a required job field)"
        );
    }

    #[test]
    fn memory_sink_accepts_concurrent_appends() {
        let sink = Arc::new(MemorySink::default());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        sink.append(LogRecord::JobCreated {
                            id: format!("{}-{}", t, i),
                            name: "job".to_string(),
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.records().len(), 400);
    }
}
