use std::sync::Arc;

use chrono::SecondsFormat;

use super::clock::{Clock, SystemClock};
use super::error::GenerationError;
use super::id_generator::{IdGenerator, UuidV4Generator};
use super::models::{Job, JobRequest};

/// Builds jobs from validated requests
///
/// Holds no per-request state; the same service is shared by all handlers.
pub struct JobService {
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl JobService {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// Create a job with a fresh id, stamped with the current UTC time
    ///
    /// # Returns
    /// - `Ok(Job)` - fully built job
    /// - `Err(GenerationError)` - no id could be generated, nothing was built
    pub fn create_job(&self, req: &JobRequest) -> Result<Job, GenerationError> {
        let id = self.ids.generate_id()?;

        Ok(Job {
            id,
            name: req.name.clone(),
            body: req.body.clone(),
            created_date_time: self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

impl Default for JobService {
    fn default() -> Self {
        Self::new(Arc::new(UuidV4Generator), Arc::new(SystemClock))
    }
}

#[cfg(test)]
pub mod testing {
    use std::io;

    use chrono::{DateTime, TimeZone, Utc};

    use super::super::clock::Clock;
    use super::super::error::GenerationError;
    use super::super::id_generator::IdGenerator;

    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
            FixedClock(Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    pub struct FixedId(pub &'static str);

    impl IdGenerator for FixedId {
        fn generate_id(&self) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    /// Behaves like an unavailable entropy source
    pub struct FailingIds;

    impl IdGenerator for FailingIds {
        fn generate_id(&self) -> Result<String, GenerationError> {
            Err(GenerationError(Box::new(io::Error::new(
                io::ErrorKind::Other,
                "entropy source unavailable",
            ))))
        }
    }
}
