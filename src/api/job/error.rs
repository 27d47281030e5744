use std::error::Error;
use std::fmt;

/// Which side of the connection a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Server,
}

/// The secure random source could not provide bytes for a job id
#[derive(Debug)]
pub struct GenerationError(pub Box<dyn Error>);

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read random bytes: {}", self.0)
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// Failures raised while turning a request into a job
///
/// The variant decides the category; message text is never inspected.
#[derive(Debug)]
pub enum JobError {
    /// The caller sent something we cannot accept
    Validation { field: String, message: String },

    /// Something failed on our side while handling a valid request
    Internal {
        operation: String,
        cause: Box<dyn Error>,
    },

    /// A failure that fits neither of the above
    Unclassified(Box<dyn Error>),
}

impl JobError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        JobError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(operation: impl Into<String>, cause: impl Error + 'static) -> Self {
        JobError::Internal {
            operation: operation.into(),
            cause: Box::new(cause),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            JobError::Validation { .. } => ErrorCategory::Client,
            JobError::Internal { .. } | JobError::Unclassified(_) => ErrorCategory::Server,
        }
    }

    /// Text that is safe to show to the caller
    ///
    /// Server-side failures only expose a generic phrase, the full error goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            JobError::Validation { .. } => self.to_string(),
            JobError::Internal { .. } => "Internal Server Error".to_string(),
            JobError::Unclassified(_) => "Unknown error".to_string(),
        }
    }
}

impl fmt::Display for JobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobError::Validation { field, message } => {
                write!(f, "validation error in field {}: {}", field, message)
            }
            JobError::Internal { operation, cause } => {
                write!(f, "internal error during {}: {}", operation, cause)
            }
            JobError::Unclassified(cause) => write!(f, "unclassified error: {}", cause),
        }
    }
}

impl Error for JobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JobError::Validation { .. } => None,
            JobError::Internal { cause, .. } => Some(cause.as_ref()),
            JobError::Unclassified(cause) => Some(cause.as_ref()),
        }
    }
}
