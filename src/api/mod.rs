pub mod job;
pub mod log_sink;
pub mod state;
pub mod validation;
