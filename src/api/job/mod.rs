pub mod clock;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod id_generator;
pub mod models;
pub mod responses;
pub mod service;

// Re-export commonly used types
pub use service::JobService;
