//! Helper utilities

mod log_sanitizer;

pub use log_sanitizer::truncate_for_log;
