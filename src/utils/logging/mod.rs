//! Logging utilities for stage output and progress tracking

pub mod log;
pub mod progress;

pub use self::log::{log_operation_complete, log_operation_start};
pub use self::progress::pass_progress_bar;
