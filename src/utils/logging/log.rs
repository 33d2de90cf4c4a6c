//! Stage logging with consistent format

use std::path::Path;
use std::time::Duration;

/// Log the start of a stage that reads `path`
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the end of a stage with the number of items it produced
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!("Finished {operation}: {items} items in {duration:?}"),
        None => log::info!("Finished {operation}: {items} items"),
    }
}
