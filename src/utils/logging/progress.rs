//! Progress bars for the matching passes

use indicatif::{ProgressBar, ProgressStyle};

use crate::models::Category;

/// Template shared by every pass bar
pub const PASS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Progress bar for one pass over `len` objects
///
/// Returns a hidden bar when `visible` is false, so callers can tick it
/// unconditionally.
#[must_use]
pub fn pass_progress_bar(len: usize, category: Category, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    match ProgressStyle::default_bar().template(PASS_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::debug!("Falling back to the default progress style: {e}"),
    }
    pb.set_message(format!("matching {category}"));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_still_counts() {
        let pb = pass_progress_bar(3, Category::Townland, false);
        pb.inc(2);
        assert_eq!(pb.position(), 2);
        assert!(pb.is_hidden());
    }

    #[test]
    fn visible_bar_has_length() {
        let pb = pass_progress_bar(5, Category::Barony, true);
        assert_eq!(pb.length(), Some(5));
        pb.finish_and_clear();
    }
}
