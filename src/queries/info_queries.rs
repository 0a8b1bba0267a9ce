use chrono::{DateTime, Local};

use crate::db::Directory;

/// Snapshot of the directory size at a given moment.
#[derive(Debug, Clone)]
pub struct DirectoryInfo {
    pub count: usize,
    pub generated_at: DateTime<Local>,
}

impl DirectoryInfo {
    /// Renders the informational page fragment.
    pub fn to_html(&self) -> String {
        format!(
            "<p>Phonebook has information for {} people</p>\n<p>{}</p>\n",
            self.count,
            format_timestamp(&self.generated_at)
        )
    }
}

/// Recomputed on every call; never cached.
pub fn info(directory: &Directory) -> DirectoryInfo {
    DirectoryInfo {
        count: directory.len(),
        generated_at: Local::now(),
    }
}

/// e.g. `Mon Oct 19 2026 14:03:11 GMT+0200`
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}
