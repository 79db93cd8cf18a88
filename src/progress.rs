//! Progress reporting for downloads.

/// Progress of a single download.
#[derive(Debug, Clone)]
pub struct TransferProgress {
    /// Bytes written so far
    pub done: u64,
    /// Expected size (the Content-Length, or `done` when the server sent none)
    pub total: u64,
    /// Local file name
    pub filename: String,
}

impl TransferProgress {
    pub fn new(done: u64, total: u64, filename: impl Into<String>) -> Self {
        Self {
            done,
            total,
            filename: filename.into(),
        }
    }

    /// Progress as a percentage (0.0 to 100.0).
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.done as f64 / self.total as f64) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done >= self.total
    }
}

/// Callback invoked after every chunk. Returning `false` cancels the download.
pub type ProgressCallback = Box<dyn FnMut(&TransferProgress) -> bool + Send>;
