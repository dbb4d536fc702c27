/// Observer for coarse pipeline progress.
///
/// Decouples the orchestrator from any specific output mechanism (stderr,
/// GUI signals, log crate). Reports are advisory; implementations must not
/// fail. Methods take `&self` so one observer can be shared with the
/// transcription workers' progress callback.
pub trait ProgressObserver: Send + Sync {
    /// Report overall progress as a percentage with a status message.
    fn on_progress(&self, percent: u8, message: &str);
}

/// Silent observer that discards all reports.
pub struct NullProgressObserver;

impl ProgressObserver for NullProgressObserver {
    fn on_progress(&self, _percent: u8, _message: &str) {}
}

/// Observer that forwards reports to the log crate.
pub struct LogProgressObserver;

impl ProgressObserver for LogProgressObserver {
    fn on_progress(&self, percent: u8, message: &str) {
        log::info!("[{percent:3}%] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_is_noop() {
        let observer = NullProgressObserver;
        observer.on_progress(0, "start");
        observer.on_progress(100, "done");
        // No panics = success
    }

    #[test]
    fn test_log_observer_is_sharable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&LogProgressObserver);
    }
}
