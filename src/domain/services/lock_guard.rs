//! Lock guard - waits for a freshly created file to be released
//!
//! A creation notification can arrive while the producer is still writing.
//! The guard probes for exclusive access and polls until it gets it or the
//! wait budget runs out.

use std::path::Path;
use std::time::Duration;

use crate::domain::ports::FileStore;
use crate::error::{ShapeError, ShapeResult};

/// Delay between two lock probes
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Probes per second of wait budget
pub const POLLS_PER_SECOND: u64 = 10;

/// Bounded wait for exclusive access to a file
#[derive(Debug, Clone)]
pub struct LockGuard<F> {
    store: F,
    poll_interval: Duration,
}

impl<F: FileStore> LockGuard<F> {
    pub fn new(store: F) -> Self {
        Self {
            store,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the sleep between probes. The number of probes per second
    /// of budget stays fixed.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Whether another party still holds the file.
    ///
    /// Any failure to get exclusive access counts as locked.
    pub fn is_locked(&self, path: &Path) -> ShapeResult<bool> {
        if !self.store.exists(path) {
            return Err(ShapeError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(self.store.probe_exclusive(path).is_err())
    }

    /// Poll until the file is free, failing with `LockTimeout` after
    /// `max_seconds * 10` probes. A budget of 0 skips the wait.
    pub fn wait_until_unlocked(&self, path: &Path, max_seconds: u64) -> ShapeResult<()> {
        if max_seconds == 0 {
            if !self.store.exists(path) {
                return Err(ShapeError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(());
        }

        let max_polls = max_seconds * POLLS_PER_SECOND;
        let mut polls = 0;
        while self.is_locked(path)? {
            std::thread::sleep(self.poll_interval);
            polls += 1;
            if polls >= max_polls {
                return Err(ShapeError::LockTimeout {
                    path: path.to_path_buf(),
                    seconds: max_seconds,
                });
            }
        }
        Ok(())
    }
}
