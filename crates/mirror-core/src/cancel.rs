//! Cooperative cancellation for the periodic scheduler
//!
//! Signal handlers only flip an atomic flag. The scheduler looks at the flag
//! before starting a cycle and while waiting between cycles, so a cycle that
//! has started always runs to the end.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Longest uninterrupted sleep inside [`CancellationToken::wait_timeout`].
const POLL_SLICE: Duration = Duration::from_millis(100);

/// Shared flag telling the scheduler to stop.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleep for `timeout` unless cancelled first.
    ///
    /// Returns `true` if the token was (or became) cancelled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_cancelled() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep(POLL_SLICE.min(deadline - now));
        }
    }

    /// Cancel this token on SIGINT or SIGTERM (Ctrl+C on Windows).
    ///
    /// The first signal only sets the flag. A second one while the flag is
    /// still set exits the process with status 1 immediately.
    pub fn cancel_on_signals(&self) -> std::io::Result<()> {
        for &signal in signal_hook::consts::TERM_SIGNALS {
            // Registered first so it sees the flag as it was before this
            // signal's own handler sets it.
            signal_hook::flag::register_conditional_shutdown(signal, 1, Arc::clone(&self.flag))?;
            signal_hook::flag::register(signal, Arc::clone(&self.flag))?;
        }
        Ok(())
    }
}
