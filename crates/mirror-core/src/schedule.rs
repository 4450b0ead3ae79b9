//! Single-shot and periodic execution of sync cycles

use crate::activity::{ActivityLog, SyncEvent};
use crate::cancel::CancellationToken;
use crate::config::{Interval, SyncConfig};
use crate::cycle::SyncCycle;
use crate::Result;

/// How a scheduler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every planned cycle ran (single-shot mode).
    Completed,
    /// Periodic mode was stopped through the cancellation token.
    Cancelled,
}

/// Runs a [`SyncCycle`] once, or on a fixed interval until cancelled.
#[derive(Debug, Clone)]
pub struct Scheduler {
    cycle: SyncCycle,
    interval: Interval,
}

impl Scheduler {
    pub fn new(cycle: SyncCycle, interval: Interval) -> Self {
        Self { cycle, interval }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(
            SyncCycle::new(&config.source, &config.destination),
            config.interval,
        )
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Run according to the interval.
    ///
    /// `cancel` is only consulted in periodic mode, before each cycle and
    /// during the wait after it. Errors from a cycle end the run at once.
    pub fn run<L: ActivityLog + ?Sized>(
        &self,
        log: &mut L,
        cancel: &CancellationToken,
    ) -> Result<Outcome> {
        match self.interval.period() {
            None => {
                self.cycle.run(log)?;
                Ok(Outcome::Completed)
            }
            Some(period) => {
                tracing::debug!(secs = self.interval.secs(), "Entering periodic mode");
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    log.emit(&SyncEvent::Syncing)?;
                    self.cycle.run(log)?;
                    log.emit(&SyncEvent::NextRun {
                        secs: self.interval.secs(),
                    })?;
                    log.emit(&SyncEvent::Note(String::new()))?;

                    if cancel.wait_timeout(period) {
                        break;
                    }
                }
                log.emit(&SyncEvent::Stopped)?;
                Ok(Outcome::Cancelled)
            }
        }
    }
}
