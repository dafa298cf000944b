use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::timestamp::truncate_to_millis;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock, millisecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        truncate_to_millis(OffsetDateTime::now_utc())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Repeating clock tick owned by whoever displays the window.
///
/// A background task reads the clock every `period` and publishes the value.
/// Dropping the ticker aborts the task, so no periodic work outlives it.
pub struct Ticker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<OffsetDateTime>,
    period: Duration,
}

impl Ticker {
    /// Must be called from within a tokio runtime.
    pub fn start<C>(clock: C, period: Duration) -> Self
    where
        C: Clock + Send + 'static,
    {
        let (tx, rx) = watch::channel(clock.now());
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(clock.now()).is_err() {
                    break;
                }
            }
        });
        debug!(period_ms = period.as_millis() as u64, "ticker started");

        Self {
            handle,
            rx,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Latest published instant.
    pub fn now(&self) -> OffsetDateTime {
        *self.rx.borrow()
    }

    /// Returns the new instant if a tick arrived since the last call.
    pub fn poll_tick(&mut self) -> Option<OffsetDateTime> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<OffsetDateTime> {
        self.rx.clone()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("ticker stopped");
    }
}
