// A cancellable fixed-period task, polled from the single event loop.
// Nothing runs in the background: `poll` answers "is a tick due now?".

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RepeatingTask {
    period: Duration,
    next_due: Option<Instant>,
}

impl RepeatingTask {
    /// A stopped task. Call `start` to schedule the first tick.
    pub fn new(period: Duration) -> Self {
        Self { period, next_due: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the first tick one period from `now`. Restarting a running
    /// task reschedules it; it never runs twice.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Stop the task. Returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True at most once per elapsed period. Missed periods are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.period;
                self.next_due = Some(if next > now { next } else { now + self.period });
                true
            }
            _ => false,
        }
    }
}
