use std::time::{Duration, Instant};

/// A source of fixed-interval ticks.
///
/// The session arms the scheduler when play begins or resumes and disarms it
/// whenever play stops; the event loop asks how long it may wait for input
/// and whether a tick is due.
pub(crate) trait Scheduler {
    /// Begin firing every `interval`, the first tick one interval from now.
    /// Restarting an armed scheduler replaces its interval and deadline.
    fn start(&mut self, interval: Duration);

    /// Stop firing.  No tick is reported after this returns.
    fn stop(&mut self);

    /// Time left until the next tick, or `None` if not armed
    fn until_next(&self, now: Instant) -> Option<Duration>;

    /// Returns `true` if a tick is due at `now`, and if so, schedules the
    /// following one.
    fn fire(&mut self, now: Instant) -> bool;
}

/// A [`Scheduler`] that fires at fixed deadlines measured with [`Instant`].
///
/// Deadlines advance by exactly one interval per tick so that the rate does
/// not drift with processing time.  If the caller falls more than a whole
/// interval behind, the missed ticks are skipped rather than replayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct IntervalTimer {
    armed: Option<Armed>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Armed {
    interval: Duration,
    next_tick: Instant,
}

impl IntervalTimer {
    pub(crate) fn new() -> IntervalTimer {
        IntervalTimer::default()
    }

    #[cfg(test)]
    fn interval(&self) -> Option<Duration> {
        self.armed.map(|a| a.interval)
    }

    fn start_at(&mut self, interval: Duration, now: Instant) {
        self.armed = Some(Armed {
            interval,
            next_tick: now + interval,
        });
    }
}

impl Scheduler for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.start_at(interval, Instant::now());
    }

    fn stop(&mut self) {
        self.armed = None;
    }

    fn until_next(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|a| a.next_tick.saturating_duration_since(now))
    }

    fn fire(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.next_tick {
            return false;
        }
        armed.next_tick += armed.interval;
        if armed.next_tick <= now {
            armed.next_tick = now + armed.interval;
        }
        true
    }
}

/// A [`Scheduler`] for tests: a tick is due whenever it is armed, and it
/// records how it was armed and disarmed.
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ManualScheduler {
    pub(crate) interval: Option<Duration>,
    pub(crate) starts: Vec<Duration>,
    pub(crate) stops: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub(crate) fn armed(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.starts.push(interval);
    }

    fn stop(&mut self) {
        self.interval = None;
        self.stops += 1;
    }

    fn until_next(&self, _now: Instant) -> Option<Duration> {
        self.interval.map(|_| Duration::ZERO)
    }

    fn fire(&mut self, _now: Instant) -> bool {
        self.armed()
    }
}
