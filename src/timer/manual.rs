//! Deterministic clock driven by explicit `advance` calls.

use crate::timer::clock::{Clock, TickCallback, TimerHandle, MIN_INTERVAL};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

struct ScheduledTimer {
    interval: Duration,
    next_due: Duration,
    on_tick: TickCallback,
}

/// Virtual clock. Time only moves when [`ManualClock::advance`] is called,
/// which fires every due callback in due-time order.
///
/// # Example
///
/// ```rust
/// use quizmind::timer::{Clock, ManualClock};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let fired = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&fired);
///
/// let mut clock = ManualClock::new();
/// clock.schedule_repeating(
///     Duration::from_secs(1),
///     Box::new(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     }),
/// );
///
/// clock.advance(Duration::from_millis(2500));
/// assert_eq!(fired.load(Ordering::SeqCst), 2);
/// ```
#[derive(Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, ScheduledTimer>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle.id())
    }

    /// Earliest time any live timer is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.next_due).min()
    }

    /// Move time forward by `by`, firing due callbacks. Returns the number of
    /// callbacks fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.now + by;
        let mut fired = 0;

        loop {
            let due = self
                .timers
                .iter()
                .filter(|(_, timer)| timer.next_due <= target)
                .min_by_key(|(id, timer)| (timer.next_due, **id))
                .map(|(id, _)| *id);

            let Some(id) = due else {
                break;
            };
            let Some(timer) = self.timers.get_mut(&id) else {
                break;
            };

            self.now = timer.next_due;
            timer.next_due += timer.interval;
            (timer.on_tick)();
            fired += 1;
        }

        self.now = target;
        fired
    }
}

impl Clock for ManualClock {
    fn schedule_repeating(&mut self, interval: Duration, on_tick: TickCallback) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        self.next_id += 1;
        let id = self.next_id;

        self.timers.insert(
            id,
            ScheduledTimer {
                interval,
                next_due: self.now + interval,
                on_tick,
            },
        );
        TimerHandle::new(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle.id());
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now)
            .field("active_timers", &self.timers.len())
            .finish()
    }
}
