//! Clock abstraction consumed by the timer driver.

use std::time::Duration;

/// Shortest interval a clock will schedule; zero would spin.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Callback invoked on every tick of a repeating timer.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Opaque handle to a scheduled repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Source of repeating timers.
///
/// Implementations must stop invoking a timer's callback once `cancel`
/// returns for its handle. Cancelling an unknown handle is a no-op.
pub trait Clock {
    fn schedule_repeating(&mut self, interval: Duration, on_tick: TickCallback) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}
