//! Real-time clock backed by tokio tasks.

use crate::timer::clock::{Clock, TickCallback, TimerHandle, MIN_INTERVAL};
use crate::timer::error::TimerError;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Clock whose timers are spawned tokio tasks.
///
/// The first tick of a timer arrives one full interval after scheduling.
/// Cancelling aborts the task; dropping the clock aborts every task it owns.
#[derive(Debug)]
pub struct TokioClock {
    runtime: Handle,
    next_id: u64,
    tasks: HashMap<u64, JoinHandle<()>>,
}

impl TokioClock {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Clock bound to the runtime of the calling context.
    pub fn current() -> Result<Self, TimerError> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        Ok(Self::new(runtime))
    }

    pub fn active_timers(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Clock for TokioClock {
    fn schedule_repeating(&mut self, interval: Duration, mut on_tick: TickCallback) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        self.next_id += 1;
        let id = self.next_id;

        let start = Instant::now() + interval;
        let task = self.runtime.spawn(async move {
            let mut ticker = time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });

        self.tasks.insert(id, task);
        TimerHandle::new(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle.id()) {
            task.abort();
        }
    }
}

impl Drop for TokioClock {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
