//! Single-active-timer countdown driver.

use crate::machine::TimerCommand;
use crate::timer::clock::{Clock, TimerHandle};
use std::time::Duration;
use tracing::trace;

#[derive(Clone, Copy, Debug)]
struct ActiveTimer {
    handle: TimerHandle,
    generation: u64,
}

/// Owns a clock and at most one live repeating timer.
///
/// Every timer is tagged with a generation number and its ticks are queued
/// on a channel with that tag. Only ticks of the active generation are ever
/// handed out, so a tick queued by a timer that has since been replaced is
/// dropped instead of reaching the next question's countdown.
#[derive(Debug)]
pub struct TimerDriver<C: Clock> {
    clock: C,
    interval: Duration,
    active: Option<ActiveTimer>,
    generation: u64,
    tx: flume::Sender<u64>,
    rx: flume::Receiver<u64>,
}

impl<C: Clock> TimerDriver<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            clock,
            interval,
            active: None,
            generation: 0,
            tx,
            rx,
        }
    }

    /// Cancel any running timer and start a fresh one.
    pub fn restart(&mut self) -> TimerHandle {
        self.stop();

        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        let handle = self.clock.schedule_repeating(
            self.interval,
            Box::new(move || {
                let _ = tx.send(generation);
            }),
        );

        trace!(timer = handle.id(), generation, "timer started");
        self.active = Some(ActiveTimer { handle, generation });
        handle
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            self.clock.cancel(active.handle);
            trace!(timer = active.handle.id(), "timer cancelled");
        }
    }

    /// Honour a command produced by the state machine.
    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Keep => {}
            TimerCommand::Restart => {
                self.restart();
            }
            TimerCommand::Stop => self.stop(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_handle(&self) -> Option<TimerHandle> {
        self.active.map(|a| a.handle)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.active.is_some_and(|a| a.generation == generation)
    }

    /// Take the next queued tick of the active timer without waiting.
    /// Stale ticks are discarded along the way.
    pub fn try_next_tick(&self) -> bool {
        while let Ok(generation) = self.rx.try_recv() {
            if self.is_current(generation) {
                return true;
            }
            trace!(generation, "stale tick dropped");
        }
        false
    }

    /// Wait for the next tick of the active timer. Returns `false` at once
    /// when no timer is running.
    pub async fn next_tick(&self) -> bool {
        while self.active.is_some() {
            match self.rx.recv_async().await {
                Ok(generation) if self.is_current(generation) => return true,
                Ok(generation) => trace!(generation, "stale tick dropped"),
                Err(_) => return false,
            }
        }
        false
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<C: Clock> Drop for TimerDriver<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn driver() -> TimerDriver<ManualClock> {
        TimerDriver::new(ManualClock::new(), Duration::from_secs(1))
    }

    #[test]
    fn restart_keeps_a_single_timer() {
        let mut driver = driver();

        let first = driver.restart();
        let second = driver.restart();

        assert_ne!(first, second);
        assert_eq!(driver.clock().active_timers(), 1);
        assert!(!driver.clock().is_scheduled(first));
        assert_eq!(driver.active_handle(), Some(second));
    }

    #[test]
    fn ticks_arrive_once_per_interval() {
        let mut driver = driver();
        driver.restart();

        driver.clock_mut().advance(Duration::from_secs(2));

        assert!(driver.try_next_tick());
        assert!(driver.try_next_tick());
        assert!(!driver.try_next_tick());
    }

    #[test]
    fn queued_ticks_of_replaced_timer_are_dropped() {
        let mut driver = driver();
        driver.restart();
        driver.clock_mut().advance(Duration::from_secs(3));

        driver.restart();

        assert!(!driver.try_next_tick());
        driver.clock_mut().advance(Duration::from_secs(1));
        assert!(driver.try_next_tick());
    }

    #[test]
    fn stop_cancels_and_silences() {
        let mut driver = driver();
        driver.restart();
        driver.clock_mut().advance(Duration::from_secs(1));

        driver.apply(TimerCommand::Stop);

        assert!(!driver.is_running());
        assert_eq!(driver.clock().active_timers(), 0);
        assert!(!driver.try_next_tick());
    }

    #[test]
    fn keep_leaves_timer_alone() {
        let mut driver = driver();
        let handle = driver.restart();

        driver.apply(TimerCommand::Keep);

        assert_eq!(driver.active_handle(), Some(handle));
    }

    #[tokio::test]
    async fn next_tick_returns_when_idle() {
        let driver = driver();
        assert!(!driver.next_tick().await);
    }

    #[tokio::test]
    async fn next_tick_skips_stale_generations() {
        let mut driver = driver();
        driver.restart();
        driver.clock_mut().advance(Duration::from_secs(2));
        driver.restart();
        driver.clock_mut().advance(Duration::from_secs(1));

        assert!(driver.next_tick().await);
        assert!(!driver.try_next_tick());
    }
}
