//! Periodic triggers and the pending event queue.
//!
//! The scheduler owns two independent one-shot triggers. When a trigger
//! fires it is disarmed and its event is queued; it only fires again after
//! the dashboard re-arms it with a [`Command::Rearm`](crate::dashboard::Command).
//! Time is passed in explicitly so the scheduler can be driven by tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use fyi_core::RefreshConfig;

use crate::event::DashboardEvent;

/// Which periodic trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Clock and CPU refresh, ~1s
    Fast,
    /// Weather refresh, ~60s
    Slow,
}

/// A trigger with a fixed period and an optional deadline.
///
/// Deadlines stay on the grid set by the first arming: a re-arm schedules
/// one period after the deadline that last fired, not after the handler
/// finished. Ticks missed while the loop was busy are skipped, not replayed.
#[derive(Debug, Clone)]
pub struct PeriodicTrigger {
    period: Duration,
    deadline: Option<Instant>,
    /// Deadline of the most recent firing
    fired: Option<Instant>,
}

impl PeriodicTrigger {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
            fired: None,
        }
    }

    /// Fire one period after `now`, starting a fresh grid.
    pub fn arm(&mut self, now: Instant) {
        self.fired = None;
        self.deadline = Some(now + self.period);
    }

    /// Fire at `now` (next poll).
    pub fn arm_immediately(&mut self, now: Instant) {
        self.fired = None;
        self.deadline = Some(now);
    }

    /// Schedule the next firing one period after the last one, moved
    /// forward by whole periods until it lies after `now`.
    pub fn rearm(&mut self, now: Instant) {
        let Some(fired) = self.fired else {
            self.arm(now);
            return;
        };
        let mut next = fired + self.period;
        if next <= now && !self.period.is_zero() {
            let behind = now.duration_since(next).as_nanos() / self.period.as_nanos();
            let skip = u32::try_from(behind + 1).unwrap_or(u32::MAX);
            next += self.period.saturating_mul(skip);
        }
        self.deadline = Some(next.max(now));
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and return true if the deadline has passed.
    fn take_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.fired = Some(deadline);
                true
            }
            _ => false,
        }
    }
}

/// Two periodic triggers plus the queue of events waiting to be handled.
#[derive(Debug)]
pub struct Scheduler {
    fast: PeriodicTrigger,
    slow: PeriodicTrigger,
    queue: VecDeque<DashboardEvent>,
    started: bool,
}

impl Scheduler {
    pub fn new(fast_period: Duration, slow_period: Duration) -> Self {
        Self {
            fast: PeriodicTrigger::new(fast_period),
            slow: PeriodicTrigger::new(slow_period),
            queue: VecDeque::new(),
            started: false,
        }
    }

    pub fn from_config(refresh: &RefreshConfig) -> Self {
        Self::new(refresh.fast_interval(), refresh.slow_interval())
    }

    /// Arm both triggers. With `slow_due_now` the first slow tick fires on
    /// the next poll instead of one full period later.
    pub fn start(&mut self, now: Instant, slow_due_now: bool) {
        self.fast.arm(now);
        if slow_due_now {
            self.slow.arm_immediately(now);
        } else {
            self.slow.arm(now);
        }
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Re-arm a trigger that has fired, keeping it on its period grid.
    pub fn rearm(&mut self, trigger: Trigger, now: Instant) {
        self.trigger_mut(trigger).rearm(now);
    }

    pub fn trigger(&self, trigger: Trigger) -> &PeriodicTrigger {
        match trigger {
            Trigger::Fast => &self.fast,
            Trigger::Slow => &self.slow,
        }
    }

    fn trigger_mut(&mut self, trigger: Trigger) -> &mut PeriodicTrigger {
        match trigger {
            Trigger::Fast => &mut self.fast,
            Trigger::Slow => &mut self.slow,
        }
    }

    /// How long the loop may wait for input before a trigger is due.
    ///
    /// Returns `None` when nothing is armed.
    pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
        [self.fast.deadline, self.slow.deadline]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Queue events for every trigger whose deadline has passed. `wall` is
    /// the timestamp carried by a fast tick.
    pub fn collect_due(&mut self, now: Instant, wall: DateTime<Local>) {
        if self.fast.take_if_due(now) {
            self.queue.push_back(DashboardEvent::FastTick(wall));
        }
        if self.slow.take_if_due(now) {
            self.queue.push_back(DashboardEvent::SlowTick);
        }
    }

    /// Queue an event from outside the timers (input, resize).
    pub fn enqueue(&mut self, event: DashboardEvent) {
        self.queue.push_back(event);
    }

    /// Next event to handle, oldest first.
    pub fn next_event(&mut self) -> Option<DashboardEvent> {
        self.queue.pop_front()
    }

    /// Drop everything still queued. Returns how many events were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
