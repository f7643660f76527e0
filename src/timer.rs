//! Cancellable one-shot timers on a virtual clock.
//!
//! Nothing here reads the wall clock: the host moves time forward with
//! [`TimerQueue::advance_to`] / [`TimerQueue::pop_due`], which keeps the
//! presentation loop deterministic under a fixed frame step.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<E> {
    id: TimerId,
    due: Duration,
    event: E,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Arms a one-shot timer firing `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            event,
        });
        id
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|p| p.id == id) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &E> {
        self.pending.iter().map(|p| &p.event)
    }

    /// Removes the earliest timer due at or before `until` and moves the clock to its due time.
    ///
    /// Timers due at the same instant come out in the order they were scheduled.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(index, _)| index)?;

        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.due);
        Some((fired.id, fired.event))
    }

    /// Moves the clock forward without firing anything. Never moves it backwards.
    pub fn advance_to(&mut self, t: Duration) {
        self.now = self.now.max(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_due_order_then_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(200), "late");
        queue.schedule(ms(100), "first");
        queue.schedule(ms(100), "second");

        let fired: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(1000)).map(|(_, e)| e)).collect();
        assert_eq!(fired, vec!["first", "second", "late"]);
        assert_eq!(queue.now(), ms(200));
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), ());
        assert!(queue.pop_due(ms(99)).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(ms(100)).is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(ms(10), 1);
        queue.schedule(ms(20), 2);

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert!(!queue.is_pending(id));
        assert_eq!(queue.pop_due(ms(100)).map(|(_, e)| e), Some(2));
    }

    #[test]
    fn delays_are_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.advance_to(ms(500));
        queue.schedule(ms(100), ());
        assert!(queue.pop_due(ms(599)).is_none());
        assert!(queue.pop_due(ms(600)).is_some());

        queue.advance_to(ms(10));
        assert_eq!(queue.now(), ms(600));
    }
}
