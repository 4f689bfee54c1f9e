use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// Something that can run a task later. Dropping the returned handle
/// cancels the task.
pub trait Scheduler {
    type Handle: 'static;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

/// Keeps a browser timer alive; dropping it cancels the timer.
pub enum BrowserTimer {
    Once { _timeout: Timeout },
    Repeat { _interval: Interval },
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Once {
            _timeout: Timeout::new(delay_ms, task),
        }
    }

    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Repeat {
            _interval: Interval::new(period_ms, task),
        }
    }
}

/// Holds at most one pending timer on behalf of a component. Once closed
/// (on unmount) any handle handed to it is dropped right away, so work that
/// resolves after teardown cannot re-arm a timer.
pub struct TimerSlot<H> {
    inner: Rc<RefCell<SlotState<H>>>,
}

struct SlotState<H> {
    handle: Option<H>,
    closed: bool,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlotState { handle: None, closed: false })),
        }
    }
}

impl<H> Clone for TimerSlot<H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<H> PartialEq for TimerSlot<H> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<H> TimerSlot<H> {
    /// Stores `handle`, cancelling whatever was pending before.
    pub fn replace(&self, handle: H) {
        let previous = {
            let mut state = self.inner.borrow_mut();
            if state.closed {
                Some(handle)
            } else {
                state.handle.replace(handle)
            }
        };
        drop(previous);
    }

    /// Cancels the pending timer, if any. The slot stays usable.
    pub fn clear(&self) {
        let previous = self.inner.borrow_mut().handle.take();
        drop(previous);
    }

    pub fn close(&self) {
        let previous = {
            let mut state = self.inner.borrow_mut();
            state.closed = true;
            state.handle.take()
        };
        drop(previous);
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.inner.borrow().handle.is_some()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn once_fires_only_after_its_delay() {
        let scheduler = ManualScheduler::default();
        let (count, mut bump) = counter();
        let _timer = scheduler.once(4_000, Box::new(move || bump()));

        scheduler.advance(3_999);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(10_000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn repeat_fires_every_period_until_dropped() {
        let scheduler = ManualScheduler::default();
        let (count, bump) = counter();
        let timer = scheduler.repeat(6_000, Box::new(bump));

        scheduler.advance(18_000);
        assert_eq!(count.get(), 3);

        drop(timer);
        scheduler.advance(60_000);
        assert_eq!(count.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn slot_replace_cancels_previous_timer() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::default();
        let (first, mut bump_first) = counter();
        let (second, mut bump_second) = counter();

        slot.replace(scheduler.once(1_000, Box::new(move || bump_first())));
        slot.replace(scheduler.once(1_000, Box::new(move || bump_second())));
        scheduler.advance(1_000);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn cleared_slot_cancels_pending_timer_and_accepts_new_ones() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::default();
        let (first, mut bump_first) = counter();
        let (second, mut bump_second) = counter();

        slot.replace(scheduler.once(1_000, Box::new(move || bump_first())));
        slot.clear();
        assert!(!slot.is_armed());
        scheduler.advance(2_000);
        assert_eq!(first.get(), 0);

        slot.replace(scheduler.once(1_000, Box::new(move || bump_second())));
        assert!(slot.is_armed());
        scheduler.advance(1_000);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn closed_slot_refuses_new_timers() {
        let scheduler = ManualScheduler::default();
        let slot = TimerSlot::default();
        let (count, mut bump) = counter();

        slot.close();
        slot.replace(scheduler.once(1_000, Box::new(move || bump())));

        assert!(!slot.is_armed());
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(5_000);
        assert_eq!(count.get(), 0);
    }
}
