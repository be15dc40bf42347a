use gloo_timers::callback::Interval;
use log::debug;

/// Periodic wake-ups. Dropping the returned handle cancels the registration.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers through `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// Owns at most one live auto-advance registration.
///
/// Starting twice or stopping twice is a no-op. Dropping the value stops the
/// timer, so a torn down view can never be ticked again.
pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    /// Returns `false` if a timer was already running.
    pub fn start<F>(&mut self, on_tick: F) -> bool
    where
        F: FnMut() + 'static,
    {
        if self.handle.is_some() {
            debug!("auto-advance already running");
            return false;
        }
        self.handle = Some(self.scheduler.schedule(self.period_ms, Box::new(on_tick)));
        debug!("auto-advance started every {}ms", self.period_ms);
        true
    }

    /// Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                debug!("auto-advance stopped");
                true
            }
            None => false,
        }
    }
}

impl<S: Scheduler> Drop for AutoAdvance<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    struct Registration {
        period_ms: u64,
        next_due: u64,
        callback: Box<dyn FnMut()>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Virtual clock scheduler for tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        now: Rc<Cell<u64>>,
        registrations: Rc<RefCell<Vec<Registration>>>,
    }

    pub(crate) struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualScheduler {
        pub(crate) fn live(&self) -> usize {
            self.registrations
                .borrow()
                .iter()
                .filter(|r| !r.cancelled.get())
                .count()
        }

        pub(crate) fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let mut registrations = self.registrations.borrow_mut();
                let due = registrations
                    .iter_mut()
                    .filter(|r| !r.cancelled.get() && r.next_due <= target)
                    .min_by_key(|r| r.next_due);
                let Some(registration) = due else { break };
                self.now.set(registration.next_due);
                registration.next_due += registration.period_ms;
                (registration.callback)();
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.registrations.borrow_mut().push(Registration {
                period_ms: u64::from(period_ms),
                next_due: self.now.get() + u64::from(period_ms),
                callback,
                cancelled: cancelled.clone(),
            });
            ManualHandle(cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::*;
    use crate::selection::Selection;

    fn highlighter(len: usize) -> (ManualScheduler, AutoAdvance<ManualScheduler>, Rc<RefCell<Selection>>) {
        let scheduler = ManualScheduler::default();
        let mut auto = AutoAdvance::new(scheduler.clone(), 3000);
        let selection = Rc::new(RefCell::new(Selection::new(len).unwrap()));
        let ticking = selection.clone();
        assert!(auto.start(move || {
            ticking.borrow_mut().tick();
        }));
        (scheduler, auto, selection)
    }

    #[test]
    fn selection_does_not_restart_schedule() {
        let (clock, _auto, selection) = highlighter(10);
        clock.advance(9000);
        assert_eq!(selection.borrow().active(), 3);

        clock.advance(2900);
        selection.borrow_mut().select(7).unwrap();
        assert_eq!(selection.borrow().active(), 7);

        clock.advance(100);
        assert_eq!(selection.borrow().active(), 8);
    }

    #[test]
    fn double_start_keeps_one_timer() {
        let (clock, mut auto, selection) = highlighter(4);
        let extra = selection.clone();
        assert!(!auto.start(move || {
            extra.borrow_mut().tick();
        }));
        assert_eq!(clock.live(), 1);
        clock.advance(3000);
        assert_eq!(selection.borrow().active(), 1);
    }

    #[test]
    fn stop_twice_is_a_no_op() {
        let (clock, mut auto, selection) = highlighter(5);
        assert_eq!(clock.live(), 1);
        assert!(auto.stop());
        assert!(!auto.stop());
        assert_eq!(clock.live(), 0);
        clock.advance(60_000);
        assert_eq!(selection.borrow().active(), 0);
    }

    #[test]
    fn dropping_cancels_ticks() {
        let (clock, auto, selection) = highlighter(5);
        clock.advance(3000);
        drop(auto);
        assert_eq!(clock.live(), 0);
        clock.advance(30_000);
        assert_eq!(selection.borrow().active(), 1);
    }

    #[test]
    fn restart_after_stop_uses_fresh_schedule() {
        let (clock, mut auto, selection) = highlighter(6);
        clock.advance(1500);
        auto.stop();
        let ticking = selection.clone();
        assert!(auto.start(move || {
            ticking.borrow_mut().tick();
        }));
        clock.advance(1500);
        assert_eq!(selection.borrow().active(), 0);
        clock.advance(1500);
        assert_eq!(selection.borrow().active(), 1);
    }
}
