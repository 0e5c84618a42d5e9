/// Something that runs a task later. Dropping the returned handle must
/// cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Runs only the last task of a burst, once the burst has been quiet for
/// `delay_ms`.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replaces any pending task with `task` and restarts the quiet period.
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Drops the pending task, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Browser timers via `setTimeout`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "web")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    struct Slot {
        delay_ms: u32,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    struct CancelOnDrop(Rc<Cell<bool>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[derive(Clone, Default)]
    struct ManualScheduler {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    impl ManualScheduler {
        /// Fires every task whose handle is still alive.
        fn fire_all(&self) {
            let slots: Vec<Slot> = self.slots.borrow_mut().drain(..).collect();
            for slot in slots {
                if !slot.cancelled.get() {
                    if let Some(task) = slot.task {
                        task();
                    }
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = CancelOnDrop;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> CancelOnDrop {
            let cancelled = Rc::new(Cell::new(false));
            self.slots.borrow_mut().push(Slot {
                delay_ms,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            CancelOnDrop(cancelled)
        }
    }

    #[test]
    fn test_burst_runs_last_task_once() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 100);
        let seen = Rc::new(RefCell::new(Vec::new()));

        for offset in [10, 20, 30] {
            let seen = seen.clone();
            debouncer.call(move || seen.borrow_mut().push(offset));
        }
        scheduler.fire_all();

        assert_eq!(*seen.borrow(), vec![30]);
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 100);
        let ran = Rc::new(Cell::new(false));

        let flag = ran.clone();
        debouncer.call(move || flag.set(true));
        debouncer.cancel();
        scheduler.fire_all();

        assert!(!ran.get());
    }

    #[test]
    fn test_tasks_use_configured_delay() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 250);
        debouncer.call(|| {});

        assert_eq!(scheduler.slots.borrow()[0].delay_ms, 250);
        assert_eq!(debouncer.delay_ms(), 250);
    }

    #[test]
    fn test_dropping_debouncer_cancels() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(Cell::new(false));
        {
            let mut debouncer = Debouncer::new(scheduler.clone(), 100);
            let flag = ran.clone();
            debouncer.call(move || flag.set(true));
        }
        scheduler.fire_all();

        assert!(!ran.get());
    }
}
