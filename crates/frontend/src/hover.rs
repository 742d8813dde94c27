use dioxus::core::Task;

/// Delay before a hover or unhover is reported.
pub const HOVER_DELAY_MS: u32 = 100;

/// Handle to a scheduled callback that can be called off.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Keeps at most one scheduled callback alive. Scheduling a new one cancels
/// whatever was still pending, so only the latest intent fires.
pub struct Debounce<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> Default for Debounce<H> {
    fn default() -> Self {
        Debounce { pending: None }
    }
}

impl<H: Cancel> Debounce<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending callback, then store the one `schedule` creates.
    pub fn schedule(&mut self, schedule: impl FnOnce() -> H) {
        self.cancel();
        self.pending = Some(schedule());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records which handles were cancelled.
    struct FakeHandle {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeHandle {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn test_dioxus_task_is_debounceable() {
        fn debounce_of<H: Cancel>() -> Debounce<H> {
            Debounce::new()
        }
        let debounce = debounce_of::<Task>();
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_new_schedule_cancels_previous() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut debounce = Debounce::new();

        for id in 1..=3 {
            let log = cancelled.clone();
            debounce.schedule(|| FakeHandle { id, cancelled: log });
        }

        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(debounce.is_pending());
    }

    #[test]
    fn test_cancel_clears_pending() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut debounce = Debounce::new();
        let log = cancelled.clone();
        debounce.schedule(|| FakeHandle { id: 7, cancelled: log });

        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(*cancelled.borrow(), vec![7]);

        debounce.cancel();
        assert_eq!(*cancelled.borrow(), vec![7]);
    }

    #[test]
    fn test_schedule_runs_cancel_before_creating_next() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut debounce = Debounce::new();

        let log = events.clone();
        debounce.schedule(|| FakeHandle { id: 1, cancelled: log });

        let log = events.clone();
        debounce.schedule(|| {
            log.borrow_mut().push(100);
            FakeHandle { id: 2, cancelled: log.clone() }
        });

        assert_eq!(*events.borrow(), vec![1, 100]);
    }
}
