use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// One-shot timer source. Dropping the returned handle cancels the callback
/// if it has not fired yet.
pub trait Timer {
    type Handle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Trailing-edge debounce: each `call` restarts the quiet period, and the
/// callback runs once after `delay_ms` without further calls.
pub struct Debouncer<T: Timer = BrowserTimer> {
    timer: T,
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<T::Handle>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self::with_timer(BrowserTimer, delay_ms, callback)
    }
}

impl<T: Timer> Debouncer<T> {
    pub fn with_timer(timer: T, delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            timer,
            delay_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self) {
        let callback = Rc::clone(&self.callback);
        let handle = self.timer.start(self.delay_ms, Box::new(move || callback()));
        // Dropping the previous handle clears it.
        self.pending.replace(Some(handle));
    }

    pub fn cancel(&self) {
        self.pending.take();
    }
}

impl<T: Timer> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Task {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    /// Manually advanced clock holding scheduled callbacks.
    #[derive(Default)]
    struct FakeClock {
        now: Cell<u64>,
        next_id: Cell<u64>,
        tasks: RefCell<Vec<Task>>,
    }

    impl FakeClock {
        fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Task> = {
                let mut tasks = self.tasks.borrow_mut();
                let (due, waiting): (Vec<Task>, Vec<Task>) = tasks.drain(..).partition(|t| t.due <= now);
                *tasks = waiting;
                due
            };
            for task in due {
                (task.callback)();
            }
        }

        fn scheduled(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    struct FakeTimer(Rc<FakeClock>);

    struct FakeHandle {
        id: u64,
        clock: Rc<FakeClock>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.clock.tasks.borrow_mut().retain(|t| t.id != self.id);
        }
    }

    impl Timer for FakeTimer {
        type Handle = FakeHandle;

        fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> FakeHandle {
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            let due = self.0.now.get() + u64::from(delay_ms);
            self.0.tasks.borrow_mut().push(Task { id, due, callback });
            FakeHandle { id, clock: Rc::clone(&self.0) }
        }
    }

    fn debouncer(delay_ms: u32) -> (Rc<FakeClock>, Rc<Cell<u32>>, Debouncer<FakeTimer>) {
        let clock = Rc::new(FakeClock::default());
        let runs = Rc::new(Cell::new(0));
        let debouncer = Debouncer::with_timer(FakeTimer(Rc::clone(&clock)), delay_ms, {
            let runs = Rc::clone(&runs);
            move || runs.set(runs.get() + 1)
        });
        (clock, runs, debouncer)
    }

    #[test]
    fn burst_collapses_into_one_trailing_run() {
        let (clock, runs, debouncer) = debouncer(100);
        debouncer.call();
        clock.advance(30);
        debouncer.call();
        clock.advance(30);
        debouncer.call();
        assert_eq!(clock.scheduled(), 1);

        clock.advance(99);
        assert_eq!(runs.get(), 0);
        clock.advance(1);
        assert_eq!(runs.get(), 1);

        clock.advance(1000);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn each_call_restarts_the_quiet_period() {
        let (clock, runs, debouncer) = debouncer(100);
        debouncer.call();
        clock.advance(90);
        debouncer.call();
        clock.advance(90);
        assert_eq!(runs.get(), 0);
        clock.advance(10);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn separate_bursts_run_separately() {
        let (clock, runs, debouncer) = debouncer(100);
        debouncer.call();
        clock.advance(150);
        debouncer.call();
        debouncer.call();
        clock.advance(150);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn cancel_stops_pending_run() {
        let (clock, runs, debouncer) = debouncer(100);
        debouncer.call();
        debouncer.cancel();
        assert_eq!(clock.scheduled(), 0);
        clock.advance(1000);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn drop_stops_pending_run() {
        let (clock, runs, debouncer) = debouncer(100);
        debouncer.call();
        drop(debouncer);
        clock.advance(1000);
        assert_eq!(runs.get(), 0);
    }
}
