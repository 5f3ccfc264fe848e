//! Cancellable deferred work.
//!
//! Page transitions are fire-and-forget callbacks scheduled after a delay.
//! Controllers never sleep themselves; they hand callbacks to a [`Scheduler`]
//! and keep the returned [`TaskHandle`] so a superseding transition can
//! cancel the stale one.
//!
//! [`ManualScheduler`] is a virtual clock for tests: nothing runs until
//! [`ManualScheduler::advance`] moves time forward.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Identifier of a scheduled callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Deferred callback execution on the UI thread.
///
/// Cancelling a handle that already fired, was already cancelled, or was
/// never issued is a no-op.
pub trait Scheduler {
    /// Run `task` once after `delay`
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Run `task` every `period` until cancelled
    fn schedule_every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Drop a pending task
    fn cancel(&self, handle: TaskHandle);
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Every(Duration, Box<dyn FnMut()>),
}

/// A task waiting in the manual scheduler's queue
struct ScheduledTask {
    /// Virtual time at which the task should run
    run_at: Duration,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    handle: TaskHandle,
    job: Job,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.run_at == other.run_at && self.seq == other.seq
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Deterministic scheduler driven by an explicit virtual clock
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    next_seq: Cell<u64>,
    tasks: RefCell<BinaryHeap<ScheduledTask>>,
    live: RefCell<HashSet<TaskHandle>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks that have not fired or been cancelled
    pub fn pending(&self) -> usize {
        self.live.borrow().len()
    }

    /// Whether `handle` is still waiting to run
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.live.borrow().contains(&handle)
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Callbacks may schedule or cancel other tasks; newly scheduled tasks
    /// that fall inside the window run in the same call.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;

        while let Some(task) = self.pop_due(target) {
            self.now.set(task.run_at);
            match task.job {
                Job::Once(job) => {
                    self.live.borrow_mut().remove(&task.handle);
                    job();
                }
                Job::Every(period, mut job) => {
                    job();
                    // Reschedule unless the callback cancelled itself
                    if self.live.borrow().contains(&task.handle) {
                        self.push(task.run_at + period, task.handle, Job::Every(period, job));
                    }
                }
            }
        }

        self.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut tasks = self.tasks.borrow_mut();
        let due = tasks.peek().is_some_and(|task| task.run_at <= target);
        if due {
            tasks.pop()
        } else {
            None
        }
    }

    fn issue(&self) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = TaskHandle::new(id);
        self.live.borrow_mut().insert(handle);
        handle
    }

    fn push(&self, run_at: Duration, handle: TaskHandle, job: Job) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.tasks.borrow_mut().push(ScheduledTask {
            run_at,
            seq,
            handle,
            job,
        });
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = self.issue();
        self.push(self.now.get() + delay, handle, Job::Once(task));
        handle
    }

    fn schedule_every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = self.issue();
        self.push(self.now.get() + period, handle, Job::Every(period, task));
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        if self.live.borrow_mut().remove(&handle) {
            self.tasks.borrow_mut().retain(|task| task.handle != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Box<dyn FnOnce()> {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn once_tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule_once(Duration::from_millis(300), make("slow"));
        scheduler.schedule_once(Duration::from_millis(200), make("fast"));

        scheduler.advance(Duration::from_millis(199));
        assert!(log.borrow().is_empty());

        scheduler.advance(Duration::from_millis(200));
        assert_eq!(*log.borrow(), vec!["fast", "slow"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(399));
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule_once(Duration::from_millis(10), make("first"));
        scheduler.schedule_once(Duration::from_millis(10), make("second"));
        scheduler.advance(Duration::from_millis(10));

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        let handle = scheduler.schedule_once(Duration::from_millis(50), make("stale"));
        assert!(scheduler.is_pending(handle));
        scheduler.cancel(handle);
        assert!(!scheduler.is_pending(handle));

        scheduler.advance(Duration::from_secs(1));
        assert!(log.borrow().is_empty());

        // Cancelling twice, or cancelling a fired task, is harmless
        scheduler.cancel(handle);
        scheduler.cancel(TaskHandle::new(999));
    }

    #[test]
    fn repeating_task_fires_each_period_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();

        let handle = scheduler.schedule_every(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_millis(350));
        assert_eq!(count.get(), 3);

        scheduler.cancel(handle);
        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn callbacks_can_schedule_follow_up_work() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (log, make) = recorder();

        let inner = scheduler.clone();
        let follow_up = make("follow-up");
        scheduler.schedule_once(
            Duration::from_millis(10),
            Box::new(move || {
                inner.schedule_once(Duration::from_millis(10), follow_up);
            }),
        );

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.borrow(), vec!["follow-up"]);
    }
}
