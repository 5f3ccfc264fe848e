//! Scheduler backed by Dioxus tasks.
//!
//! Each scheduled callback is a spawned task that sleeps on the tokio timer
//! and then runs on the UI thread. Cancelling drops the task.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use webfolio_core::{Scheduler, TaskHandle};

#[derive(Default)]
pub struct RuntimeScheduler {
    next_id: Cell<u64>,
    tasks: Rc<RefCell<HashMap<TaskHandle, Task>>>,
}

impl RuntimeScheduler {
    fn issue(&self) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        TaskHandle::new(id)
    }
}

impl Scheduler for RuntimeScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = self.issue();
        let tasks = Rc::clone(&self.tasks);
        let spawned = spawn(async move {
            tokio::time::sleep(delay).await;
            tasks.borrow_mut().remove(&handle);
            task();
        });
        self.tasks.borrow_mut().insert(handle, spawned);
        handle
    }

    fn schedule_every(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = self.issue();
        let spawned = spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                task();
            }
        });
        self.tasks.borrow_mut().insert(handle, spawned);
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        if let Some(task) = self.tasks.borrow_mut().remove(&handle) {
            task.cancel();
        }
    }
}
