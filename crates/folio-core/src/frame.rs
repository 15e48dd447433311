//! Cooperative per-frame scheduling.
//!
//! A [`FrameTask`] runs once per display refresh and is re-submitted after
//! each run until its [`LoopHandle`] is cancelled. [`FrameLoop`] is the
//! host-independent scheduler: whoever owns it calls [`FrameLoop::tick`]
//! from the refresh callback (or from a test).

use std::cell::Cell;
use std::rc::Rc;

/// Work performed once per frame. `now` is the host clock in milliseconds.
pub trait FrameTask {
    fn frame(&mut self, now: f64);
}

impl<F: FnMut(f64)> FrameTask for F {
    fn frame(&mut self, now: f64) {
        self(now)
    }
}

/// Cancellation handle for a scheduled task. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the task before its next frame. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct Scheduled {
    handle: LoopHandle,
    task: Box<dyn FrameTask>,
}

/// Runs every live task once per [`tick`](FrameLoop::tick).
#[derive(Default)]
pub struct FrameLoop {
    tasks: Vec<Scheduled>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` from the next tick onward.
    pub fn spawn<T: FrameTask + 'static>(&mut self, task: T) -> LoopHandle {
        let handle = LoopHandle::new();
        self.tasks.push(Scheduled {
            handle: handle.clone(),
            task: Box::new(task),
        });
        handle
    }

    /// Run one frame of every live task, in spawn order.
    ///
    /// Cancelled tasks are dropped instead of being run, including tasks
    /// cancelled by an earlier task during this same tick. Returns the
    /// number of tasks that ran.
    pub fn tick(&mut self, now: f64) -> usize {
        self.tasks.retain(|s| !s.handle.is_cancelled());
        let mut ran = 0;
        for scheduled in &mut self.tasks {
            if scheduled.handle.is_cancelled() {
                continue;
            }
            scheduled.task.frame(now);
            ran += 1;
        }
        ran
    }

    /// Number of tasks that will run on the next tick.
    pub fn len(&self) -> usize {
        self.tasks
            .iter()
            .filter(|s| !s.handle.is_cancelled())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
