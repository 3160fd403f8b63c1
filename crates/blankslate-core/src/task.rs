//! Deferred task queue.
//!
//! Work that must run "after the current layout pass" is posted here and
//! executed when the host loop calls [`process_pending_tasks`]. Tasks run in
//! the order they were posted. A task may post further tasks; those run in
//! the same call once the earlier ones are done.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// A FIFO queue of deferred closures.
pub struct TaskQueue {
    tasks: Mutex<VecDeque<TaskData>>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(VecDeque::new()),
        }
    }

    /// Post a task. Returns an id that can cancel it.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.lock().push_back(TaskData {
            id,
            task: Box::new(task),
        });
        tracing::trace!(target: "blankslate_core::task", id = id.as_u64(), "task posted");
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was still queued.
    pub fn cancel(&self, id: TaskId) -> bool {
        let mut tasks = self.tasks.lock();
        match tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of queued tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Run queued tasks until the queue is empty.
    ///
    /// The lock is released around each task. Returns the number run.
    pub fn process_all(&self) -> usize {
        let mut count = 0;
        loop {
            let next = self.tasks.lock().pop_front();
            let Some(task_data) = next else {
                break;
            };
            tracing::trace!(target: "blankslate_core::task", id = task_data.id.as_u64(), "running task");
            (task_data.task)();
            count += 1;
        }
        count
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

static MAIN_QUEUE: TaskQueue = TaskQueue {
    tasks: Mutex::new(VecDeque::new()),
};

/// Post a task to the process-wide main-thread queue.
pub fn post_task<F>(task: F) -> TaskId
where
    F: FnOnce() + Send + 'static,
{
    MAIN_QUEUE.post(task)
}

/// Cancel a task posted with [`post_task`].
pub fn cancel_task(id: TaskId) -> bool {
    MAIN_QUEUE.cancel(id)
}

/// Number of tasks waiting on the main-thread queue.
pub fn pending_task_count() -> usize {
    MAIN_QUEUE.pending_count()
}

/// Run every task on the main-thread queue. Call this once per turn of the
/// host's run loop, after layout.
pub fn process_pending_tasks() -> usize {
    crate::debug_assert_main_thread!("deferred tasks must run on the main thread");
    MAIN_QUEUE.process_all()
}

static_assertions::assert_impl_all!(TaskQueue: Send, Sync);
