//! Next-tick task queue.
//!
//! Work scheduled here runs after the current synchronous handler finishes,
//! when the page loop drains the queue. Tasks can be cancelled until then.

use std::collections::VecDeque;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// FIFO of deferred tasks.
#[derive(Debug)]
pub struct TickQueue<T> {
    next_id: u64,
    pending: VecDeque<(TaskId, T)>,
}

impl<T> TickQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: VecDeque::new(),
        }
    }

    /// Schedule `task` for the next turn of the loop.
    pub fn schedule(&mut self, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push_back((id, task));
        log::trace!("scheduled task {id:?}");
        id
    }

    /// Cancel a pending task. Returns `false` if it already ran or was
    /// never scheduled here.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(tid, _)| *tid != id);
        self.pending.len() != before
    }

    /// Take every task scheduled so far, in order. Tasks scheduled while the
    /// drained ones run wait for the next drain.
    pub fn drain(&mut self) -> Vec<(TaskId, T)> {
        self.pending.drain(..).collect()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|(tid, _)| *tid == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for TickQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
