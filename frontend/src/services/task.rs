//! Component-scoped async tasks.
//!
//! Timers spawned from a component must not outlive it: a [`TaskScope`]
//! aborts everything it spawned when the owning component is cleaned up.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable, Aborted};
use leptos::{on_cleanup, spawn_local};

/// Wraps `fut` so it can be aborted through the returned handle.
pub fn cancellable<F: Future>(fut: F) -> (Abortable<F>, AbortHandle) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(fut, registration), handle)
}

/// Owner of the tasks spawned on behalf of one component.
#[derive(Clone, Default)]
pub struct TaskScope {
    handles: Rc<RefCell<Vec<(u64, AbortHandle)>>>,
    next_id: Rc<Cell<u64>>,
}

impl TaskScope {
    /// Creates a scope tied to the current reactive owner.
    ///
    /// Must be called while building a component.
    pub fn new() -> Self {
        let scope = Self::default();
        let on_teardown = scope.clone();
        on_cleanup(move || on_teardown.cancel_all());
        scope
    }

    /// Spawns `fut` on the event loop; it is dropped if the scope is cancelled first.
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let scope = self.clone();
        spawn_local(async move {
            if scope.run(fut).await.is_err() {
                log::debug!("🛑 Scoped task cancelled");
            }
        });
    }

    /// Drives `fut` under this scope and forgets its handle once it settles.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Aborted> {
        let (id, task) = self.track(fut);
        let outcome = task.await;
        self.release(id);
        outcome
    }

    /// Aborts every task that has not finished yet.
    pub fn cancel_all(&self) {
        let mut handles = self.handles.borrow_mut();
        if !handles.is_empty() {
            log::debug!("🧹 Cancelling {} scoped task(s)", handles.len());
        }
        for (_, handle) in handles.drain(..) {
            handle.abort();
        }
    }

    /// Number of tasks started but not yet finished or cancelled.
    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }

    fn track<F: Future>(&self, fut: F) -> (u64, Abortable<F>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let (task, handle) = cancellable(fut);
        self.handles.borrow_mut().push((id, handle));
        (id, task)
    }

    fn release(&self, id: u64) {
        self.handles.borrow_mut().retain(|(tracked, _)| *tracked != id);
    }
}
