use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::{AbortHandle, Abortable, BoxFuture, FutureExt};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Observable lifecycle of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Created but not yet resumed.
    Suspended,
    Running,
    /// Cancellation requested; the completion handler has not returned yet.
    Canceling,
    Completed,
}

enum Stage {
    Suspended(BoxFuture<'static, ()>),
    Running(JoinHandle<()>),
    Canceling(JoinHandle<()>),
    Discarded,
}

/// A caller-owned handle to one unit of asynchronous work.
///
/// Tasks are created suspended: nothing happens until [`resume`](Task::resume).
/// Once started, the completion handler runs exactly once on a runtime worker
/// thread, with `None` in place of the work's output if the task was
/// cancelled. Dropping the handle detaches the work; it does not cancel it.
///
/// A panic in the completion handler of a detached task aborts the process.
/// Keep the handle and [`wait`](Task::wait) on it to receive the panic
/// instead.
pub struct Task {
    id:      u64,
    runtime: Handle,
    abort:   AbortHandle,
    stage:   Stage,
}

impl Task {
    /// Pair `work` with the handler that consumes its output.
    ///
    /// `complete` receives `Some(output)` when `work` finishes and `None` when
    /// the task is cancelled while running.
    pub fn new<T, W, C>(runtime: Handle, work: W, complete: C) -> Self
    where
        T: Send + 'static,
        W: Future<Output = T> + Send + 'static,
        C: FnOnce(Option<T>) + Send + 'static,
    {
        let id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
        let (abort, registration) = AbortHandle::new_pair();
        let job = async move {
            let output = Abortable::new(work, registration).await.ok();
            let cancelled = output.is_none();
            complete(output);
            debug!(task = id, cancelled, "task completed");
        }
        .boxed();

        Self {
            id,
            runtime,
            abort,
            stage: Stage::Suspended(job),
        }
    }

    pub fn id(&self) -> u64 { self.id }

    pub fn state(&self) -> TaskState {
        match &self.stage {
            Stage::Suspended(_) => TaskState::Suspended,
            Stage::Running(handle) if handle.is_finished() => TaskState::Completed,
            Stage::Running(_) => TaskState::Running,
            Stage::Canceling(handle) if handle.is_finished() => TaskState::Completed,
            Stage::Canceling(_) => TaskState::Canceling,
            Stage::Discarded => TaskState::Completed,
        }
    }

    /// Start the work. Has no effect on a task that was already started or
    /// cancelled.
    pub fn resume(&mut self) {
        self.stage = match std::mem::replace(&mut self.stage, Stage::Discarded) {
            Stage::Suspended(job) => {
                debug!(task = self.id, "task resumed");
                Stage::Running(self.runtime.spawn(job))
            }
            other => other,
        };
    }

    /// Cancel the work.
    ///
    /// A running task still invokes its completion handler once, reporting
    /// cancellation. A suspended task is discarded without calling anything.
    pub fn cancel(&mut self) {
        self.stage = match std::mem::replace(&mut self.stage, Stage::Discarded) {
            Stage::Suspended(_) => {
                debug!(task = self.id, "suspended task discarded");
                Stage::Discarded
            }
            Stage::Running(handle) => {
                debug!(task = self.id, "task cancelling");
                self.abort.abort();
                Stage::Canceling(handle)
            }
            other => other,
        };
    }

    /// Wait until the completion handler has returned.
    ///
    /// Returns immediately for a task that never started. A panic raised by
    /// the completion handler is resumed on the caller.
    pub async fn wait(mut self) {
        let handle = match std::mem::replace(&mut self.stage, Stage::Discarded) {
            Stage::Running(handle) | Stage::Canceling(handle) => handle,
            Stage::Suspended(_) | Stage::Discarded => return,
        };
        if let Err(err) = handle.await
            && err.is_panic()
        {
            std::panic::resume_unwind(err.into_panic());
        }
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        let (Stage::Running(handle) | Stage::Canceling(handle)) =
            std::mem::replace(&mut self.stage, Stage::Discarded)
        else {
            return;
        };

        let id = self.id;
        self.runtime.spawn(async move {
            if let Err(err) = handle.await
                && err.is_panic()
            {
                error!(task = id, "completion handler of a detached task panicked");
                std::process::abort();
            }
        });
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}
