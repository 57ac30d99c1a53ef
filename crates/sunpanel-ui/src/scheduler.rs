//! Deferred page work.
//!
//! Tasks always run on the thread that owns the [`Document`]. The
//! [`VirtualClock`] runs them when a caller advances time, which makes
//! animation sequencing deterministic under test. The [`TokioScheduler`]
//! waits on a tokio timer and hands the task back over a channel for the
//! UI thread to run.

use std::sync::mpsc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::document::Document;

/// A unit of deferred work against the page.
pub type Task = Box<dyn FnOnce(&mut dyn Document) + Send>;

pub trait Scheduler: Send + Sync {
    /// Run `task` once, no earlier than `delay` from now. Scheduled tasks
    /// cannot be cancelled.
    fn schedule(&self, delay: Duration, task: Task);
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Pending>,
}

/// Manually advanced clock.
#[derive(Default)]
pub struct VirtualClock {
    state: Mutex<ClockState>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move time forward by `by`, running every task that falls due, in due
    /// order (ties in scheduling order). Tasks scheduled while advancing run
    /// too if they fall inside the window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration, doc: &mut dyn Document) -> usize {
        let target = self.state.lock().now + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut state = self.state.lock();
                let earliest = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let pending = state.queue.swap_remove(i);
                    state.now = pending.due;
                    pending.task
                })
            };

            match next {
                Some(task) => {
                    task(&mut *doc);
                    ran += 1;
                }
                None => break,
            }
        }

        self.state.lock().now = target;
        ran
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.lock();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Pending { due, seq, task });
    }
}

impl std::fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("VirtualClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

/// Real-time scheduler backed by a tokio runtime.
///
/// Timers run on the runtime; due tasks are sent back over an mpsc channel
/// and executed by [`TokioScheduler::run_pending`] on the UI thread.
pub struct TokioScheduler {
    runtime: tokio::runtime::Handle,
    tx: mpsc::Sender<Task>,
    rx: Mutex<mpsc::Receiver<Task>>,
}

impl TokioScheduler {
    pub fn new(runtime: tokio::runtime::Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            runtime,
            tx,
            rx: Mutex::new(rx),
        }
    }

    /// Run every task whose timer has fired. Returns the number run.
    pub fn run_pending(&self, doc: &mut dyn Document) -> usize {
        let mut ran = 0;
        loop {
            let task = match self.rx.lock().try_recv() {
                Ok(task) => task,
                Err(_) => break,
            };
            task(&mut *doc);
            ran += 1;
        }
        ran
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(task).is_err() {
                tracing::debug!("Scheduler dropped before deferred task became due");
            }
        });
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler").finish_non_exhaustive()
    }
}
