// src/tasks/mod.rs

//! Deferred one-shot tasks used to fake latency.
//! Each task sleeps, then runs a single completion. No cancellation.

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Spawn `completion` to run once after `delay`
pub fn spawn_delayed<F>(name: &'static str, delay: Duration, completion: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        debug!("[TASK] {} scheduled in {:?}", name, delay);
        tokio::time::sleep(delay).await;
        completion.await;
        debug!("[TASK] {} completed", name);
    })
}

/// Handles of tasks that have not been awaited yet
#[derive(Default)]
pub struct PendingTasks {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl PendingTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn track(&self, handle: JoinHandle<()>) {
        let mut handles = self.handles.lock().await;
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    pub async fn len(&self) -> usize {
        self.handles.lock().await.iter().filter(|h| !h.is_finished()).count()
    }

    /// Wait for every tracked task, including ones tracked while waiting
    pub async fn join_all(&self) {
        loop {
            let drained: Vec<_> = std::mem::take(&mut *self.handles.lock().await);
            if drained.is_empty() {
                return;
            }
            for handle in drained {
                if let Err(e) = handle.await {
                    error!("[TASK] task failed: {}", e);
                }
            }
        }
    }
}
