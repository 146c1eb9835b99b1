pub mod dashboard_refresh;
pub mod notifications;

pub use dashboard_refresh::*;
pub use notifications::*;

use tokio::task::JoinHandle;

/// Owns a background listener task; `shutdown` is the teardown half of the
/// listener's lifecycle.
pub struct ListenerHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl ListenerHandle {
    pub fn new(name: &'static str, task: JoinHandle<()>) -> Self {
        Self { name, task }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shutdown(self) {
        tracing::debug!("Stopping {} listener", self.name);
        self.task.abort();
    }
}
