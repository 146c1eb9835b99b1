use futures::future::BoxFuture;

/// Spawns detached background work such as notification timers.
/// Abstracts the runtime so timers can run on a paused test clock.
pub trait TaskSpawner: Send + Sync {
    /// Spawn a future that returns nothing
    fn spawn(&self, future: BoxFuture<'static, ()>);
}
