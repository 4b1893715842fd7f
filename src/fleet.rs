//! Driving several lights at once.

use std::thread;

/// Run `f` against every light concurrently, one scoped thread per light.
///
/// Each driver is handed to exactly one thread, so drivers need only be
/// `Send`. Results come back in input order. A panic in `f` is re-raised on
/// the calling thread after every other light has finished.
pub fn run_multiple<L, T, F>(lights: &mut [L], f: F) -> Vec<T>
where
    L: Send,
    T: Send,
    F: Fn(&L) -> T + Sync,
{
    tracing::debug!(lights = lights.len(), "Running on lights concurrently");
    let f = &f;

    thread::scope(|scope| {
        let handles: Vec<_> = lights
            .iter_mut()
            .map(|light| scope.spawn(move || f(light)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
