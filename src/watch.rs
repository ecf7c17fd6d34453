// Fixed-interval refresh loop.

use std::future::Future;
use std::time::Duration;

/// Run `run` repeatedly, sleeping `interval` between runs, until `stop` resolves.
///
/// `stop` is polled during runs as well as sleeps, so a signal arriving mid-fetch
/// ends the loop. The first error from `run` is returned.
pub async fn repeat_until<F, Fut, E, S>(
    interval: Duration,
    stop: S,
    mut run: F,
    mut on_wait: impl FnMut(Duration),
) -> Result<(), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    S: Future,
{
    tokio::pin!(stop);

    loop {
        tokio::select! {
            result = run() => result?,
            _ = &mut stop => return Ok(()),
        }

        on_wait(interval);

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut stop => return Ok(()),
        }
    }
}
