//! Trailing-edge value debouncer.
//!
//! Every new value restarts the quiet period; only the last value of a quiet
//! period is emitted. The debouncer starts from a value that counts as
//! already emitted, and a settled value equal to the last emitted one is not
//! emitted again.
//!
//! ```rust,ignore
//! let (search, mut terms) = Debouncer::new(String::new(), config.search_debounce());
//! search.set("b".into());
//! search.set("beach".into());
//! assert_eq!(terms.recv().await.as_deref(), Some("beach"));
//! ```
//!
//! Dropping the [`Debouncer`] cancels any pending timer.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
enum Input<T> {
    /// Restart the quiet period with a new value
    Value(T),
    /// Record a value as emitted without emitting it
    Settle(T),
}

/// Input side of a debounced value. Settled values arrive on the receiver
/// returned by [`Debouncer::new`].
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<Input<T>>,
    task: JoinHandle<()>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Spawn the timer task. Must be called inside a tokio runtime.
    pub fn new(initial: T, delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(initial, delay, input_rx, output_tx));
        (Self { input, task }, output)
    }

    /// Feed a new value, restarting the quiet period.
    pub fn set(&self, value: T) {
        // The task only exits once the receiver is gone.
        let _ = self.input.send(Input::Value(value));
    }

    /// Treat `value` as already emitted and drop any pending value.
    ///
    /// Used when the consumer acted on a value outside the debouncer, so a
    /// later change away from it is still emitted.
    pub fn settle(&self, value: T) {
        let _ = self.input.send(Input::Settle(value));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T>(
    mut last_emitted: T,
    delay: Duration,
    mut input: mpsc::UnboundedReceiver<Input<T>>,
    output: mpsc::UnboundedSender<T>,
) where
    T: Clone + PartialEq + Send,
{
    let mut pending: Option<T> = None;
    loop {
        let next = match pending.take() {
            None => input.recv().await,
            Some(value) => {
                tokio::select! {
                    next = input.recv() => next,
                    _ = tokio::time::sleep(delay) => {
                        if value != last_emitted {
                            if output.send(value.clone()).is_err() {
                                return;
                            }
                            last_emitted = value;
                        }
                        continue;
                    }
                }
            }
        };
        match next {
            Some(Input::Value(value)) => pending = Some(value),
            Some(Input::Settle(value)) => last_emitted = value,
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_emits_last_value_once() {
        let (search, mut terms) = Debouncer::new(String::new(), DELAY);
        let started = Instant::now();

        for term in ["b", "be", "bea", "beac", "beach"] {
            search.set(term.to_string());
            sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(terms.recv().await.as_deref(), Some("beach"));
        // Last input at 400ms, quiet period ends at 700ms.
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(700));
        assert!(elapsed < Duration::from_millis(750));

        sleep(DELAY * 3).await;
        assert!(terms.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_values_each_emit() {
        let (search, mut terms) = Debouncer::new(0u32, DELAY);
        search.set(1);
        sleep(DELAY * 2).await;
        search.set(2);
        sleep(DELAY * 2).await;

        assert_eq!(terms.try_recv().ok(), Some(1));
        assert_eq!(terms.try_recv().ok(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_returning_to_emitted_value_is_silent() {
        let (search, mut terms) = Debouncer::new(String::new(), DELAY);
        search.set("b".to_string());
        sleep(Duration::from_millis(50)).await;
        search.set(String::new());
        sleep(DELAY * 2).await;

        assert!(terms.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_value_counts_as_emitted() {
        let (search, mut terms) = Debouncer::new(String::new(), DELAY);
        search.set("bea".to_string());
        search.settle("beach".to_string());
        sleep(DELAY * 2).await;
        assert!(terms.try_recv().is_err());

        search.set("beach".to_string());
        sleep(DELAY * 2).await;
        assert!(terms.try_recv().is_err());

        search.set(String::new());
        sleep(DELAY * 2).await;
        assert_eq!(terms.try_recv().ok().as_deref(), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let (search, mut terms) = Debouncer::new(0u32, DELAY);
        search.set(7);
        sleep(Duration::from_millis(100)).await;
        drop(search);
        sleep(DELAY * 2).await;

        assert_eq!(terms.recv().await, None);
    }
}
