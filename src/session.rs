use crate::pipeline::{ItemResult, SharePipeline};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable batch state for a presentation layer. There is no error state:
/// per-item failures live inside the `Ready` result list.
#[derive(Debug, Clone, Default)]
pub enum BatchState {
    #[default]
    Idle,
    /// Set the instant a batch is submitted, cleared only when the full
    /// batch's results, fallbacks included, are available.
    Loading,
    Ready(Arc<Vec<ItemResult>>),
}

impl BatchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, BatchState::Loading)
    }

    pub fn results(&self) -> Option<&[ItemResult]> {
        match self {
            BatchState::Ready(results) => Some(results),
            _ => None,
        }
    }
}

/// Drives the pipeline for a presentation layer: submit a batch, watch the
/// state flip Idle -> Loading -> Ready.
///
/// Submitting while a batch is in flight supersedes it: the old task is
/// aborted and a generation check stops a slow stale batch from ever
/// publishing over a newer one's results.
pub struct BatchSession {
    pipeline: Arc<SharePipeline>,
    state_tx: watch::Sender<BatchState>,
    generation: Arc<AtomicU64>,
    inflight: Mutex<Option<JoinHandle<()>>>,
}

impl BatchSession {
    pub fn new(pipeline: SharePipeline) -> Self {
        let (state_tx, _) = watch::channel(BatchState::Idle);
        Self {
            pipeline: Arc::new(pipeline),
            state_tx,
            generation: Arc::new(AtomicU64::new(0)),
            inflight: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BatchState> {
        self.state_tx.subscribe()
    }

    pub fn state(&self) -> BatchState {
        self.state_tx.borrow().clone()
    }

    /// Starts a batch run. Must be called from within a tokio runtime.
    pub fn submit(&self, sources: Vec<PathBuf>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut inflight = self.inflight.lock().expect("inflight lock poisoned");
        if let Some(previous) = inflight.take() {
            previous.abort();
        }

        // send_replace updates the value even with no receivers subscribed,
        // so polling consumers observe the transition too.
        self.state_tx.send_replace(BatchState::Loading);

        let pipeline = Arc::clone(&self.pipeline);
        let state_tx = self.state_tx.clone();
        let current = Arc::clone(&self.generation);
        let handle = tokio::spawn(async move {
            let results = pipeline.compress_batch(&sources).await;
            // A newer submit owns the state now; drop stale results.
            if current.load(Ordering::SeqCst) == generation {
                state_tx.send_replace(BatchState::Ready(Arc::new(results)));
            }
        });
        *inflight = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CompressionSettings;

    #[test]
    fn test_initial_state_is_idle() {
        let session = BatchSession::new(SharePipeline::with_defaults(
            CompressionSettings::default(),
        ));
        assert!(matches!(session.state(), BatchState::Idle));
        assert!(session.state().results().is_none());
    }

    #[tokio::test]
    async fn test_state_observable_without_subscriber() {
        let session = BatchSession::new(SharePipeline::with_defaults(
            CompressionSettings::default(),
        ));

        // No subscribe() call anywhere: a consumer that only polls state()
        // must still see Loading and then the results.
        session.submit(Vec::new());
        assert!(session.state().is_loading());

        for _ in 0..100 {
            if session.state().results().is_some() {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("batch never reached Ready");
    }

    #[tokio::test]
    async fn test_empty_batch_reaches_ready() {
        let session = BatchSession::new(SharePipeline::with_defaults(
            CompressionSettings::default(),
        ));
        let mut rx = session.subscribe();

        session.submit(Vec::new());
        let state = rx
            .wait_for(|s| matches!(s, BatchState::Ready(_)))
            .await
            .unwrap()
            .clone();
        assert_eq!(state.results().unwrap().len(), 0);
    }
}
