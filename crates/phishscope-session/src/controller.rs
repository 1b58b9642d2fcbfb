use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures::stream::Stream;
use phishscope_api::{AnalysisApi, HttpAnalysisClient, normalize_batch};
use phishscope_types::SessionState;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, error, info};

use crate::config::Config;

/// The only failure text ever shown to an end user. Diagnostic detail goes to
/// the operator log instead.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch and analyze emails.";

// NOTE: State machine contract
//
// - trigger() from Idle/Succeeded/Failed enters Loading and clears the prior
//   outcome immediately; stale results are never visible while a fetch is
//   pending.
// - trigger() while Loading is a guarded no-op. The guard and the Loading
//   transition share one lock, so two racing triggers can never both start a
//   request.
// - Exactly the task that entered Loading writes the terminal state, so every
//   observer sees Loading strictly before the matching Succeeded/Failed.
// - No cancellation: once in flight, the attempt runs to completion.

/// Owns the lifecycle of one fetch-and-analyze attempt at a time.
///
/// Cheap to clone; clones share the same state cell and subscriber list.
/// `trigger()` must be called from within a tokio runtime.
pub struct SessionController<A: AnalysisApi> {
    api: Arc<A>,
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
}

struct Inner {
    state: SessionState,
    subscribers: Vec<UnboundedSender<SessionState>>,
}

impl Shared {
    /// Replace the state and fan the new value out to every live subscriber.
    /// Must never be called with the lock already held.
    fn transition(&self, next: SessionState) {
        let mut inner = self.inner.lock().unwrap();
        debug!(from = inner.state.as_str(), to = next.as_str(), "session transition");
        inner.state = next.clone();
        inner.subscribers.retain(|tx| tx.send(next.clone()).is_ok());
    }
}

impl SessionController<HttpAnalysisClient> {
    /// Controller wired to the real HTTP service described by `config`.
    pub fn connect(config: &Config) -> Self {
        Self::new(HttpAnalysisClient::new(config.base_url.clone()))
    }
}

impl<A: AnalysisApi> SessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: SessionState::Idle,
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    /// Start a new fetch-and-analyze attempt. Fire-and-forget.
    ///
    /// Idempotent while an attempt is in flight: the call returns without
    /// starting a second request. From any other state the prior result or
    /// error is cleared and the session enters `Loading` before this returns.
    pub fn trigger(&self) {
        {
            let mut inner = self.shared.inner.lock().unwrap();
            if inner.state.is_loading() {
                debug!("trigger ignored, attempt already in flight");
                return;
            }
            inner.state = SessionState::Loading;
            inner
                .subscribers
                .retain(|tx| tx.send(SessionState::Loading).is_ok());
        }

        info!("starting fetch-and-analyze attempt");
        let api = self.api.clone();
        let shared = self.shared.clone();
        tokio::spawn(async move {
            let outcome = api
                .fetch_and_analyze()
                .await
                .and_then(normalize_batch);

            match outcome {
                Ok(batch) => {
                    info!(emails = batch.len(), "fetch-and-analyze attempt succeeded");
                    shared.transition(SessionState::Succeeded(batch));
                }
                Err(err) => {
                    // Operator-facing detail only; the state carries the
                    // fixed user-safe message.
                    error!(error = %err, "fetch-and-analyze attempt failed");
                    shared.transition(SessionState::Failed {
                        message: FETCH_FAILED_MESSAGE.to_string(),
                    });
                }
            }
        });
    }

    /// Snapshot of the current session state.
    pub fn current_state(&self) -> SessionState {
        self.shared.inner.lock().unwrap().state.clone()
    }

    /// Subscribe to state changes.
    ///
    /// The stream yields the state as of subscription first, then every
    /// subsequent transition in order. Nothing is skipped or re-emitted; a
    /// dropped stream unsubscribes itself.
    pub fn subscribe(&self) -> StateStream {
        let (tx, rx) = unbounded_channel();
        let mut inner = self.shared.inner.lock().unwrap();
        // Subscriber registration and the initial snapshot share the lock so
        // no transition can slip between them.
        let _ = tx.send(inner.state.clone());
        inner.subscribers.push(tx);
        StateStream { receiver: rx }
    }
}

impl<A: AnalysisApi> Clone for SessionController<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            shared: self.shared.clone(),
        }
    }
}

/// Ordered stream of session states for one subscriber.
pub struct StateStream {
    receiver: UnboundedReceiver<SessionState>,
}

impl StateStream {
    /// Poll for the next state (non-blocking).
    ///
    /// Returns `None` if no transition is available immediately.
    pub fn try_next(&mut self) -> Option<SessionState> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for StateStream {
    type Item = SessionState;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
