//! Effect executor.
//!
//! Runs the requests queued by [`AppState`](crate::state::AppState) on a
//! tokio runtime and hands their outcomes back to the event loop. The event
//! loop polls it the same way it polls the terminal: non-blocking, once per
//! wake-up.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

use crate::client::BusinessClient;
use crate::model::ApiError;
use crate::state::{Completion, Effect};

/// Errors constructing the executor.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] ApiError),
}

/// Executes effects concurrently; each produces exactly one [`Completion`].
#[derive(Debug)]
pub struct RequestExecutor {
    runtime: Runtime,
    client: BusinessClient,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
}

impl RequestExecutor {
    /// Start a runtime and a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Runtime`] if the runtime fails to start, or
    /// [`ExecutorError::Client`] for an invalid base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ExecutorError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("bizlens-http")
            .enable_all()
            .build()?;
        let client = BusinessClient::new(base_url, timeout)?;
        Ok(Self::with_runtime(runtime, client))
    }

    /// Use an existing runtime and client.
    pub fn with_runtime(runtime: Runtime, client: BusinessClient) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            runtime,
            client,
            sender,
            receiver,
        }
    }

    /// Underlying HTTP client.
    pub fn client(&self) -> &BusinessClient {
        &self.client
    }

    /// Start the request for `effect` in the background.
    pub fn dispatch(&self, effect: Effect) {
        let client = self.client.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let completion = match effect {
                Effect::Search { generation, params } => Completion::Search {
                    generation,
                    result: client.search(&params).await,
                },
                Effect::Details {
                    generation,
                    business_id,
                } => Completion::Details {
                    generation,
                    result: client.details(&business_id).await,
                },
            };
            if sender.send(completion).is_err() {
                // Receiver dropped: the app is shutting down.
                debug!("Completion dropped after shutdown");
            }
        });
    }

    /// Dispatch every effect in order.
    pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }

    /// Collect finished requests without blocking.
    pub fn poll(&self) -> Vec<Completion> {
        let completions: Vec<Completion> = self.receiver.try_iter().collect();
        if !completions.is_empty() {
            debug!(count = completions.len(), "Received completions");
        }
        completions
    }

    /// Block until one completion arrives or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> Option<Completion> {
        match self.receiver.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                warn!("Completion channel disconnected");
                None
            }
        }
    }

    /// Call the health endpoint on this executor's runtime.
    ///
    /// # Errors
    ///
    /// Transport failures, or [`ApiError::Unhealthy`] when the backend
    /// answers with any status other than healthy.
    pub fn check_health(&self) -> Result<String, ApiError> {
        let health = self.runtime.block_on(self.client.health())?;
        Ok(health.status)
    }
}
