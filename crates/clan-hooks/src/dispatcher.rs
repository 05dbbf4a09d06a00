//! Hook dispatcher
//!
//! Webhook notifications are queued on a bounded channel and delivered by a
//! fixed pool of workers. `dispatch` never blocks: when the queue is full or
//! closed the event is dropped and counted. Delivery is best effort and at
//! most once; failures are logged and counted, never retried.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clan_common::HookSettings;
use clan_core::{HookEventType, HookRepository};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::DeliveryError;

/// Configuration for the hook dispatcher
#[derive(Debug, Clone)]
pub struct HookDispatcherConfig {
    /// Capacity of the pending event queue
    pub queue_size: usize,
    /// Number of delivery workers
    pub workers: usize,
    /// Timeout applied to every webhook request
    pub timeout: Duration,
}

impl Default for HookDispatcherConfig {
    fn default() -> Self {
        Self {
            queue_size: 1024,
            workers: 4,
            timeout: Duration::from_secs(5),
        }
    }
}

impl From<&HookSettings> for HookDispatcherConfig {
    /// A zero timeout falls back to the default
    fn from(settings: &HookSettings) -> Self {
        let timeout = match settings.timeout_ms {
            0 => Self::default().timeout,
            ms => Duration::from_millis(ms),
        };
        Self {
            queue_size: settings.queue_size.max(1),
            workers: settings.workers.max(1),
            timeout,
        }
    }
}

/// Counters since the dispatcher started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherStats {
    /// Events accepted into the queue
    pub dispatched: u64,
    /// Successful webhook requests
    pub delivered: u64,
    /// Failed webhook requests and failed hook lookups
    pub failed: u64,
    /// Events rejected because the queue was full or closed
    pub dropped: u64,
}

/// One queued event
#[derive(Debug)]
struct Job {
    game_id: String,
    event_type: HookEventType,
    payload: Value,
}

/// State shared between the handle and its workers
struct Shared {
    hooks: Arc<dyn HookRepository>,
    client: reqwest::Client,
    /// Queued plus being delivered
    in_flight: AtomicUsize,
    idle: Notify,
    dispatched: AtomicU64,
    delivered: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

impl Shared {
    fn finish_one(&self) {
        if self.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    async fn deliver_all(&self, job: &Job) {
        let hooks = match self
            .hooks
            .find_by_game_and_type(&job.game_id, job.event_type)
            .await
        {
            Ok(hooks) => hooks,
            Err(err) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                warn!(
                    game_id = %job.game_id,
                    event_type = %job.event_type,
                    error = %DeliveryError::Lookup(err),
                    "Could not load hooks"
                );
                return;
            }
        };

        for hook in hooks {
            match self.post(&hook.url, &job.payload).await {
                Ok(()) => {
                    self.delivered.fetch_add(1, Ordering::Relaxed);
                    debug!(
                        game_id = %job.game_id,
                        event_type = %job.event_type,
                        url = %hook.url,
                        "Hook delivered"
                    );
                }
                Err(err) => {
                    self.failed.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        game_id = %job.game_id,
                        event_type = %job.event_type,
                        url = %hook.url,
                        error = %err,
                        "Hook delivery failed"
                    );
                }
            }
        }
    }

    async fn post(&self, url: &str, payload: &Value) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|source| DeliveryError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Asynchronous webhook dispatcher
pub struct HookDispatcher {
    /// `None` once shut down
    sender: Mutex<Option<mpsc::Sender<Job>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    shared: Arc<Shared>,
}

impl HookDispatcher {
    /// Spawn the worker pool and return the dispatcher handle
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(
        config: HookDispatcherConfig,
        hooks: Arc<dyn HookRepository>,
    ) -> Result<Arc<Self>, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DeliveryError::Client)?;

        let (sender, receiver) = mpsc::channel(config.queue_size.max(1));
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));

        let shared = Arc::new(Shared {
            hooks,
            client,
            in_flight: AtomicUsize::new(0),
            idle: Notify::new(),
            dispatched: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        });

        let workers = (0..config.workers.max(1))
            .map(|index| tokio::spawn(run_worker(index, shared.clone(), receiver.clone())))
            .collect();

        info!(
            workers = config.workers,
            queue_size = config.queue_size,
            timeout_ms = config.timeout.as_millis() as u64,
            "Hook dispatcher started"
        );

        Ok(Arc::new(Self {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(workers),
            shared,
        }))
    }

    /// Queue an event for every hook registered on `(game_id, event_type)`
    ///
    /// Returns immediately. Returns `false` if the event was dropped.
    pub fn dispatch<P>(&self, game_id: &str, event_type: HookEventType, payload: &P) -> bool
    where
        P: Serialize + ?Sized,
    {
        let payload = match serde_json::to_value(payload) {
            Ok(payload) => payload,
            Err(err) => {
                self.shared.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(%game_id, %event_type, error = %err, "Could not encode hook payload");
                return false;
            }
        };

        let job = Job {
            game_id: game_id.to_string(),
            event_type,
            payload,
        };

        let sender = self.sender.lock();
        let Some(sender) = sender.as_ref() else {
            self.shared.dropped.fetch_add(1, Ordering::Relaxed);
            warn!(%game_id, %event_type, error = %DeliveryError::QueueClosed, "Hook event dropped");
            return false;
        };

        self.shared.in_flight.fetch_add(1, Ordering::SeqCst);
        match sender.try_send(job) {
            Ok(()) => {
                self.shared.dispatched.fetch_add(1, Ordering::Relaxed);
                true
            }
            Err(err) => {
                let reason = match err {
                    TrySendError::Full(_) => DeliveryError::QueueFull,
                    TrySendError::Closed(_) => DeliveryError::QueueClosed,
                };
                self.shared.finish_one();
                self.shared.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(%game_id, %event_type, error = %reason, "Hook event dropped");
                false
            }
        }
    }

    /// Resolve once no event is queued or being delivered
    pub async fn wait(&self) {
        loop {
            let notified = self.shared.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.shared.in_flight.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Current counters
    pub fn stats(&self) -> DispatcherStats {
        DispatcherStats {
            dispatched: self.shared.dispatched.load(Ordering::Relaxed),
            delivered: self.shared.delivered.load(Ordering::Relaxed),
            failed: self.shared.failed.load(Ordering::Relaxed),
            dropped: self.shared.dropped.load(Ordering::Relaxed),
        }
    }

    /// Stop accepting events, deliver what is queued, and join the workers
    pub async fn shutdown(&self) {
        if self.sender.lock().take().is_none() {
            return;
        }

        let workers: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        for worker in workers {
            if let Err(err) = worker.await {
                warn!(error = %err, "Hook worker terminated abnormally");
            }
        }
        info!(stats = ?self.stats(), "Hook dispatcher stopped");
    }
}

async fn run_worker(
    index: usize,
    shared: Arc<Shared>,
    receiver: Arc<tokio::sync::Mutex<mpsc::Receiver<Job>>>,
) {
    loop {
        let job = receiver.lock().await.recv().await;
        let Some(job) = job else {
            break;
        };
        shared.deliver_all(&job).await;
        shared.finish_one();
    }
    debug!(worker = index, "Hook worker stopped");
}
