//! Test helpers for integration tests
//!
//! Provides a service stack ([`TestApp`]) over the in-memory store or
//! PostgreSQL, and a [`WebhookReceiver`] that records every POSTed body.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use clan_common::AppConfig;
use clan_db::{create_pool, run_migrations, DatabaseConfig, MemoryStore};
use clan_hooks::{HookDispatcher, HookDispatcherConfig};
use clan_service::ServiceContext;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Service stack used by a single test
pub struct TestApp {
    pub ctx: ServiceContext,
    pub dispatcher: Arc<HookDispatcher>,
}

impl TestApp {
    /// Stack over a fresh in-memory store
    pub fn in_memory() -> Result<Self> {
        let store = MemoryStore::new();
        let dispatcher = HookDispatcher::start(dispatcher_config(), Arc::new(store.clone()))?;
        Ok(Self {
            ctx: ServiceContext::in_memory(store, dispatcher.clone()),
            dispatcher,
        })
    }

    /// Stack over PostgreSQL, or `None` when `DATABASE_URL` is not set
    pub async fn postgres() -> Result<Option<Self>> {
        let Some(database_url) = database_url() else {
            return Ok(None);
        };

        let mut config = test_config()?;
        config.database.url = database_url;
        let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
        run_migrations(&pool).await?;

        let dispatcher = HookDispatcher::start(
            HookDispatcherConfig::from(&config.hooks),
            Arc::new(clan_db::PgHookRepository::new(pool.clone())),
        )?;
        Ok(Some(Self {
            ctx: ServiceContext::postgres(pool, dispatcher.clone()),
            dispatcher,
        }))
    }

    /// Wait until every dispatched hook event was delivered or failed
    pub async fn settle(&self) {
        self.dispatcher.wait().await;
    }
}

fn dispatcher_config() -> HookDispatcherConfig {
    HookDispatcherConfig {
        timeout: Duration::from_secs(2),
        ..HookDispatcherConfig::default()
    }
}

/// Load configuration from defaults, `.env` and the environment
pub fn test_config() -> Result<AppConfig> {
    AppConfig::load().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// `DATABASE_URL`, after loading `.env`
pub fn database_url() -> Option<String> {
    dotenvy::dotenv().ok();
    match std::env::var("DATABASE_URL") {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            None
        }
    }
}

type Bodies = Arc<Mutex<Vec<Value>>>;

/// Local HTTP endpoint collecting webhook bodies
pub struct WebhookReceiver {
    pub addr: SocketAddr,
    bodies: Bodies,
    _handle: JoinHandle<()>,
}

impl WebhookReceiver {
    /// Receiver answering every POST on `/hook` with 200
    pub async fn start() -> Result<Self> {
        Self::start_with_status(StatusCode::OK).await
    }

    /// Receiver answering every POST on `/hook` with `status`
    pub async fn start_with_status(status: StatusCode) -> Result<Self> {
        let bodies = Bodies::default();
        let app = Router::new()
            .route(
                "/hook",
                post(move |State(bodies): State<Bodies>, Json(body): Json<Value>| async move {
                    bodies.lock().push(body);
                    status
                }),
            )
            .with_state(bodies.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            bodies,
            _handle: handle,
        })
    }

    /// URL to register as a hook
    pub fn url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    /// Bodies received so far
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().clone()
    }
}
