//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{LocationService, LocationServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::domain::LocationRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryLocationRepository, PgLocationRepository};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging, RateLimitConfig, RateLimiter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<dyn LocationService>,
    /// Present only for the postgres backend; used by the readiness probe
    pub db: Option<PgPool>,
    pub rate_limiter: Option<Arc<RateLimiter>>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the service over the given repository.
    pub fn new(
        repo: Arc<dyn LocationRepository>,
        db: Option<PgPool>,
        settings: Settings,
    ) -> Self {
        let rate_limiter = settings
            .rate_limit
            .enabled
            .then(|| Arc::new(RateLimiter::new(RateLimitConfig::from(&settings.rate_limit))));

        Self {
            locations: Arc::new(LocationServiceImpl::new(repo)),
            db,
            rate_limiter,
            settings: Arc::new(settings),
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory(settings: Settings) -> Self {
        Self::new(Arc::new(InMemoryLocationRepository::new()), None, settings)
    }
}

/// Build the router with every layer applied.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("failed to connect to PostgreSQL")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("failed to run database migrations")?;
                    tracing::info!("Database migrations applied");
                }

                let repo = Arc::new(PgLocationRepository::new(db.clone()));
                AppState::new(repo, Some(db), settings)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; locations are lost on restart");
                AppState::in_memory(settings)
            }
        };

        if let Some(limiter) = state.rate_limiter.clone() {
            spawn_rate_limit_sweeper(limiter);
        }

        let addr = state.settings.server_addr();
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Periodically forget clients whose window has fully expired.
fn spawn_rate_limit_sweeper(limiter: Arc<RateLimiter>) {
    let period = limiter.config().window.max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            limiter.purge_expired();
            tracing::trace!(clients = limiter.tracked_clients(), "Rate limiter swept");
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
