use anyhow::Result;
use boo_api::application::{ports::time::Clock, services::ApplicationServices};
use boo_api::config::AppConfig;
use boo_api::domain::{comment::CommentRepository, profile::ProfileRepository};
use boo_api::infrastructure::{
    database,
    repositories::{
        InMemoryCommentRepository, InMemoryProfileRepository, MemoryStore,
        PostgresCommentRepository, PostgresProfileRepository,
    },
    time::SystemClock,
};
use boo_api::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let (profile_repo, comment_repo) = build_repositories(&config).await?;
    let services = Arc::new(ApplicationServices::new(profile_repo, comment_repo, clock));

    let state = HttpState {
        services,
        public_base_url: config.public_base_url().into(),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn ProfileRepository>, Arc<dyn CommentRepository>)> {
    if let Some(url) = config.database_url() {
        let pool = database::init_pool(url, config.database_max_connections()).await?;
        database::run_migrations(&pool).await?;
        tracing::info!("connected to postgres, migrations applied");
        return Ok((
            Arc::new(PostgresProfileRepository::new(pool.clone())),
            Arc::new(PostgresCommentRepository::new(pool)),
        ));
    }

    tracing::warn!("DATABASE_URL not set, keeping data in memory");
    let store = MemoryStore::new();
    Ok((
        Arc::new(InMemoryProfileRepository::new(Arc::clone(&store))),
        Arc::new(InMemoryCommentRepository::new(store)),
    ))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
