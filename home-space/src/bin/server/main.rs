use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use home_space::config::Config;
use home_space::domain::user::ports::UserAuthServicePort;
use home_space::domain::user::service::UserAuthService;
use home_space::inbound::http::router::create_router;
use home_space::outbound::repositories::PostgresUserStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "home_space=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "home-space",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let issuer = config.server.issuer();

    tracing::info!(
        issuer = %issuer,
        port = config.server.port,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_params(
        config.password.memory_cost_kib,
        config.password.iterations,
        config.password.parallelism,
    )?;
    let user_store = Arc::new(PostgresUserStore::new(pg_pool));
    let user_auth_service: Arc<dyn UserAuthServicePort> =
        Arc::new(UserAuthService::new(user_store, password_hasher));

    let token_codec = Arc::new(
        TokenCodec::new(config.jwt.secret.as_bytes(), issuer)
            .with_lifetime(chrono::Duration::hours(config.jwt.expiration_hours)),
    );

    let http_address = config.server.listen_address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_auth_service, token_codec);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
