use chrono::Local;
use coach_form::{AppState, CoachClient, Config, Page, api::CoachApi, router};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    info!(api_url = %config.api_url, history = config.history, "starting coach form");

    let page = Page::new(Local::now().date_naive(), config.history);
    let client = CoachClient::new(CoachApi::new(&config.api_url, config.logs_limit), page);
    let app = router(AppState::new(client.clone()), config.history);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    // Initial loads must not hold up the page; it shows placeholders meanwhile.
    tokio::spawn(async move { client.bootstrap().await });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
