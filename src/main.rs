use tokio::net::TcpListener;
use tracing::{info, warn};
use news_aggregator::{
    config::{Config, GUARDIAN_KEY_VAR, NEWSAPI_KEY_VAR, NYT_KEY_VAR},
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("news_aggregator=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    for (var, key) in [
        (GUARDIAN_KEY_VAR, &config.guardian_api_key),
        (NYT_KEY_VAR, &config.nyt_api_key),
        (NEWSAPI_KEY_VAR, &config.newsapi_key),
    ] {
        if key.is_none() {
            warn!("{} is not set, that source will return no articles", var);
        }
    }

    // Create application state
    let app_state = AppState::from_config(&config);

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;

    // Start the server
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
