use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::modules::time_tracking::application::document_gateway::DocumentGateway;
use time_tracking::shared::infrastructure::document_store::json_file::JsonFileDocumentStore;
use time_tracking::shell::config::AppConfig;
use time_tracking::shell::http::router;
use time_tracking::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    let store = Arc::new(JsonFileDocumentStore::new(config.data_file.clone()));
    let gateway = Arc::new(DocumentGateway::new(store));

    // Initializes or migrates the file before the first request.
    let document = gateway.load().await?;
    tracing::info!(
        data_file = %config.data_file.display(),
        time_entries = document.time_entries.len(),
        next_entry_id = document.next_entry_id,
        "document loaded"
    );

    let app = router(AppState::new(gateway), &config.frontend);

    tracing::info!("API: http://{}/api", config.bind_address);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_address);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
