use std::sync::Arc;

use clap::Parser;
use hoplink_gateway::app::App;
use hoplink_gateway::cli::CLI;
use hoplink_gateway::state::AppState;
use hoplink_hasher::Sha1TokenHasher;
use hoplink_service::RedirectService;
use hoplink_store::RedisKvStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        redis_url = %config.redis_url,
        public_base_url = %config.public_base_url,
        "starting gateway server"
    );

    let store = RedisKvStore::connect(&config.redis_url).await?;
    let service = RedirectService::new(store, Sha1TokenHasher);
    let state = AppState::new(Arc::new(service), config.public_base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
