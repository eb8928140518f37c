use anyhow::Context;
use env_logger::Env;

use store_locations::{Config, http, store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let pool = store::connect(&config.database_url).await?;

    let app = http::build_router(pool);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    log::info!("Server is running on {}", config.listen_addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
