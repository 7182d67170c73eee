use anyhow::Context;
use backend::{Relay, DEFAULT_RELAY_ADDR};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr = std::env::var("RELAY_ADDR").unwrap_or_else(|_| DEFAULT_RELAY_ADDR.to_string());
    let relay = Relay::bind(&addr)
        .await
        .with_context(|| format!("failed to bind relay on {addr}"))?;

    info!("[RELAY] Listening on {}", relay.local_addr()?);
    relay.run().await?;
    Ok(())
}
