use anyhow::Result;
use tracing_subscriber::EnvFilter;

use api::{router, ProxyConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("version proxy listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
