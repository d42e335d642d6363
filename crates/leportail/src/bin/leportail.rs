//! leportail binary entry point

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = leportail::config::ServerConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("LePortail - LeParcours Learning Path Recommender");
    println!("Configuration:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Top N: {}", config.top_n);

    let server = leportail::LePortailServer::new(config)?;

    println!();
    println!("Server starting on: {}", server.server_url());
    println!("Press Ctrl+C to stop");

    server.start().await?;

    Ok(())
}
