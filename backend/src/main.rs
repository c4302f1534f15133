use backend::{build_rocket, config::{ServerArgs, ServerConfig}};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_args(ServerArgs::parse());
    info!("🚀 Starting poll server on {}:{}", config.address, config.port);

    let _rocket = build_rocket(&config).launch().await?;

    info!("Poll server stopped");
    Ok(())
}
