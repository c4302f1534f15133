use std::io;
use std::process::ExitCode;

use clap::Parser;
use client::{menu, ClientArgs, ClientConfig, HttpPollService};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_args(ClientArgs::parse());

    let service = match HttpPollService::connect(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Failed to connect to server. Exiting.");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Successfully connected to {} at {}:{}",
        config.service_name, config.host, config.port
    );

    if let Err(e) = menu::run(&service, io::stdin().lock(), &mut io::stdout(), &mut io::stderr()) {
        error!("Terminal I/O failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
