use std::time::Duration;

use clap::Parser;
use shared::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, REGISTRY_PATH, SERVICE_NAME};
use shared::validation::{resolve_port, resolve_service_name};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "poll-client", version, about = "Interactive client for the opinion poll server")]
pub struct ClientArgs {
    /// Host running the poll server and its registry
    #[arg(default_value = DEFAULT_HOST)]
    pub host: String,

    /// Registry port. Malformed values fall back to the default.
    pub port: Option<String>,

    /// Name to resolve in the registry
    #[arg(long, default_value = SERVICE_NAME)]
    pub service_name: String,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_name: SERVICE_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_args(args: ClientArgs) -> Self {
        let (port, port_err) = resolve_port(args.port.as_deref());
        if let Some(e) = port_err {
            warn!("{}. Using default port {}.", e, DEFAULT_PORT);
        }

        let (service_name, name_err) = resolve_service_name(&args.service_name);
        if let Some(e) = name_err {
            warn!("{}. Using default name {}.", e, SERVICE_NAME);
        }

        Self {
            host: args.host,
            port,
            service_name,
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn lookup_url(&self) -> String {
        format!("{}{}/{}", self.server_url(), REGISTRY_PATH, self.service_name)
    }
}
