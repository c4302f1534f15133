use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;
use rocket::figment::Figment;
use shared::config::{DEFAULT_PORT, SERVICE_NAME};
use shared::validation::{resolve_port, resolve_service_name};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "poll-server", version, about = "In-memory opinion poll server")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    pub address: IpAddr,

    /// Port to listen on. Malformed values fall back to the default.
    #[arg(short, long)]
    pub port: Option<String>,

    /// Name the poll endpoint is published under
    #[arg(long, default_value = SERVICE_NAME)]
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub service_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            service_name: SERVICE_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_args(args: ServerArgs) -> Self {
        let (port, port_err) = resolve_port(args.port.as_deref());
        if let Some(e) = port_err {
            warn!("{}. Using default port {}.", e, DEFAULT_PORT);
        }

        let (service_name, name_err) = resolve_service_name(&args.service_name);
        if let Some(e) = name_err {
            warn!("{}. Using default name {}.", e, SERVICE_NAME);
        }

        Self {
            address: args.address,
            port,
            service_name,
        }
    }

    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
    }
}
