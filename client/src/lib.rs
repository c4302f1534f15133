pub mod api;
pub mod config;
pub mod error;
pub mod menu;

pub use api::{HttpPollService, PollService};
pub use config::{ClientArgs, ClientConfig};
pub use error::ClientError;

#[cfg(test)]
mod tests;
