use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use shared::config::{COUNTS_PATH, VOTE_PATH};
use shared::error::ErrorResponse;
use shared::models::{Binding, SubmitVoteRequest};
use tracing::{debug, instrument};

use crate::{config::ClientConfig, error::ClientError};

/// The two calls a poll server answers.
pub trait PollService {
    fn submit_vote(&self, choice: &str) -> Result<(), ClientError>;
    fn get_current_counts(&self) -> Result<String, ClientError>;
}

/// Stub for a poll endpoint resolved through the server's registry.
#[derive(Debug)]
pub struct HttpPollService {
    http: Client,
    endpoint_url: String,
}

impl HttpPollService {
    /// Looks the service up by name and returns a stub bound to its endpoint.
    #[instrument(skip(config), fields(service = %config.service_name))]
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        let response = http.get(config.lookup_url()).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotBound(config.service_name.clone()));
        }
        let binding: Binding = check(response)?.json()?;
        debug!("Resolved {} to {}", binding.name, binding.path);

        Ok(Self {
            http,
            endpoint_url: format!("{}{}", config.server_url(), binding.path),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl PollService for HttpPollService {
    fn submit_vote(&self, choice: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}{}", self.endpoint_url, VOTE_PATH))
            .json(&SubmitVoteRequest::new(choice))
            .send()?;
        check(response)?;
        Ok(())
    }

    fn get_current_counts(&self) -> Result<String, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.endpoint_url, COUNTS_PATH))
            .send()?;
        Ok(check(response)?.text()?)
    }
}

fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>() {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(ClientError::Rejected { status: status.as_u16(), message })
}
