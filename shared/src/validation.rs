use crate::config::{DEFAULT_PORT, SERVICE_NAME};
use crate::models::VoteChoice;

pub const MAX_SERVICE_NAME_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing vote choice")]
    MissingChoice,
    #[error("Unrecognized vote choice: {0}")]
    UnrecognizedChoice(String),
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid service name: {0:?}")]
    InvalidServiceName(String),
}

/// Maps a raw submission onto a choice. Surrounding whitespace and case are ignored.
pub fn normalize_choice(raw: Option<&str>) -> Result<VoteChoice, ValidationError> {
    raw.ok_or(ValidationError::MissingChoice)?.parse()
}

pub fn parse_port(raw: &str) -> Result<u16, ValidationError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ValidationError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

/// Resolves an optional port argument, returning the default when it is absent or malformed.
/// The error is handed back alongside so the caller can log the fallback.
pub fn resolve_port(raw: Option<&str>) -> (u16, Option<ValidationError>) {
    match raw.map(parse_port) {
        None => (DEFAULT_PORT, None),
        Some(Ok(port)) => (port, None),
        Some(Err(e)) => (DEFAULT_PORT, Some(e)),
    }
}

/// Service names become URL path segments.
pub fn validate_service_name(name: &str) -> Result<(), ValidationError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_SERVICE_NAME_LENGTH
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidServiceName(name.to_string()))
    }
}

pub fn resolve_service_name(name: &str) -> (String, Option<ValidationError>) {
    match validate_service_name(name) {
        Ok(()) => (name.to_string(), None),
        Err(e) => (SERVICE_NAME.to_string(), Some(e)),
    }
}
