/// Name the poll endpoint is published under in the service registry.
pub const SERVICE_NAME: &str = "PollService";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 1099;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const REGISTRY_PATH: &str = "/registry";
pub const VOTE_PATH: &str = "/vote";
pub const COUNTS_PATH: &str = "/counts";
