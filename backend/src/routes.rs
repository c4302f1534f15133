use rocket::{State, get, post, http::Status, serde::json::Json};
use shared::models::{Binding, SubmitVoteRequest, Tally};
use tracing::debug;

use crate::{endpoint::PollEndpoint, error::ApiError, registry::ServiceRegistry};

pub struct AppState {
    pub endpoint: PollEndpoint,
    pub registry: ServiceRegistry,
}

impl AppState {
    pub fn new(endpoint: PollEndpoint, binding: Binding) -> Self {
        let registry = ServiceRegistry::new();
        registry.rebind(binding);
        Self { endpoint, registry }
    }
}

/// Always answers 204: bad or missing choices are dropped by the endpoint, never reported back.
#[post("/vote", data = "<request>")]
pub fn submit_vote(state: &State<AppState>, request: Option<Json<SubmitVoteRequest>>) -> Status {
    let choice = match &request {
        Some(body) => body.choice.as_deref(),
        None => {
            debug!("Vote request body missing or not valid JSON");
            None
        }
    };

    state.endpoint.submit_vote(choice);
    Status::NoContent
}

#[get("/counts")]
pub fn current_counts(state: &State<AppState>) -> String {
    state.endpoint.get_current_counts()
}

#[get("/tally")]
pub fn tally(state: &State<AppState>) -> Json<Tally> {
    Json(state.endpoint.tally())
}

#[get("/")]
pub fn list_bindings(state: &State<AppState>) -> Json<Vec<Binding>> {
    Json(state.registry.list())
}

#[get("/<name>")]
pub fn lookup_binding(state: &State<AppState>, name: &str) -> Result<Json<Binding>, ApiError> {
    state
        .registry
        .lookup(name)
        .map(Json)
        .ok_or_else(|| ApiError::NotBound(name.to_string()))
}
