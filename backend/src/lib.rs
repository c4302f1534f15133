pub mod catchers;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fairing;
pub mod registry;
pub mod routes;
pub mod store;

use rocket::{Build, Rocket, catchers, routes};
use shared::config::REGISTRY_PATH;
use shared::models::Binding;

use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    config::ServerConfig,
    endpoint::PollEndpoint,
    fairing::Announce,
    routes::{current_counts, list_bindings, lookup_binding, submit_vote, tally, AppState},
    store::TallyStore,
};

/// Assembles the server: the poll routes under the service's bound path plus the registry.
pub fn build_rocket(config: &ServerConfig) -> Rocket<Build> {
    let binding = Binding::for_service(&config.service_name);
    let service_path = binding.path.clone();

    rocket::custom(config.figment())
        .attach(Announce::new(&config.service_name))
        .manage(AppState::new(PollEndpoint::new(TallyStore::new()), binding))
        .mount(REGISTRY_PATH, routes![list_bindings, lookup_binding])
        .mount(service_path.as_str(), routes![submit_vote, current_counts, tally])
        .register("/", catchers![bad_request, not_found, unprocessable, internal_error])
}
