use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Orbit, Rocket};
use tracing::info;

/// Logs where the poll service can be reached once the server is listening.
pub struct Announce {
    service_name: String,
}

impl Announce {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }
}

#[rocket::async_trait]
impl Fairing for Announce {
    fn info(&self) -> Info {
        Info {
            name: "Announce",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let config = rocket.config();
        info!(
            "Server is running. {} available at http://{}:{}/{}",
            self.service_name, config.address, config.port, self.service_name
        );
        info!("Press Ctrl+C to stop the server.");
    }
}
