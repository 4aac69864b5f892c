use notekeep::{InMemoryStore, NoteService};
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    populateinmemorystore: bool,
    keepalive: u64,
    requesttimeout: u64,
    shutdowntimeout: u64,
}

impl Settings {
    pub async fn get_note_service(&self) -> NoteService {
        let service = NoteService::new(Box::new(InMemoryStore::new()));
        if self.populateinmemorystore {
            service
                .populate_sample_notes()
                .await
                .expect("Failed to populate the in-memory store");
        }
        service
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// How long an idle keep-alive connection stays open.
    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keepalive)
    }

    /// How long a client may take to send the request head.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.requesttimeout)
    }

    /// How long in-flight requests get to finish after a shutdown signal.
    pub fn shutdown_timeout(&self) -> u64 {
        self.shutdowntimeout
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 8080)?
        .set_default("populateinmemorystore", false)?
        .set_default("keepalive", 120)?
        .set_default("requesttimeout", 10)?
        .set_default("shutdowntimeout", 5)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notekeep")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}
