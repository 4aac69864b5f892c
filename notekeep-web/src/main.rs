use notekeep_web::configuration::CONFIGURATION;
use notekeep_web::startup::run;
use notekeep_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::layer());
    init_tracing(subscriber);

    let listener = TcpListener::bind(CONFIGURATION.address())?;
    info!(address = %listener.local_addr()?, "Starting server");
    let note_service = CONFIGURATION.get_note_service().await;
    run(listener, note_service, &CONFIGURATION)?.await?;
    info!("Server stopped");
    Ok(())
}
