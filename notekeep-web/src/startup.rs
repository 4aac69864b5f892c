use crate::configuration::Settings;
use crate::routes::*;
use actix_web::dev::Server;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use notekeep::NoteService;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    note_service: NoteService,
    settings: &Settings,
) -> Result<Server, std::io::Error> {
    let ns: Data<NoteService> = Data::new(note_service);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .service(web::scope("/api/v1").configure(api_v1_config))
            .configure(index_config)
            .app_data(ns.clone())
    })
    .keep_alive(settings.keep_alive())
    .client_request_timeout(settings.request_timeout())
    .shutdown_timeout(settings.shutdown_timeout())
    .listen(listener)?
    .run();
    Ok(server)
}
