use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use notekeep::errors::NoteServiceError;
use notekeep::{NoteID, NoteService};
use serde::Deserialize;

fn note_service_error_handler(e: &NoteServiceError) -> HttpResponse {
    match e {
        NoteServiceError::Validation(_) => HttpResponse::BadRequest().body(e.to_string()),
        NoteServiceError::NotFound(_) => HttpResponse::NotFound().body(e.to_string()),
        NoteServiceError::Internal(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[derive(Deserialize)]
struct NotePostData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

#[post("/notes")]
#[instrument(skip(service, note))]
async fn new_note(
    service: web::Data<NoteService>,
    note: web::Json<NotePostData>,
) -> impl Responder {
    let NotePostData { title, content } = note.into_inner();
    match service.create(title, content).await {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/notes")]
#[instrument(skip(service))]
async fn list_notes(service: web::Data<NoteService>) -> impl Responder {
    match service.list().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/notes/{note_id}")]
#[instrument(
    skip(service, params),
    fields(
        note_id = %params.0
    )
)]
async fn get_note(
    service: web::Data<NoteService>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    match service.get_by_id(&NoteID::new(note_id)).await {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => note_service_error_handler(&e),
    }
}

#[put("/notes/{note_id}")]
#[instrument(
    skip(service, params, note),
    fields(
        note_id = %params.0
    )
)]
async fn update_note(
    service: web::Data<NoteService>,
    params: web::Path<(String,)>,
    note: web::Json<NotePostData>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let NotePostData { title, content } = note.into_inner();
    match service
        .update(&NoteID::new(note_id), title, content)
        .await
    {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => note_service_error_handler(&e),
    }
}

#[delete("/notes/{note_id}")]
#[instrument(
    skip(service, params),
    fields(
        note_id = %params.0
    )
)]
async fn delete_note(
    service: web::Data<NoteService>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    match service.delete(&NoteID::new(note_id)).await {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => note_service_error_handler(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(new_note)
        .service(list_notes)
        .service(get_note)
        .service(update_note)
        .service(delete_note);
}
