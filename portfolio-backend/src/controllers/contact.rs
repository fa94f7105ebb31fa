use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::mailer::{templates, SubmissionContext};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/contact")
            .route(web::post().to(submit_message))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "message": "Method not allowed"
    }))
}

/// Uniform failure response; the reason is only logged, never returned.
fn request_failed() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": "Failed to process request"
    }))
}

/// Save the submission, then notify the owner and the submitter.
///
/// The steps run strictly in order and the first failure stops the rest,
/// so a mail error after a successful insert leaves the row in place.
async fn submit_message(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> impl Responder {
    if let Err(e) = state.db.connect() {
        log::error!("Failed to connect to database: {}", e);
        return request_failed();
    }

    let saved = match state.db.save_message(&form.name, &form.email, &form.message) {
        Ok(saved) => saved,
        Err(e) => {
            log::error!("Failed to save contact message: {}", e);
            return request_failed();
        }
    };
    log::info!("Contact message {} saved", saved.id);

    let submission = SubmissionContext {
        name: &form.name,
        email: &form.email,
        message: &form.message,
    };

    if let Err(e) = state.mailer.send(&templates::owner_notification(&submission)).await {
        log::error!("Failed to send owner notification for message {}: {}", saved.id, e);
        return request_failed();
    }

    if let Err(e) = state.mailer.send(&templates::auto_reply(&submission)).await {
        log::error!("Failed to send auto-reply for message {}: {}", saved.id, e);
        return request_failed();
    }

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Message sent and saved successfully!"
    }))
}
