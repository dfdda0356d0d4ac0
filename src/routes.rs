use actix_web::web;

use crate::{auth::AuthMiddleware, errors::AppError, handlers};

/// Malformed JSON bodies and path segments answer with the same error body as everything else.
fn validation_error(err: impl std::fmt::Display) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Registers every route. Expects `web::Data<AppState>` and `web::Data<JwtService>`
/// to be provided by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| validation_error(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _| validation_error(err)))
        .service(handlers::health_check)
        .service(handlers::health_check_live)
        .service(handlers::health_check_ready)
        .service(handlers::login)
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .service(handlers::logout)
                .service(handlers::upload_document)
                .service(handlers::get_document)
                .service(handlers::ask)
                .service(handlers::summary)
                .service(handlers::flashcards)
                .service(handlers::outline)
                .service(handlers::find_video)
                .service(handlers::generate_quiz)
                .service(handlers::get_quiz)
                .service(handlers::answer_question)
                .service(handlers::submit_quiz)
                .service(handlers::retake_quiz)
                .service(handlers::reset_quiz)
                .service(handlers::download_artifact),
        );
}
