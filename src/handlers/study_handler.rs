use actix_web::{
    get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::AppError,
    handlers::json_or_default,
    models::{
        domain::ArtifactKind,
        dto::{
            request::{AskRequest, FlashcardsRequest, SummaryRequest},
            response::VideoResponse,
        },
    },
};

#[post("/ask")]
pub async fn ask(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    request: web::Json<AskRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .study_service
        .ask(&session.0.sub, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// The body is optional; an empty one means a plain summary.
#[post("/summary")]
pub async fn summary(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: SummaryRequest = json_or_default(&body)?;
    let response = state.study_service.summarize(&session.0.sub, request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/flashcards")]
pub async fn flashcards(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: FlashcardsRequest = json_or_default(&body)?;
    let response = state.study_service.flashcards(&session.0.sub, request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/outline")]
pub async fn outline(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let response = state.study_service.outline(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/video")]
pub async fn find_video(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let url = state.video_service.find_for_session(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(VideoResponse::from_url(url)))
}

/// Serves the last artifact of a kind as a plain-text attachment.
#[get("/artifacts/{kind}")]
pub async fn download_artifact(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    kind: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let kind: ArtifactKind = kind.parse()?;
    let content = state.study_service.artifact(&session.0.sub, kind).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(kind.file_name().to_string())],
        })
        .body(content))
}
