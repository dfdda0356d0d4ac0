use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::AppError,
    handlers::json_or_default,
    models::dto::request::{AnswerRequest, GenerateQuizRequest},
};

#[post("/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: GenerateQuizRequest = json_or_default(&body)?;
    let quiz = state.quiz_service.generate(&session.0.sub, request).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quiz")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.current(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/quiz/answers/{index}")]
pub async fn answer_question(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
    index: web::Path<usize>,
    request: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .answer(&session.0.sub, index.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quiz/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let result = state.quiz_service.submit(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Keeps the questions and clears the answers and result.
#[post("/quiz/retake")]
pub async fn retake_quiz(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.retake(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quiz")]
pub async fn reset_quiz(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.clear(&session.0.sub).await?;
    Ok(HttpResponse::NoContent().finish())
}
