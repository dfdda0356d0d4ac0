use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedSession,
    errors::AppError,
    models::dto::{request::LoginRequest, response::MessageResponse},
};

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/auth/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    session: AuthenticatedSession,
) -> Result<HttpResponse, AppError> {
    state.auth_service.logout(&session.0.sub).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
