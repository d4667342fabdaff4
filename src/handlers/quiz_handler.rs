use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SubmitQuizRequest, response::HealthResponse},
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Builds a fresh quiz from the template with the given id.
#[get("/api/quizzes/{id}")]
pub async fn load_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_delegate.load_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let SubmitQuizRequest { quiz, who } = request.into_inner();
    let score = state.quiz_delegate.submit_quiz(&quiz, &who).await?;
    Ok(HttpResponse::Ok().json(score))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(load_quiz)
        .service(submit_quiz);
}
