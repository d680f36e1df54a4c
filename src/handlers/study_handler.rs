use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{EvalRequest, StudyRequest},
};

/// Summarizes the topic and generates a quiz. Grading is not run here, so
/// `feedback` is always empty.
#[post("/api/study")]
async fn study(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<StudyRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "[{}] Study request for topic '{}'",
        get_request_id(&req),
        request.topic
    );

    let response = state.pipeline_service.study(request).await;
    HttpResponse::Ok().json(response)
}

/// Grades caller-supplied answers against caller-supplied questions.
#[post("/api/evaluate")]
async fn evaluate(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<EvalRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "[{}] Evaluate request for topic '{}' ({} questions, {} answers)",
        get_request_id(&req),
        request.topic,
        request.quiz_questions.len(),
        request.user_answers.len()
    );

    let response = state.pipeline_service.evaluate(request).await;
    HttpResponse::Ok().json(response)
}
