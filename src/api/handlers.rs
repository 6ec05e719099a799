//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    state::{AppState, TimerState},
    timer::QuizTimer,
};
use super::responses::{AnswerRequest, ApiResponse, HealthResponse, StatusResponse};

fn respond(
    state: &AppState,
    action: &str,
    message: &str,
    result: Result<TimerState, String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let variant = state.current().variant();

    match result {
        Ok(timer) => {
            state.record_action(action);
            info!("{} endpoint called on {} timer", action, variant);
            Ok(Json(ApiResponse::from_timer(
                message.to_string(),
                variant,
                timer,
                state.question_for(&timer).cloned(),
            )))
        }
        Err(e) => {
            error!("Failed to {} {} timer: {}", action, variant, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Reject question events while no quiz is running
fn ensure_running(timer: &dyn QuizTimer, action: &str) -> Result<(), StatusCode> {
    match timer.snapshot() {
        Ok((state, _)) if state.active => Ok(()),
        Ok(_) => {
            warn!("{} requested on {} timer while no quiz is running", action, timer.variant());
            Err(StatusCode::CONFLICT)
        }
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start the quiz on the shown timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.current().start();
    respond(&state, "start", "Quiz started", result)
}

/// Handle POST /stop - Stop the shown timer
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.current().stop();
    respond(&state, "stop", "Quiz stopped", result)
}

/// Handle POST /answer - Select an answer and move to the next question
pub async fn answer_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let timer = state.current();
    ensure_running(timer, "answer")?;

    let result = timer.answer(&request.option);
    respond(&state, "answer", &format!("Answered: {}", request.option), result)
}

/// Handle POST /skip - Manually advance; only the buggy timer offers this
pub async fn skip_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let timer = state.current();
    if !timer.supports_skip() {
        warn!("Skip requested on {} timer, which advances only on expiry", timer.variant());
        return Err(StatusCode::CONFLICT);
    }
    ensure_running(timer, "skip")?;

    let result = timer.skip();
    respond(&state, "skip", "Question skipped", result)
}

/// Handle POST /toggle - Switch between the fixed and buggy timers
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle() {
        Ok(variant) => {
            let timer = match state.current().snapshot() {
                Ok((timer, _)) => timer,
                Err(e) => {
                    error!("Failed to read {} timer: {}", variant, e);
                    return Err(StatusCode::INTERNAL_SERVER_ERROR);
                }
            };
            Ok(Json(ApiResponse::from_timer(
                format!("Showing {} timer", variant),
                variant,
                timer,
                state.question_for(&timer).cloned(),
            )))
        }
        Err(e) => {
            error!("Failed to toggle timer variant: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the shown timer's state and counters
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let current = state.current();

    let (timer, stats) = match current.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        variant: current.variant().to_string(),
        timer,
        stats,
        live_mechanisms: stats.live_mechanisms(),
        question: state.question_for(&timer).cloned(),
        total_questions: state.questions.len(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
