//! Axum route handlers for the AI features.
//!
//! The three top-level routes keep the camelCase bodies the web client already
//! sends. The `/api/v1/students/:id/...` variants gather the data server-side.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::AttendanceSummary;
use crate::composer::{HistoryTurn, SubjectScore};
use crate::errors::AppError;
use crate::gateway::{
    chat_reply, generate_learning_plan, generate_summary, student_learning_plan,
    student_progress_summary, StudentPlan,
};
use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "The AI summary server is running correctly!";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub student_name: Option<String>,
    #[serde(default)]
    pub scores: Option<Vec<SubjectScore>>,
    pub attendance: Option<AttendanceSummary>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<HistoryTurn>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlanRequest {
    pub student_name: Option<String>,
    pub subject: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct LearningPlanResponse {
    pub plan: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentPlanRequest {
    pub subject: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// POST /generate-summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(request) = payload?;

    let summary = generate_summary(
        state.llm.as_ref(),
        request.student_name.as_deref(),
        request.scores.as_deref().unwrap_or_default(),
        request.attendance.as_ref(),
    )
    .await?;

    Ok(Json(SummaryResponse { summary }))
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;

    let reply = chat_reply(
        state.llm.as_ref(),
        &state.knowledge,
        request.message.as_deref(),
        request.history.unwrap_or_default(),
    )
    .await?;

    Ok(Json(ChatResponse { reply }))
}

/// POST /generate-learning-plan
pub async fn handle_generate_learning_plan(
    State(state): State<AppState>,
    payload: Result<Json<LearningPlanRequest>, JsonRejection>,
) -> Result<Json<LearningPlanResponse>, AppError> {
    let Json(request) = payload?;

    let (_, plan) = generate_learning_plan(
        state.llm.as_ref(),
        &state.config.syllabus_path,
        request.student_name.as_deref(),
        request.subject.as_deref(),
        request.score,
    )
    .await?;

    Ok(Json(LearningPlanResponse { plan }))
}

/// POST /api/v1/students/:id/progress-summary
pub async fn handle_student_progress_summary(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = student_progress_summary(&state, student_id).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/students/:id/learning-plan
///
/// Body is optional; `{"subject": "Math"}` restricts to that subject's latest score.
pub async fn handle_student_learning_plan(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    payload: Option<Json<StudentPlanRequest>>,
) -> Result<Json<StudentPlan>, AppError> {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let plan = student_learning_plan(&state, student_id, request.subject.as_deref()).await?;
    Ok(Json(plan))
}
