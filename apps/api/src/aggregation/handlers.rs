//! Axum route handlers for the dashboard views.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::aggregation::{
    build_score_series, compute_absence_flags, compute_attendance_summary, AttendanceSummary,
    FlaggedStudent, ScorePoint, TrailingWindow, WindowQuery,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AbsenceFlagsResponse {
    pub window_days: i64,
    pub threshold: u32,
    pub flagged: Vec<FlaggedStudent>,
}

/// GET /api/v1/dashboard/absence-flags?days&threshold
///
/// Recomputed from the raw logs on every request.
pub async fn handle_absence_flags(
    State(state): State<AppState>,
    Query(params): Query<WindowQuery>,
) -> Result<Json<AbsenceFlagsResponse>, AppError> {
    let window = TrailingWindow::from_query(params.days, state.config.absence_window_days)?;
    let threshold = params.threshold.unwrap_or(state.config.absence_threshold);

    let students: HashMap<Uuid, String> = state
        .store
        .list_students()
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    let logs = state.store.attendance_since(window.cutoff()).await?;

    let flagged = compute_absence_flags(&students, &logs, &window, threshold);
    info!(
        "Absence check over {} logs ({} days, threshold {}): {} flagged",
        logs.len(),
        window.days,
        threshold,
        flagged.len()
    );

    Ok(Json(AbsenceFlagsResponse {
        window_days: window.days,
        threshold,
        flagged,
    }))
}

/// GET /api/v1/students/:id/scores
///
/// Chronological score series for charting. Empty when nothing is recorded.
pub async fn handle_score_series(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<ScorePoint>>, AppError> {
    let scores = state.store.scores_for_student(student_id).await?;
    Ok(Json(build_score_series(&scores, student_id)))
}

/// GET /api/v1/students/:id/attendance-summary?days=N
pub async fn handle_attendance_summary(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Query(params): Query<WindowQuery>,
) -> Result<Json<AttendanceSummary>, AppError> {
    let window = TrailingWindow::from_query(params.days, state.config.absence_window_days)?;
    let logs = state.store.attendance_since(window.cutoff()).await?;
    Ok(Json(compute_attendance_summary(&logs, student_id, &window)))
}
