//! Axum route handlers for students, attendance, scores and volunteers.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::aggregation::{TrailingWindow, WindowQuery};
use crate::errors::AppError;
use crate::models::attendance::{AttendanceDayLog, AttendanceRecords};
use crate::models::score::{ScoreWithStudent, TestScore};
use crate::models::student::{Student, UNKNOWN_STUDENT};
use crate::models::volunteer::Volunteer;
use crate::records::validation::{require_non_negative, require_text, validate_coordinates};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    #[serde(rename = "class")]
    pub class_label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordAttendanceRequest {
    pub records: AttendanceRecords,
    /// Defaults to the time of submission.
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    pub student_id: Uuid,
    pub subject: Option<String>,
    pub score: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVolunteerRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Students
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/students
pub async fn handle_create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let Json(request) = payload?;

    let student = Student {
        id: Uuid::new_v4(),
        name: require_text("name", request.name)?,
        age: require_non_negative("age", request.age)?,
        class_label: require_text("class", request.class_label)?,
        created_at: Utc::now(),
    };

    state.store.insert_student(&student).await?;
    info!("Added student {} ({})", student.id, student.name);

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn handle_list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.store.list_students().await?))
}

/// GET /api/v1/students/:id
pub async fn handle_get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = state
        .store
        .get_student(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))?;
    Ok(Json(student))
}

// ────────────────────────────────────────────────────────────────────────────
// Attendance
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/attendance
///
/// Appends one log. Submitting twice on the same day produces two logs.
pub async fn handle_record_attendance(
    State(state): State<AppState>,
    payload: Result<Json<RecordAttendanceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AttendanceDayLog>), AppError> {
    let Json(request) = payload?;

    if request.records.is_empty() {
        return Err(AppError::Validation(
            "records must contain at least one student.".to_string(),
        ));
    }

    let log = AttendanceDayLog {
        id: Uuid::new_v4(),
        date: request.date.unwrap_or_else(Utc::now),
        records: request.records,
    };

    state.store.insert_attendance_log(&log).await?;
    info!(
        "Recorded attendance log {} for {} students",
        log.id,
        log.records.len()
    );

    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/attendance?days=N
pub async fn handle_list_attendance(
    State(state): State<AppState>,
    Query(params): Query<WindowQuery>,
) -> Result<Json<Vec<AttendanceDayLog>>, AppError> {
    let window = TrailingWindow::from_query(params.days, state.config.absence_window_days)?;
    Ok(Json(state.store.attendance_since(window.cutoff()).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/scores
pub async fn handle_create_score(
    State(state): State<AppState>,
    payload: Result<Json<CreateScoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TestScore>), AppError> {
    let Json(request) = payload?;

    let score = TestScore {
        id: Uuid::new_v4(),
        student_id: request.student_id,
        subject: require_text("subject", request.subject)?,
        score: require_non_negative("score", request.score)?,
        date: request.date.unwrap_or_else(Utc::now),
    };

    state.store.insert_score(&score).await?;
    info!(
        "Recorded {} score {} for student {}",
        score.subject, score.score, score.student_id
    );

    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /api/v1/scores
///
/// Every score, newest first, with the student's name resolved.
pub async fn handle_list_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoreWithStudent>>, AppError> {
    let names: HashMap<Uuid, String> = state
        .store
        .list_students()
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let scores = state
        .store
        .list_scores()
        .await?
        .into_iter()
        .map(|score| ScoreWithStudent {
            student_name: names
                .get(&score.student_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            score,
        })
        .collect();

    Ok(Json(scores))
}

// ────────────────────────────────────────────────────────────────────────────
// Volunteers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/volunteers
pub async fn handle_create_volunteer(
    State(state): State<AppState>,
    payload: Result<Json<CreateVolunteerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Volunteer>), AppError> {
    let Json(request) = payload?;

    let coordinates = validate_coordinates(request.latitude, request.longitude)?;
    let volunteer = Volunteer {
        id: Uuid::new_v4(),
        name: require_text("name", request.name)?,
        location: require_text("location", request.location)?,
        latitude: coordinates.map(|(lat, _)| lat),
        longitude: coordinates.map(|(_, lng)| lng),
        assigned_center: String::new(),
        resources: Vec::new(),
        created_at: Utc::now(),
    };

    state.store.insert_volunteer(&volunteer).await?;
    info!("Added volunteer {} ({})", volunteer.id, volunteer.name);

    Ok((StatusCode::CREATED, Json(volunteer)))
}

/// GET /api/v1/volunteers
pub async fn handle_list_volunteers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Volunteer>>, AppError> {
    Ok(Json(state.store.list_volunteers().await?))
}

/// GET /api/v1/volunteers/map
///
/// Only volunteers that have picked a point on the map.
pub async fn handle_volunteer_map(
    State(state): State<AppState>,
) -> Result<Json<Vec<Volunteer>>, AppError> {
    let volunteers = state
        .store
        .list_volunteers()
        .await?
        .into_iter()
        .filter(Volunteer::has_coordinates)
        .collect();
    Ok(Json(volunteers))
}
