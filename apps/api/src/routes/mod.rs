pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::aggregation::handlers as dashboard;
use crate::curriculum::handlers as curriculum;
use crate::gateway::handlers as gateway;
use crate::records::handlers as records;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI gateway (camelCase bodies)
        .route("/", get(gateway::handle_liveness))
        .route("/generate-summary", post(gateway::handle_generate_summary))
        .route("/chat", post(gateway::handle_chat))
        .route(
            "/generate-learning-plan",
            post(gateway::handle_generate_learning_plan),
        )
        // Records API
        .route(
            "/api/v1/students",
            get(records::handle_list_students).post(records::handle_create_student),
        )
        .route("/api/v1/students/:id", get(records::handle_get_student))
        .route(
            "/api/v1/attendance",
            get(records::handle_list_attendance).post(records::handle_record_attendance),
        )
        .route(
            "/api/v1/scores",
            get(records::handle_list_scores).post(records::handle_create_score),
        )
        .route(
            "/api/v1/volunteers",
            get(records::handle_list_volunteers).post(records::handle_create_volunteer),
        )
        .route("/api/v1/volunteers/map", get(records::handle_volunteer_map))
        // Dashboard & student views
        .route(
            "/api/v1/dashboard/absence-flags",
            get(dashboard::handle_absence_flags),
        )
        .route(
            "/api/v1/students/:id/scores",
            get(dashboard::handle_score_series),
        )
        .route(
            "/api/v1/students/:id/attendance-summary",
            get(dashboard::handle_attendance_summary),
        )
        .route(
            "/api/v1/students/:id/progress-summary",
            post(gateway::handle_student_progress_summary),
        )
        .route(
            "/api/v1/students/:id/learning-plan",
            post(gateway::handle_student_learning_plan),
        )
        // Curriculum library
        .route(
            "/api/v1/curriculum",
            get(curriculum::handle_list_curriculum).post(curriculum::handle_upload_curriculum),
        )
        .route(
            "/api/v1/curriculum/:id/file",
            get(curriculum::handle_download_curriculum),
        )
        .with_state(state)
}
