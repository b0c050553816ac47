//! Inference Gateway: composes prompts and forwards them to the model.
//!
//! Flow for every feature: validate input → gather data → compose prompt →
//! `Completer::complete` → relay text. No retries; an upstream failure becomes
//! a 500 carrying the feature's generic message.

pub mod handlers;

use std::path::Path;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::aggregation::{
    build_score_series, compute_attendance_summary, latest_score, AttendanceSummary,
    TrailingWindow,
};
use crate::composer::{
    build_chat_conversation, compose_chat_system_prompt, compose_learning_plan_prompt,
    compose_summary_prompt, HistoryTurn, LearningPlanPrompt, ScoreBand, SubjectScore, Syllabus,
    MISSING_MESSAGE,
};
use crate::errors::AppError;
use crate::knowledge::KnowledgeBase;
use crate::llm_client::{Completer, CompletionRequest, CHAT_MAX_OUTPUT_TOKENS};
use crate::models::student::Student;
use crate::state::AppState;

pub const SUMMARY_FAILED: &str = "Failed to generate summary.";
pub const CHAT_FAILED: &str = "Failed to get response from chatbot.";
pub const PLAN_FAILED: &str = "Failed to generate learning plan.";

/// Progress summary from caller-supplied data.
pub async fn generate_summary(
    llm: &dyn Completer,
    student_name: Option<&str>,
    scores: &[SubjectScore],
    attendance: Option<&AttendanceSummary>,
) -> Result<String, AppError> {
    let prompt = compose_summary_prompt(student_name, scores, attendance)?;

    info!(
        "Generating summary with {} ({} scores, attendance: {})",
        llm.model(),
        scores.len(),
        attendance.is_some()
    );

    llm.complete(&CompletionRequest::prompt(prompt))
        .await
        .map_err(AppError::upstream(SUMMARY_FAILED))
}

/// Chatbot reply grounded in the static knowledge file plus the live website.
/// A failed website fetch degrades to static knowledge only.
pub async fn chat_reply(
    llm: &dyn Completer,
    knowledge: &KnowledgeBase,
    message: Option<&str>,
    history: Vec<HistoryTurn>,
) -> Result<String, AppError> {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_MESSAGE.to_string()))?;

    let dynamic_knowledge = knowledge.dynamic_text().await;
    let static_knowledge = knowledge.static_text().await?;
    let system_prompt = compose_chat_system_prompt(&static_knowledge, &dynamic_knowledge);

    info!(
        "Chat turn with {} (history: {}, {} chars from {})",
        llm.model(),
        history.len(),
        dynamic_knowledge.len(),
        knowledge.page_url()
    );

    let request =
        CompletionRequest::conversation(build_chat_conversation(system_prompt, history, message))
            .with_max_output_tokens(CHAT_MAX_OUTPUT_TOKENS);

    llm.complete(&request)
        .await
        .map_err(AppError::upstream(CHAT_FAILED))
}

/// One-week learning plan; the syllabus file is read fresh on each call.
pub async fn generate_learning_plan(
    llm: &dyn Completer,
    syllabus_path: &Path,
    student_name: Option<&str>,
    subject: Option<&str>,
    score: Option<f64>,
) -> Result<(LearningPlanPrompt, String), AppError> {
    let syllabus = Syllabus::load(syllabus_path).await?;
    let prompt = compose_learning_plan_prompt(student_name, subject, score, &syllabus)?;

    info!(
        "Generating learning plan with {} (band: {:?})",
        llm.model(),
        prompt.band
    );

    let plan = llm
        .complete(&CompletionRequest::prompt(prompt.text.as_str()))
        .await
        .map_err(AppError::upstream(PLAN_FAILED))?;

    Ok((prompt, plan))
}

async fn load_student(state: &AppState, student_id: Uuid) -> Result<Student, AppError> {
    state
        .store
        .get_student(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))
}

/// Server-side summary: reads the student's scores and trailing-window
/// attendance from the record store, then calls `generate_summary`.
pub async fn student_progress_summary(
    state: &AppState,
    student_id: Uuid,
) -> Result<String, AppError> {
    let student = load_student(state, student_id).await?;

    let scores = state.store.scores_for_student(student_id).await?;
    let scores: Vec<SubjectScore> = build_score_series(&scores, student_id)
        .into_iter()
        .map(|point| SubjectScore {
            subject: point.subject,
            score: point.score,
        })
        .collect();

    let window = TrailingWindow::ending_now(state.config.absence_window_days);
    let logs = state.store.attendance_since(window.cutoff()).await?;
    let attendance = compute_attendance_summary(&logs, student_id, &window);
    // No marked days in the window reads as "no data", not as zero attendance.
    // The web dashboard posts `{present: 0, absent: 0}` to /generate-summary in
    // that case; this route sends the "no recent attendance data" line instead.
    let attendance = (attendance.total() > 0).then_some(attendance);

    generate_summary(
        state.llm.as_ref(),
        Some(&student.name),
        &scores,
        attendance.as_ref(),
    )
    .await
}

/// Server-side learning plan from the student's latest score, optionally for
/// one subject.
pub async fn student_learning_plan(
    state: &AppState,
    student_id: Uuid,
    subject: Option<&str>,
) -> Result<StudentPlan, AppError> {
    let subject = subject.map(str::trim).filter(|s| !s.is_empty());
    let student = load_student(state, student_id).await?;
    let scores = state.store.scores_for_student(student_id).await?;

    let latest = latest_score(&scores, student_id, subject).ok_or_else(|| {
        AppError::NotFound(match subject {
            Some(s) => format!("No {s} score recorded for student {student_id}"),
            None => format!("No scores recorded for student {student_id}"),
        })
    })?;

    let (prompt, plan) = generate_learning_plan(
        state.llm.as_ref(),
        &state.config.syllabus_path,
        Some(&student.name),
        Some(&latest.subject),
        Some(latest.score),
    )
    .await?;

    Ok(StudentPlan {
        plan,
        band: prompt.band,
        subject: latest.subject.clone(),
        score: latest.score,
    })
}

#[derive(Debug, Serialize)]
pub struct StudentPlan {
    pub plan: String,
    pub band: ScoreBand,
    pub subject: String,
    pub score: f64,
}
