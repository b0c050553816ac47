use serde::Deserialize;

use crate::aggregation::AttendanceSummary;
use crate::composer::prompts::{NO_RECENT_ATTENDANCE, NO_RECENT_SCORES, SUMMARY_PROMPT_TEMPLATE};
use crate::composer::{fill_template, non_blank, MISSING_STUDENT_NAME};
use crate::errors::AppError;

/// A subject/score pair as it appears in the summary prompt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectScore {
    pub subject: String,
    pub score: f64,
}

/// Builds the progress-summary prompt. Scores come first, attendance second.
pub fn compose_summary_prompt(
    student_name: Option<&str>,
    scores: &[SubjectScore],
    attendance: Option<&AttendanceSummary>,
) -> Result<String, AppError> {
    let student_name = non_blank(student_name)
        .ok_or_else(|| AppError::Validation(MISSING_STUDENT_NAME.to_string()))?;

    Ok(fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("student_name", student_name),
            ("scores", &render_scores(scores)),
            ("attendance", &render_attendance(attendance)),
        ],
    ))
}

fn render_scores(scores: &[SubjectScore]) -> String {
    if scores.is_empty() {
        return NO_RECENT_SCORES.to_string();
    }
    scores
        .iter()
        .map(|s| format!("{}: {}", s.subject, s.score))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_attendance(attendance: Option<&AttendanceSummary>) -> String {
    match attendance {
        Some(a) => format!(
            "present {} days, absent {} days in the last week",
            a.present, a.absent
        ),
        None => NO_RECENT_ATTENDANCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_embed_both_sentinels() {
        let prompt = compose_summary_prompt(Some("Asha"), &[], None).unwrap();
        assert!(prompt.contains("no recent scores"));
        assert!(prompt.contains("no recent attendance"));
        assert!(prompt.contains("student named Asha"));
    }

    #[test]
    fn test_braces_in_subject_are_not_substituted() {
        let scores = vec![SubjectScore {
            subject: "{student_name} {attendance}".to_string(),
            score: 50.0,
        }];
        let prompt = compose_summary_prompt(Some("Asha"), &scores, None).unwrap();
        assert!(prompt.contains("{student_name} {attendance}: 50"));
        assert!(prompt.contains("student named Asha"));
    }

    #[test]
    fn test_scores_and_attendance_are_rendered() {
        let scores = vec![
            SubjectScore {
                subject: "Math".to_string(),
                score: 72.0,
            },
            SubjectScore {
                subject: "Science".to_string(),
                score: 88.5,
            },
        ];
        let attendance = AttendanceSummary {
            present: 4,
            absent: 1,
        };

        let prompt = compose_summary_prompt(Some("Asha"), &scores, Some(&attendance)).unwrap();

        assert!(prompt.contains("Recent Test Scores:** Math: 72, Science: 88.5"));
        assert!(prompt.contains("present 4 days, absent 1 days in the last week"));
        assert!(!prompt.contains(NO_RECENT_SCORES));
        assert!(!prompt.contains(NO_RECENT_ATTENDANCE));
    }

    #[test]
    fn test_scores_section_precedes_attendance() {
        let prompt = compose_summary_prompt(Some("Asha"), &[], None).unwrap();
        let scores_at = prompt.find("Priority 1").unwrap();
        let attendance_at = prompt.find("Priority 2").unwrap();
        assert!(scores_at < attendance_at);
    }

    #[test]
    fn test_missing_or_blank_name_is_rejected() {
        assert!(matches!(
            compose_summary_prompt(None, &[], None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            compose_summary_prompt(Some("   "), &[], None),
            Err(AppError::Validation(_))
        ));
    }
}
