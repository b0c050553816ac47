//! Learning-plan prompts and the score-band policy.
//!
//! Bands are mutually exclusive and checked in order: remediation (≤ 35),
//! excellence (≥ 95), then standard for everything in between.

use serde::Serialize;

use crate::composer::prompts::{
    EXCELLENCE_RULE, LEARNING_PLAN_PROMPT_TEMPLATE, REMEDIATION_RULE, STANDARD_RULE,
};
use crate::composer::syllabus::Syllabus;
use crate::composer::{fill_template, non_blank, MISSING_PLAN_FIELDS};
use crate::errors::AppError;

/// Highest score that still lands in the remediation band.
pub const REMEDIATION_CEILING: f64 = 35.0;

/// Lowest score that lands in the excellence band.
pub const EXCELLENCE_FLOOR: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Remediation,
    Excellence,
    Standard,
}

/// Band → instruction template. Order matters only for documentation; the
/// bands never overlap.
const BAND_POLICY: &[(ScoreBand, &str)] = &[
    (ScoreBand::Remediation, REMEDIATION_RULE),
    (ScoreBand::Excellence, EXCELLENCE_RULE),
    (ScoreBand::Standard, STANDARD_RULE),
];

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score <= REMEDIATION_CEILING {
            ScoreBand::Remediation
        } else if score >= EXCELLENCE_FLOOR {
            ScoreBand::Excellence
        } else {
            ScoreBand::Standard
        }
    }

    pub fn template(self) -> &'static str {
        BAND_POLICY
            .iter()
            .find(|(band, _)| *band == self)
            .map(|(_, template)| *template)
            .unwrap_or(STANDARD_RULE)
    }

    pub fn instruction(self, score: f64) -> String {
        fill_template(self.template(), &[("score", &score.to_string())])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningPlanPrompt {
    pub band: ScoreBand,
    pub text: String,
}

/// Builds the tutor prompt for a one-week plan.
///
/// Fails with a validation error when the name, subject, or score is missing.
/// A score of zero is present, not missing.
pub fn compose_learning_plan_prompt(
    student_name: Option<&str>,
    subject: Option<&str>,
    score: Option<f64>,
    syllabus: &Syllabus,
) -> Result<LearningPlanPrompt, AppError> {
    let (Some(student_name), Some(subject), Some(score)) =
        (non_blank(student_name), non_blank(subject), score)
    else {
        return Err(AppError::Validation(MISSING_PLAN_FIELDS.to_string()));
    };

    let band = ScoreBand::for_score(score);
    let text = fill_template(
        LEARNING_PLAN_PROMPT_TEMPLATE,
        &[
            ("student_name", student_name),
            ("subject", subject),
            ("topics", &syllabus.topics_for(subject)),
            ("score", &score.to_string()),
            ("band_rule", &band.instruction(score)),
        ],
    );

    Ok(LearningPlanPrompt { band, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::composer::prompts::GENERAL_TOPICS;

    fn syllabus() -> Syllabus {
        Syllabus::from_map(HashMap::from([(
            "Math".to_string(),
            vec!["Fractions".to_string(), "Decimals".to_string()],
        )]))
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::for_score(20.0), ScoreBand::Remediation);
        assert_eq!(ScoreBand::for_score(35.0), ScoreBand::Remediation);
        assert_eq!(ScoreBand::for_score(36.0), ScoreBand::Standard);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::Standard);
        assert_eq!(ScoreBand::for_score(94.0), ScoreBand::Standard);
        assert_eq!(ScoreBand::for_score(95.0), ScoreBand::Excellence);
        assert_eq!(ScoreBand::for_score(96.0), ScoreBand::Excellence);
        assert_eq!(ScoreBand::for_score(0.0), ScoreBand::Remediation);
    }

    #[test]
    fn test_fractional_scores_between_boundaries_are_standard() {
        assert_eq!(ScoreBand::for_score(35.5), ScoreBand::Standard);
        assert_eq!(ScoreBand::for_score(94.9), ScoreBand::Standard);
        assert_eq!(ScoreBand::for_score(35.0), ScoreBand::Remediation);
        assert_eq!(ScoreBand::for_score(95.0), ScoreBand::Excellence);
    }

    #[test]
    fn test_every_band_has_its_own_template() {
        assert_eq!(ScoreBand::Remediation.template(), REMEDIATION_RULE);
        assert_eq!(ScoreBand::Excellence.template(), EXCELLENCE_RULE);
        assert_eq!(ScoreBand::Standard.template(), STANDARD_RULE);
    }

    #[test]
    fn test_remediation_prompt_demands_acknowledgment() {
        let prompt =
            compose_learning_plan_prompt(Some("Asha"), Some("Math"), Some(30.0), &syllabus()).unwrap();

        assert_eq!(prompt.band, ScoreBand::Remediation);
        assert!(prompt
            .text
            .contains("The plan MUST start with a sentence acknowledging this is a focus area."));
        assert!(prompt.text.contains("score of 30 is critically low"));
        assert!(prompt.text.contains("Student's Name: Asha"));
        assert!(prompt.text.contains("Relevant Topics in this Subject: Fractions, Decimals"));
    }

    #[test]
    fn test_excellence_prompt_praises() {
        let prompt =
            compose_learning_plan_prompt(Some("Ravi"), Some("Math"), Some(95.0), &syllabus()).unwrap();
        assert_eq!(prompt.band, ScoreBand::Excellence);
        assert!(prompt.text.contains("should start by praising this achievement"));
        assert!(!prompt.text.contains("critically low"));
    }

    #[test]
    fn test_standard_prompt_targets_weak_area() {
        let prompt =
            compose_learning_plan_prompt(Some("Meena"), Some("Math"), Some(60.0), &syllabus()).unwrap();
        assert_eq!(prompt.band, ScoreBand::Standard);
        assert!(prompt.text.contains("Identify one likely weak area"));
    }

    #[test]
    fn test_unknown_subject_uses_general_topics() {
        let prompt =
            compose_learning_plan_prompt(Some("Asha"), Some("Art"), Some(70.0), &syllabus()).unwrap();
        assert!(prompt
            .text
            .contains(&format!("Relevant Topics in this Subject: {GENERAL_TOPICS}")));
    }

    #[test]
    fn test_missing_fields_are_validation_errors() {
        let s = syllabus();
        for (name, subject, score) in [
            (None, Some("Math"), Some(50.0)),
            (Some("Asha"), None, Some(50.0)),
            (Some("Asha"), Some("Math"), None),
            (Some("  "), Some("Math"), Some(50.0)),
        ] {
            let result = compose_learning_plan_prompt(name, subject, score, &s);
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_placeholder_lookalikes_in_input_stay_literal() {
        let prompt = compose_learning_plan_prompt(
            Some("{subject}"),
            Some("{student_name}"),
            Some(50.0),
            &syllabus(),
        )
        .unwrap();
        assert!(prompt.text.contains("Student's Name: {subject}"));
        assert!(prompt.text.contains("Subject: {student_name}"));
        assert!(prompt.text.contains("passing score of 50"));
    }

    #[test]
    fn test_zero_score_is_accepted() {
        let prompt =
            compose_learning_plan_prompt(Some("Asha"), Some("Math"), Some(0.0), &syllabus()).unwrap();
        assert_eq!(prompt.band, ScoreBand::Remediation);
    }
}
