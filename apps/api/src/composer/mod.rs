//! Prompt Composer: turns aggregated records into model instructions.
//! Pure functions only; the gateway handlers do the I/O.

pub mod chat;
pub mod learning_plan;
pub mod prompts;
pub mod summary;
pub mod syllabus;

pub use chat::{build_chat_conversation, compose_chat_system_prompt, HistoryTurn};
pub use learning_plan::{compose_learning_plan_prompt, LearningPlanPrompt, ScoreBand};
pub use summary::{compose_summary_prompt, SubjectScore};
pub use syllabus::Syllabus;

pub const MISSING_STUDENT_NAME: &str = "Student name is required.";
pub const MISSING_PLAN_FIELDS: &str = "Missing required fields for learning plan.";
pub const MISSING_MESSAGE: &str = "Message is required.";

/// `Some(trimmed)` when the value is present and not just whitespace.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text containing `{...}`
/// lands in the prompt verbatim. Unknown placeholders are left as-is.
pub(crate) fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_substitutes_known_keys() {
        let text = fill_template(
            "Hi {name}, score {score}.",
            &[("name", "Asha"), ("score", "80")],
        );
        assert_eq!(text, "Hi Asha, score 80.");
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let text = fill_template(
            "{subject} for {student_name}",
            &[("subject", "{student_name}"), ("student_name", "Asha")],
        );
        assert_eq!(text, "{student_name} for Asha");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill_template("{x} and {", &[("y", "1")]), "{x} and {");
        assert_eq!(fill_template("a{b{y}", &[("y", "1")]), "a{b1");
    }
}
