use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::composer::prompts::GENERAL_TOPICS;
use crate::errors::AppError;

/// Static subject → topics lookup, loaded from a JSON object file.
#[derive(Debug, Clone, Default)]
pub struct Syllabus {
    subjects: HashMap<String, Vec<String>>,
}

impl Syllabus {
    pub fn from_map(subjects: HashMap<String, Vec<String>>) -> Self {
        Self { subjects }
    }

    /// Reads and parses the syllabus file. Called per request; nothing is cached.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read syllabus file {}", path.display()))?;
        let subjects: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
            .with_context(|| format!("Syllabus file {} is not valid JSON", path.display()))?;
        Ok(Self { subjects })
    }

    /// Comma-separated topics for `subject`, or the general-topics sentinel.
    /// Exact key match first, then a case-insensitive match.
    pub fn topics_for(&self, subject: &str) -> String {
        let subject = subject.trim();
        self.subjects
            .get(subject)
            .or_else(|| {
                self.subjects
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(subject))
                    .map(|(_, topics)| topics)
            })
            .filter(|topics| !topics.is_empty())
            .map(|topics| topics.join(", "))
            .unwrap_or_else(|| GENERAL_TOPICS.to_string())
    }
}
