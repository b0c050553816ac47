use serde::Deserialize;

use crate::composer::fill_template;
use crate::composer::prompts::{
    CHAT_GREETING, CHAT_PERSONA_PREAMBLE, CHAT_SYSTEM_TEMPLATE, WEBSITE_KNOWLEDGE_HEADING,
};
use crate::llm_client::{ChatTurn, Role};

/// One prior turn from the client. Accepts either `{role, text}` or the
/// Gemini-style `{role, parts: [{text}]}` the web widget sends.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub parts: Vec<HistoryPart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPart {
    #[serde(default)]
    pub text: String,
}

impl HistoryTurn {
    fn into_turn(self) -> Option<ChatTurn> {
        let text = match self.text {
            Some(text) => text,
            None => self
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("\n"),
        };
        if text.trim().is_empty() {
            return None;
        }
        Some(ChatTurn {
            role: self.role,
            text,
        })
    }
}

/// Persona preamble, static knowledge, the website heading, then whatever the
/// live fetch produced (possibly nothing).
pub fn compose_chat_system_prompt(static_knowledge: &str, dynamic_knowledge: &str) -> String {
    fill_template(
        CHAT_SYSTEM_TEMPLATE,
        &[
            ("preamble", CHAT_PERSONA_PREAMBLE),
            ("static_knowledge", static_knowledge.trim()),
            ("heading", WEBSITE_KNOWLEDGE_HEADING),
            ("dynamic_knowledge", dynamic_knowledge.trim()),
        ],
    )
}

/// The full conversation sent upstream: persona turn, scripted greeting, the
/// client's history (empty turns dropped), then the new message.
pub fn build_chat_conversation(
    system_prompt: String,
    history: Vec<HistoryTurn>,
    message: &str,
) -> Vec<ChatTurn> {
    let mut turns = Vec::with_capacity(history.len() + 3);
    turns.push(ChatTurn::user(system_prompt));
    turns.push(ChatTurn::assistant(CHAT_GREETING));
    turns.extend(history.into_iter().filter_map(HistoryTurn::into_turn));
    turns.push(ChatTurn::user(message));
    turns
}
