// All prompt text used by the gateway routes.
// Placeholders in `{braces}` are filled in a single pass by `composer::fill_template`.

/// Rendered in place of the score list when a student has no scores.
pub const NO_RECENT_SCORES: &str = "no recent scores available";

/// Rendered in place of the attendance line when no summary was supplied.
pub const NO_RECENT_ATTENDANCE: &str = "no recent attendance data";

/// Topic list used when a subject is not in the syllabus.
pub const GENERAL_TOPICS: &str = "general topics";

/// Progress summary prompt. Replace: {student_name}, {scores}, {attendance}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate a concise, 3-sentence progress report for a student named {student_name}.
The report should be encouraging and professional, suitable for a teacher or volunteer to read.

Your summary MUST prioritize the student's recent academic performance and attendance record.
Base your assessment on the following key data points.

- **Priority 1: Recent Test Scores:** {scores}
- **Priority 2: Recent Attendance:** {attendance}

Based on this data, please generate a summary that reflects these priorities."#;

/// Learning plan prompt. Replace: {student_name}, {subject}, {topics}, {score}, {band_rule}
pub const LEARNING_PLAN_PROMPT_TEMPLATE: &str = r#"You are an expert, encouraging tutor for an NGO. Your goal is to create a personalized, one-week micro-learning plan for a student.
The plan should be simple, actionable, and formatted in clear Markdown.

Student's Name: {student_name}
Subject: {subject}
Relevant Topics in this Subject: {topics}
Recent Score in this Subject: {score}

{band_rule}"#;

/// Band rule for scores at or below the remediation ceiling. Replace: {score}
pub const REMEDIATION_RULE: &str = r#"**CRITICAL RULE:** The student's score of {score} is critically low. This is alarming and requires immediate, foundational help.
Your top priority is to address this. The plan MUST start with a sentence acknowledging this is a focus area.
Create a gentle, step-by-step recovery plan focusing on the absolute basics of the subject."#;

/// Band rule for scores at or above the excellence floor. Replace: {score}
pub const EXCELLENCE_RULE: &str = r#"**CRITICAL RULE:** The student's score of {score} is excellent!
The plan should start by praising this achievement.
Include one or two advanced or creative challenge questions to maintain momentum and engagement."#;

/// Band rule for everything in between. Replace: {score}
pub const STANDARD_RULE: &str = r#"**RULE:** The student has a passing score of {score} but has room for improvement.
Generate a standard improvement plan. Identify one likely weak area within the subject's topics and provide a targeted mini-lesson and practice problems."#;

/// Chatbot persona. Sent as the opening user turn of every conversation.
pub const CHAT_PERSONA_PREAMBLE: &str = "You are Sahay, a friendly and helpful AI assistant for an NGO \
    dedicated to providing education for underprivileged children in India. Your name means 'helper'. \
    Your primary role is to answer questions from users about the NGO's mission, volunteer opportunities, \
    student programs, and how people can contribute. You must stick to topics related to the NGO. \
    If a user asks a question unrelated to the NGO (e.g., about politics, weather, personal opinions), \
    you must politely decline and state that you can only provide information about the NGO's work. \
    Keep your answers concise and encouraging.";

/// Replace: {preamble}, {static_knowledge}, {heading}, {dynamic_knowledge}
pub const CHAT_SYSTEM_TEMPLATE: &str = r#"{preamble}

You MUST use the following information as your primary source of knowledge to answer user questions:
---
{static_knowledge}

{heading}
{dynamic_knowledge}
---"#;

/// Separates the static knowledge file from the live website text.
pub const WEBSITE_KNOWLEDGE_HEADING: &str = "--- Additional Information from our Website ---";

/// The assistant's scripted first reply, sent right after the persona turn.
pub const CHAT_GREETING: &str = "Hello! My name is Sahay. I'm here to help answer your questions \
    about our NGO's work. How can I assist you today?";
