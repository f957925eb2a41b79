//! Preparing chat messages for the completion service, and the fixed replies
//! sent back when something goes wrong.

use regex::Regex;

/// Reply sent when the completion request fails
pub const REQUEST_FAILURE_MESSAGE: &str = "Error processing your request.";

/// Reply sent when the completion HTML cannot be converted
pub const FORMAT_FAILURE_MESSAGE: &str = "Error formatting response.";

const DEFAULT_INSTRUCTIONS: &str = "You are an AI assistant designed to provide accurate, clear, and helpful responses to user inquiries. Prioritize delivering information that is factual, well-researched, and up-to-date. Avoid assumptions and focus on providing reliable guidance. If you are unsure of an answer, be transparent about your limitations. Respond in a friendly and professional manner, using concise language that is easy to understand.";

const DEVELOPER_INSTRUCTIONS: &str = "Imagine you are a senior software developer with over 10 years of experience in building scalable applications. You are proficient in multiple programming language and have extensive knowledge of frameworks. Your approach emphasizes best practices, such as test-driven development and continuous integration. You are also known for your clean, efficient, and maintainable code.In this scenario, you are advising a junior developer on designing a new feature that enhances user experience without compromising performance. Provide detailed guidance on the architectural choices, coding standards to follow, and any potential pitfalls to avoid.";

/// Personality preamble prepended to every prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    /// General purpose assistant
    #[default]
    Default,
    /// Senior developer mentoring a junior
    Developer,
}

impl Persona {
    /// Resolve a persona by name.
    ///
    /// Surrounding whitespace is trimmed and case is ignored, so `" Developer "`
    /// selects [`Persona::Developer`]. Unknown or empty names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "developer" => Persona::Developer,
            "" => Persona::Default,
            other => {
                tracing::debug!(persona = other, "unknown persona, using default");
                Persona::Default
            }
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Persona::Default => DEFAULT_INSTRUCTIONS,
            Persona::Developer => DEVELOPER_INSTRUCTIONS,
        }
    }
}

/// Remove every mention of the bot (`<@id>` or `<@!id>`) and trim the rest
pub fn strip_mention(content: &str, bot_user_id: &str) -> String {
    let pattern = format!("<@!?{}>", regex::escape(bot_user_id));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(content, "").trim().to_string(),
        // escaped ids always compile; fall back to the untouched message
        Err(_) => content.trim().to_string(),
    }
}

/// Build the prompt for a chat message.
///
/// Returns `None` when nothing is left after removing the bot mention, in
/// which case the message should be ignored.
pub fn compose_prompt(persona: Persona, content: &str, bot_user_id: &str) -> Option<String> {
    let content = strip_mention(content, bot_user_id);
    if content.is_empty() {
        return None;
    }
    Some(format!("{} {}", persona.instructions(), content))
}
