/// System prompt template for NL -> shell command translation.

/// Phrase the model is instructed to answer with when it cannot produce a
/// command. Replies starting with `Error:` are suppressed by the validator
/// in `translate`.
pub const UNABLE_TO_DETERMINE: &str = "Error: Unable to determine command.";

/// Build the system prompt for the given host OS name.
pub fn translate_system_prompt(os_name: &str) -> String {
    format!(
        "You are ShellMind, an AI assistant. The user is on {}. \
         Your goal is to translate their natural language queries into a single, \
         executable shell command. Do not provide any explanations, only the \
         command itself. If you cannot determine a command, respond with '{}'",
        os_name, UNABLE_TO_DETERMINE
    )
}
