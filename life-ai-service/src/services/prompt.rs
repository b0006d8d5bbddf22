//! The fixed health-assistant prompt wrapped around every question.

/// Persona and behaviour the model is asked to adopt.
pub const PROMPT_PREAMBLE: &str = "Tu es LIFE AI, un assistant médical intelligent et bienveillant. \
Réponds à cette question de santé de manière professionnelle, précise et accessible. \
Si la question nécessite un diagnostic médical urgent, recommande de consulter un professionnel de santé.";

/// Language and layout instruction closing the prompt.
pub const PROMPT_CLOSING: &str = "Réponds en français, de manière claire et structurée:";

/// Embed `question` verbatim between the preamble and the closing instruction.
///
/// The question is not escaped or filtered in any way, so a user can try to
/// override the instructions above it.
pub fn build_prompt(question: &str) -> String {
    format!(
        "{}\n\nQuestion: {}\n\n{}",
        PROMPT_PREAMBLE, question, PROMPT_CLOSING
    )
}
