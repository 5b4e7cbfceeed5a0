use crate::models::GenerationRequest;

pub const MAX_PROMPT_CHARS: usize = 1000;

pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "Create a responsive search bar with keyboard navigation",
    "Design a compact profile card with avatar and actions",
    "Build an accessible modal with focus trap and close on Esc",
];

const FENCE: &str = "```";

/// Builds the instruction sent to the proxy for one generation.
pub fn build_instruction(req: &GenerationRequest) -> String {
    let GenerationRequest { description, framework, styling } = req;
    format!(
        "You are an expert frontend developer. Generate a complete, production-ready {framework} component based on this description: \"{description}\"\n\
        \n\
        Requirements:\n\
        - Framework: {framework}\n\
        - Styling: {styling}\n\
        - Fully functional, accessible, responsive, with comments and error handling.\n\
        \n\
        Return ONLY the component code."
    )
}

/// Removes one leading fence (with optional language tag) and one trailing fence, then trims.
///
/// Only the outermost markers are touched; fences inside the code survive.
pub fn strip_code_fences(text: &str) -> String {
    let mut code = text;

    if let Some(rest) = code.trim_start().strip_prefix(FENCE) {
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(rest.len());
        let rest = &rest[tag_len..];
        code = rest.strip_prefix('\n').unwrap_or(rest);
    }

    if let Some(rest) = code.strip_suffix(FENCE) {
        code = rest;
    }

    code.trim().to_string()
}
