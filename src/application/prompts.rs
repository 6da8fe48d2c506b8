//! Built-in system prompts and default model identifiers.
//!
//! The prompts live under `prompts/` at the crate root so they can be edited
//! without touching Rust sources. The synthesis prompt embeds unescaped JSON
//! examples and is stored as plain text.

pub const VISION_SYSTEM_PROMPT: &str = include_str!("../../prompts/vision.json");
pub const TRANSCRIPT_ANALYSIS_SYSTEM_PROMPT: &str =
    include_str!("../../prompts/transcript_analysis.json");
pub const SYNTHESIS_SYSTEM_PROMPT: &str = include_str!("../../prompts/synthesis.txt");

pub const DEFAULT_VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_TRANSCRIPT_ANALYSIS_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_SYNTHESIS_MODEL: &str = "openai/gpt-oss-20b";

/// Returns the caller's override unless it is absent or blank.
pub fn resolve_system_prompt<'a>(custom: Option<&'a str>, default: &'a str) -> &'a str {
    match custom {
        Some(prompt) if !prompt.trim().is_empty() => prompt,
        _ => default,
    }
}
