//! Response Assembler — packages a parsed reply into the wire response.

use crate::optimizer::models::PromptResponse;
use crate::optimizer::parser::ParsedReply;
use crate::optimizer::score::ScoreSource;

/// Builds the response, drawing a fallback score only when the reply had none.
pub fn assemble(
    original_prompt: &str,
    parsed: ParsedReply,
    scores: &dyn ScoreSource,
) -> PromptResponse {
    let quality_score = parsed
        .quality_score
        .unwrap_or_else(|| scores.fallback_score());

    PromptResponse {
        original_prompt: original_prompt.to_string(),
        quality_score,
        suggestions: parsed.suggestions,
        issues_detected: parsed.issues,
        variants: parsed.variants,
    }
}
