//! Request Handler — validate, compose the instruction, call the generator,
//! parse the reply and assemble the response.
//!
//! Exactly one generation call per accepted request. Nothing is retried.

use tracing::{debug, info};

use crate::errors::{AppError, EMPTY_PROMPT_DETAIL};
use crate::llm_client::TextGenerator;
use crate::optimizer::assembler::assemble;
use crate::optimizer::models::PromptResponse;
use crate::optimizer::parser::parse_reply;
use crate::optimizer::prompts::build_instruction;
use crate::optimizer::score::ScoreSource;

pub async fn optimize_prompt(
    raw_prompt: &str,
    generator: &dyn TextGenerator,
    scores: &dyn ScoreSource,
) -> Result<PromptResponse, AppError> {
    let prompt = raw_prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::InvalidInput(EMPTY_PROMPT_DETAIL.to_string()));
    }

    let instruction = build_instruction(prompt);
    info!("Optimizing prompt ({} chars)", prompt.chars().count());

    let reply = generator.generate(&instruction).await?;
    debug!("Generation reply: {} lines", reply.lines().count());

    let parsed = parse_reply(&reply);
    if parsed.quality_score.is_none() {
        debug!("No score in reply; using fallback");
    }
    info!(
        "Parsed reply: {} suggestions, {} issues, {} variants",
        parsed.suggestions.len(),
        parsed.issues.len(),
        parsed.variants.len()
    );

    Ok(assemble(prompt, parsed, scores))
}
