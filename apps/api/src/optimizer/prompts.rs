// LLM prompt constants for the optimizer.

/// Instruction template sent to the generation backend. Replace `{prompt}`
/// with the trimmed user prompt before sending.
///
/// The reply parser keys off the wording requested here ("score", bullet
/// markers, `Optimized Prompt:` / `Reason:` prefixes). Change both together.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = "You are a world-class prompt engineer AI assistant.
Your task is to help users improve their prompts.

Original Prompt: \"{prompt}\"

Step 1: Rate the prompt from 0-100 based on clarity, specificity, and usefulness.
Step 2: Suggest improvements (e.g., clarify audience, format, scope).
Step 3: List 3-5 issues with the original prompt.
Step 4: Generate exactly 6 optimized prompt variants.
Each variant should be in this format:
Optimized Prompt: [full improved prompt here]
Reason: [explanation why it's better]
Use bullet points for suggestions and issues.
";

/// Embeds the prompt verbatim into the instruction template.
pub fn build_instruction(prompt: &str) -> String {
    OPTIMIZE_PROMPT_TEMPLATE.replace("{prompt}", prompt)
}
