// Prompt optimization: instruction template, reply parsing, response assembly.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod assembler;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod score;
pub mod service;
