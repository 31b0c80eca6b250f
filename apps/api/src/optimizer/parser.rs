//! Reply Parser — turns the model's free-form reply into score, suggestions,
//! issues and prompt variants.
//!
//! The reply is prose that loosely follows the instruction template, so parsing
//! is best-effort: unrecognised lines are skipped and malformed fragments are
//! dropped rather than reported. Callers cannot tell "the model said nothing
//! useful" apart from "the model listed zero suggestions".
//!
//! State is an explicit value (`ReplyParser`) folded over the trimmed,
//! non-empty lines of the reply:
//!
//! ```text
//! lines ─▶ classify ─▶ step ─▶ … ─▶ finish ─▶ ParsedReply
//! ```

use crate::optimizer::models::PromptVariant;

const VARIANT_PREFIX: &str = "optimized prompt:";
const REASON_PREFIX: &str = "reason:";
const BULLET: char = '*';

/// The bucket the parser is currently filling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Score,
    Suggestions,
    Issues,
    Variant,
}

/// What a single line means, independent of parser state.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// Score-bearing line, with its first integer token if any.
    Score(Option<i64>),
    VariantPrompt(&'a str),
    Reason(&'a str),
    SuggestionsHeader,
    IssuesHeader,
    /// Anything else. Interpreted against the current section.
    Text(&'a str),
}

/// Fields extracted from one reply. `quality_score` is `None` when no
/// score-bearing line yielded an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub quality_score: Option<i64>,
    pub suggestions: Vec<String>,
    pub issues: Vec<String>,
    pub variants: Vec<PromptVariant>,
}

/// Per-parse state machine. Created fresh for every reply.
#[derive(Debug, Clone, Default)]
pub struct ReplyParser {
    section: Section,
    pending_prompt: String,
    reply: ParsedReply,
}

impl ReplyParser {
    #[cfg(test)]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Advances the machine by one trimmed, non-empty line.
    pub fn step(mut self, line: &str) -> Self {
        match classify(line) {
            LineKind::Score(token) => {
                self.section = Section::Score;
                // First match wins; later score lines never overwrite.
                if self.reply.quality_score.is_none() {
                    self.reply.quality_score = token;
                }
            }
            LineKind::VariantPrompt(text) => {
                self.section = Section::Variant;
                self.pending_prompt = text.to_string();
            }
            LineKind::Reason(reason) => {
                if !self.pending_prompt.is_empty() {
                    self.reply.variants.push(PromptVariant {
                        optimized_prompt: std::mem::take(&mut self.pending_prompt),
                        reason: Some(reason.to_string()),
                    });
                }
            }
            LineKind::SuggestionsHeader => self.section = Section::Suggestions,
            LineKind::IssuesHeader => self.section = Section::Issues,
            LineKind::Text(text) => self.accumulate(text),
        }
        self
    }

    fn accumulate(&mut self, text: &str) {
        match self.section {
            Section::Suggestions => push_bullet(&mut self.reply.suggestions, text),
            Section::Issues => push_bullet(&mut self.reply.issues, text),
            Section::Variant if !self.pending_prompt.is_empty() => {
                self.pending_prompt.push(' ');
                self.pending_prompt.push_str(text);
            }
            _ => {}
        }
    }

    /// Ends the parse. A variant prompt still waiting for its reason is dropped.
    pub fn finish(self) -> ParsedReply {
        self.reply
    }
}

/// Parses a full model reply.
pub fn parse_reply(text: &str) -> ParsedReply {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(ReplyParser::default(), ReplyParser::step)
        .finish()
}

fn classify(line: &str) -> LineKind<'_> {
    let lower = line.to_lowercase();

    if lower.contains("score") && line.chars().any(|c| c.is_ascii_digit()) {
        return LineKind::Score(first_integer(line));
    }
    if let Some(rest) = strip_prefix_ignore_case(line, VARIANT_PREFIX) {
        return LineKind::VariantPrompt(rest.trim());
    }
    if let Some(rest) = strip_prefix_ignore_case(line, REASON_PREFIX) {
        return LineKind::Reason(rest.trim());
    }
    if lower.contains("suggest") {
        return LineKind::SuggestionsHeader;
    }
    if lower.contains("issue") {
        return LineKind::IssuesHeader;
    }
    LineKind::Text(line)
}

/// First whitespace-delimited token made only of ASCII digits. Signed
/// tokens such as `-3` are skipped.
fn first_integer(line: &str) -> Option<i64> {
    line.split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .find_map(|token| token.parse::<i64>().ok())
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

fn push_bullet(items: &mut Vec<String>, line: &str) {
    if let Some(rest) = line.strip_prefix(BULLET) {
        items.push(rest.trim().to_string());
    }
}
