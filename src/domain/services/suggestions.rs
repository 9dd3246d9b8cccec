#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::MessageContent;

pub const STORYTELLING_TITLE: &str = "Storytelling suggestion";
pub const METAPHOR_TITLE: &str = "Metaphor suggestion";
pub const ANALOGY_TITLE: &str = "Analogy suggestion";

// Labels are matched case-insensitively on the first occurrence, trailing
// text up to end of line. Upstream models use both ASCII and fullwidth
// colons.
static LABELS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    return vec![
        (
            STORYTELLING_TITLE,
            Regex::new(r"(?i)Storytelling[:：](.*)").unwrap(),
        ),
        (
            METAPHOR_TITLE,
            Regex::new(r"(?i)Metaphor[:：](.*)").unwrap(),
        ),
        (ANALOGY_TITLE, Regex::new(r"(?i)Analogy[:：](.*)").unwrap()),
    ];
});

/// Wraps the user's raw research summary in the fixed instruction prompt for
/// the first exchange, demanding one labeled line per suggestion kind.
pub fn first_prompt(summary: &str) -> String {
    return format!(
        "Based on the following research summary, give exactly one suggestion \
of each kind below, one suggestion per line, strictly in this format:\n\
Storytelling: (one sentence)\n\
Metaphor: (one sentence)\n\
Analogy: (one sentence)\n\
Summary: {summary}\n\
Follow the format above exactly."
    );
}

/// Extracts the labeled suggestion lines from a gateway reply. Labels that
/// do not match are skipped, extraction itself never fails.
pub fn extract(reply: &str) -> Vec<MessageContent> {
    let mut suggestions = vec![];

    for (title, regex) in LABELS.iter() {
        let text = regex
            .captures(reply)
            .and_then(|caps| return caps.get(1))
            .map(|m| return m.as_str().trim().to_string());

        if let Some(text) = text {
            if text.is_empty() {
                continue;
            }
            suggestions.push(MessageContent::Suggestion {
                title: title.to_string(),
                text,
            });
        }
    }

    return suggestions;
}
