//! Prompt kinds and their built-in defaults.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// What a system prompt is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// One-off "Destiny Blueprint" report generation.
    ReportGen,
    /// Per-message chat consultation.
    ChatConsultant,
}

/// Both kinds, in wire order.
pub const ALL_PROMPT_KINDS: [PromptKind; 2] = [PromptKind::ReportGen, PromptKind::ChatConsultant];

impl PromptKind {
    /// Wire name (`report_gen` / `chat_consultant`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReportGen => "report_gen",
            Self::ChatConsultant => "chat_consultant",
        }
    }

    /// Prompt used when no version of this kind is active.
    pub const fn default_prompt(self) -> &'static str {
        match self {
            Self::ReportGen => DEFAULT_REPORT_PROMPT,
            Self::ChatConsultant => DEFAULT_CHAT_PROMPT,
        }
    }
}

impl Display for PromptKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROMPT_KINDS
            .into_iter()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| PromptError::UnknownKind(s.to_string()))
    }
}

/// Default system prompt for report generation.
pub const DEFAULT_REPORT_PROMPT: &str = "\
You are 'Destiny', a senior numerologist and life coach versed in Chaldean numerology, \
Loshu grid analysis and Vedic remedies.

RULES:
1. ACCURACY: the core numbers below are already calculated. Never recalculate them.
2. TONE: empathetic and professional. Prefer grounded explanations over mystical language.
3. STRUCTURE: Markdown, with key terms in bold.
4. BOUNDARIES: politely decline medical diagnosis, legal verdicts and lottery numbers.
5. CONTEXT: the chart is provided. Do not ask for the date of birth.

CHART for {{name}} (born {{dob}}):
- Moolank: {{moolank}}
- Bhagyank: {{bhagyank}}
- Kua: {{kua}}
- Loshu grid: {{loshuGrid}}
- Missing numbers: {{missingNumbers}}";

/// Default system prompt for chat consultation.
pub const DEFAULT_CHAT_PROMPT: &str = "\
You are 'Destiny', a helpful numerologist. Answer using {{name}}'s chart.

Moolank: {{moolank}}
Bhagyank: {{bhagyank}}
Loshu grid: {{loshuGrid}}
Missing numbers: {{missingNumbers}}

Conversation so far:
{{history}}

Question: {{question}}";
