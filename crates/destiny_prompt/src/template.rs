//! Placeholder substitution for prompt templates.
//!
//! Templates reference chart values with `{{placeholder}}` markers. The
//! template is scanned once from left to right; the first occurrence of
//! each known placeholder is replaced and later occurrences are kept
//! verbatim. Substituted text is never rescanned, so a user name
//! containing `{{question}}` stays literal. Placeholders the context has
//! no value for are left untouched.

use destiny_numerology::{BirthDate, NumerologyReport};
use serde::{Deserialize, Serialize};

/// Every placeholder a template may use.
pub const PLACEHOLDERS: [&str; 9] = [
    "name",
    "dob",
    "moolank",
    "bhagyank",
    "kua",
    "loshuGrid",
    "missingNumbers",
    "history",
    "question",
];

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Upper-case label used in the `{{history}}` transcript.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Ai => "AI",
        }
    }
}

/// One message of a consultation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { sender: Sender::User, content: content.into() }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self { sender: Sender::Ai, content: content.into() }
    }
}

/// Values available for substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptContext<'a> {
    name: Option<&'a str>,
    birth_date: Option<BirthDate>,
    dob: Option<&'a str>,
    report: Option<&'a NumerologyReport>,
    history: Option<&'a [ChatMessage]>,
    question: Option<&'a str>,
}

impl<'a> PromptContext<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name: Some(name), ..Self::default() }
    }

    pub fn with_birth_date(mut self, date: BirthDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Date of birth exactly as stored on the profile, e.g. `05/09/1995`.
    /// Takes precedence over the `d/m/y` form of [`with_birth_date`](Self::with_birth_date).
    pub fn with_dob(mut self, dob: &'a str) -> Self {
        self.dob = Some(dob);
        self
    }

    pub fn with_report(mut self, report: &'a NumerologyReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_history(mut self, history: &'a [ChatMessage]) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_question(mut self, question: &'a str) -> Self {
        self.question = Some(question);
        self
    }

    /// Value for `placeholder`, or `None` if the context lacks it.
    pub fn value(&self, placeholder: &str) -> Option<String> {
        let report = self.report;
        match placeholder {
            "name" => self.name.map(str::to_string),
            "dob" => self
                .dob
                .map(str::to_string)
                .or_else(|| self.birth_date.map(|d| d.to_string())),
            "moolank" => report.map(|r| r.moolank.to_string()),
            "bhagyank" => report.map(|r| r.bhagyank.to_string()),
            "kua" => report.map(|r| r.kua.to_string()),
            "loshuGrid" => report.and_then(|r| r.loshu_grid_json().ok()),
            "missingNumbers" => report.map(NumerologyReport::missing_numbers_joined),
            "history" => self.history.map(transcript),
            "question" => self.question.map(str::to_string),
            _ => None,
        }
    }

    /// Fill `template` with this context.
    pub fn render(&self, template: &str) -> String {
        let mut used = [false; PLACEHOLDERS.len()];
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };
            let key = &after[..end];
            if key.contains("{{") {
                // Unclosed marker; retry from the next `{{`.
                out.push_str("{{");
                rest = after;
                continue;
            }

            let fill = PLACEHOLDERS
                .iter()
                .position(|p| *p == key)
                .filter(|&i| !used[i])
                .and_then(|i| self.value(key).map(|v| (i, v)));
            match fill {
                Some((i, value)) => {
                    used[i] = true;
                    out.push_str(&value);
                }
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

fn transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|m| format!("{}: {}", m.sender.label(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_numerology::{Gender, compute_numerology_profile};

    fn report() -> NumerologyReport {
        compute_numerology_profile(15, 8, 1992, Gender::Male)
    }

    #[test]
    fn fills_chart_values() {
        let r = report();
        let ctx = PromptContext::new("Asha")
            .with_birth_date(BirthDate::new(15, 8, 1992))
            .with_report(&r);
        let out = ctx.render("{{name}} {{dob}} M{{moolank}} B{{bhagyank}} K{{kua}} [{{missingNumbers}}]");
        assert_eq!(out, "Asha 15/8/1992 M6 B8 K8 [3, 4, 6, 7]");
    }

    #[test]
    fn stored_dob_keeps_zero_padding() {
        let r = report();
        let out = PromptContext::new("Asha")
            .with_birth_date(BirthDate::from_profile_fields("05", "09", "1995").unwrap())
            .with_dob("05/09/1995")
            .with_report(&r)
            .render("{{name}} {{dob}}");
        assert_eq!(out, "Asha 05/09/1995");
    }

    #[test]
    fn dob_falls_back_to_birth_date() {
        let out = PromptContext::default()
            .with_birth_date(BirthDate::new(5, 9, 1995))
            .render("{{dob}}");
        assert_eq!(out, "5/9/1995");
    }

    #[test]
    fn loshu_grid_is_json() {
        let r = report();
        let out = PromptContext::default().with_report(&r).render("{{loshuGrid}}");
        assert_eq!(out, r#"{"1":2,"2":1,"3":0,"4":0,"5":1,"6":0,"7":0,"8":1,"9":2}"#);
    }

    #[test]
    fn only_first_occurrence_replaced() {
        let out = PromptContext::new("Ravi").render("{{name}} and {{name}}");
        assert_eq!(out, "Ravi and {{name}}");
    }

    #[test]
    fn missing_values_left_in_place() {
        let out = PromptContext::new("Ravi").render("{{name}}: {{moolank}} {{unknown}}");
        assert_eq!(out, "Ravi: {{moolank}} {{unknown}}");
    }

    #[test]
    fn substituted_values_not_scanned_for_later_placeholders() {
        // Chained whole-string replacement would turn this into "why? asks why?".
        let out = PromptContext::new("{{question}}")
            .with_question("why?")
            .render("{{name}} asks {{question}}");
        assert_eq!(out, "{{question}} asks why?");
    }

    #[test]
    fn history_transcript() {
        let history = vec![ChatMessage::user("Hello"), ChatMessage::ai("Namaste")];
        let out = PromptContext::default().with_history(&history).render("{{history}}");
        assert_eq!(out, "USER: Hello\nAI: Namaste");
    }

    #[test]
    fn empty_history_renders_empty() {
        let out = PromptContext::default().with_history(&[]).render("[{{history}}]");
        assert_eq!(out, "[]");
    }

    #[test]
    fn unterminated_marker_kept() {
        let out = PromptContext::new("Ravi").render("Hi {{name");
        assert_eq!(out, "Hi {{name");
    }

    #[test]
    fn nested_open_marker_recovers() {
        let out = PromptContext::new("Ravi").render("{{ {{name}}");
        assert_eq!(out, "{{ Ravi");
    }

    #[test]
    fn every_placeholder_has_a_value_in_full_context() {
        let r = report();
        let history = [ChatMessage::user("hi")];
        let ctx = PromptContext::new("n")
            .with_birth_date(BirthDate::new(1, 1, 2000))
            .with_report(&r)
            .with_history(&history)
            .with_question("q");
        for p in PLACEHOLDERS {
            assert!(ctx.value(p).is_some(), "{p}");
        }
    }
}
