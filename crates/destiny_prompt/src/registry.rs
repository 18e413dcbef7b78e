//! Versioned system prompts with one active version per kind.

use serde::{Deserialize, Serialize};

use crate::error::PromptError;
use crate::kind::PromptKind;

/// One saved version of a system prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPrompt {
    #[serde(rename = "type")]
    pub kind: PromptKind,
    /// Free-form label, e.g. `v1.1`.
    pub version: String,
    pub content: String,
    #[serde(default)]
    pub is_active: bool,
}

impl SystemPrompt {
    pub fn new(kind: PromptKind, version: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            version: version.into(),
            content: content.into(),
            is_active: false,
        }
    }

    /// Mark this prompt active on save.
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }
}

/// Prompt history in save order.
///
/// At most one prompt per kind is active. [`template`](Self::template)
/// falls back to the kind's built-in default when none is.
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    prompts: Vec<SystemPrompt>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prompt version. Saving an active prompt deactivates every
    /// other prompt of the same kind.
    pub fn save(&mut self, prompt: SystemPrompt) -> Result<(), PromptError> {
        if prompt.version.trim().is_empty() {
            return Err(PromptError::EmptyField("version"));
        }
        if prompt.content.trim().is_empty() {
            return Err(PromptError::EmptyField("content"));
        }
        if prompt.is_active {
            self.deactivate(prompt.kind);
        }
        tracing::debug!(
            kind = prompt.kind.name(),
            version = %prompt.version,
            active = prompt.is_active,
            "saved prompt version"
        );
        self.prompts.push(prompt);
        Ok(())
    }

    /// Versions of `kind`, newest first.
    pub fn versions(&self, kind: PromptKind) -> impl Iterator<Item = &SystemPrompt> {
        self.prompts.iter().rev().filter(move |p| p.kind == kind)
    }

    /// The active prompt of `kind`, if any.
    pub fn active(&self, kind: PromptKind) -> Option<&SystemPrompt> {
        self.prompts.iter().find(|p| p.kind == kind && p.is_active)
    }

    /// Make the newest prompt of `kind` labelled `version` the active one.
    pub fn activate(&mut self, kind: PromptKind, version: &str) -> Result<(), PromptError> {
        let idx = self
            .prompts
            .iter()
            .rposition(|p| p.kind == kind && p.version == version)
            .ok_or_else(|| PromptError::UnknownVersion {
                kind,
                version: version.to_string(),
            })?;
        self.deactivate(kind);
        self.prompts[idx].is_active = true;
        tracing::debug!(kind = kind.name(), version, "activated prompt version");
        Ok(())
    }

    /// Clear the active flag on every prompt of `kind`.
    pub fn deactivate(&mut self, kind: PromptKind) {
        for p in self.prompts.iter_mut().filter(|p| p.kind == kind) {
            p.is_active = false;
        }
    }

    /// Template text for `kind`: the active prompt's content, or the default.
    pub fn template(&self, kind: PromptKind) -> &str {
        self.active(kind)
            .map(|p| p.content.as_str())
            .unwrap_or_else(|| kind.default_prompt())
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{DEFAULT_CHAT_PROMPT, DEFAULT_REPORT_PROMPT};

    #[test]
    fn empty_registry_uses_defaults() {
        let reg = PromptRegistry::new();
        assert_eq!(reg.template(PromptKind::ReportGen), DEFAULT_REPORT_PROMPT);
        assert_eq!(reg.template(PromptKind::ChatConsultant), DEFAULT_CHAT_PROMPT);
        assert!(reg.is_empty());
    }

    #[test]
    fn inactive_prompt_does_not_override_default() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "draft")).unwrap();
        assert_eq!(reg.template(PromptKind::ReportGen), DEFAULT_REPORT_PROMPT);
    }

    #[test]
    fn saving_active_deactivates_same_kind_only() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "one").active()).unwrap();
        reg.save(SystemPrompt::new(PromptKind::ChatConsultant, "c1", "chat").active()).unwrap();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v2", "two").active()).unwrap();

        assert_eq!(reg.template(PromptKind::ReportGen), "two");
        assert_eq!(reg.template(PromptKind::ChatConsultant), "chat");
        let active: Vec<_> = reg.versions(PromptKind::ReportGen).filter(|p| p.is_active).collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn versions_newest_first() {
        let mut reg = PromptRegistry::new();
        for v in ["v1", "v2", "v3"] {
            reg.save(SystemPrompt::new(PromptKind::ChatConsultant, v, "x")).unwrap();
        }
        let labels: Vec<&str> = reg
            .versions(PromptKind::ChatConsultant)
            .map(|p| p.version.as_str())
            .collect();
        assert_eq!(labels, ["v3", "v2", "v1"]);
        assert_eq!(reg.versions(PromptKind::ReportGen).count(), 0);
    }

    #[test]
    fn activate_rolls_back() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "one")).unwrap();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v2", "two").active()).unwrap();
        reg.activate(PromptKind::ReportGen, "v1").unwrap();
        assert_eq!(reg.template(PromptKind::ReportGen), "one");
        assert_eq!(reg.active(PromptKind::ReportGen).unwrap().version, "v1");
    }

    #[test]
    fn activate_unknown_version() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "one").active()).unwrap();
        let err = reg.activate(PromptKind::ReportGen, "v9").unwrap_err();
        assert_eq!(
            err,
            PromptError::UnknownVersion { kind: PromptKind::ReportGen, version: "v9".into() }
        );
        assert_eq!(reg.template(PromptKind::ReportGen), "one");
    }

    #[test]
    fn activate_is_kind_scoped() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "one")).unwrap();
        assert!(reg.activate(PromptKind::ChatConsultant, "v1").is_err());
    }

    #[test]
    fn deactivate_restores_default() {
        let mut reg = PromptRegistry::new();
        reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "one").active()).unwrap();
        reg.deactivate(PromptKind::ReportGen);
        assert_eq!(reg.template(PromptKind::ReportGen), DEFAULT_REPORT_PROMPT);
    }

    #[test]
    fn empty_fields_rejected() {
        let mut reg = PromptRegistry::new();
        assert_eq!(
            reg.save(SystemPrompt::new(PromptKind::ReportGen, " ", "x")),
            Err(PromptError::EmptyField("version"))
        );
        assert_eq!(
            reg.save(SystemPrompt::new(PromptKind::ReportGen, "v1", "")),
            Err(PromptError::EmptyField("content"))
        );
        assert_eq!(reg.len(), 0);
    }
}
