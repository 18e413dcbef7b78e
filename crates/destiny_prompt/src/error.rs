//! Error types for prompt handling.

use thiserror::Error;

use crate::kind::PromptKind;

/// Errors from prompt-kind parsing and registry updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PromptError {
    /// Prompt kind string is not `report_gen` or `chat_consultant`.
    #[error("unknown prompt kind {0:?}, expected report_gen or chat_consultant")]
    UnknownKind(String),
    /// No saved prompt of this kind carries the requested version label.
    #[error("no {kind} prompt with version {version:?}")]
    UnknownVersion { kind: PromptKind, version: String },
    /// A prompt was saved with an empty version label or empty content.
    #[error("prompt {0} must not be empty")]
    EmptyField(&'static str),
}
