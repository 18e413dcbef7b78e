//! Prompt handling for numerology report generation and chat consultation.
//!
//! This crate provides:
//! - The two prompt kinds and their built-in default prompts
//! - A version registry with one active prompt per kind
//! - Placeholder substitution of a user's numerology chart into a template
//!
//! The registry is an ordinary value: build it once at startup and pass it
//! to whatever needs a template.

pub mod error;
pub mod kind;
pub mod registry;
pub mod template;

pub use error::PromptError;
pub use kind::{ALL_PROMPT_KINDS, DEFAULT_CHAT_PROMPT, DEFAULT_REPORT_PROMPT, PromptKind};
pub use registry::{PromptRegistry, SystemPrompt};
pub use template::{ChatMessage, PLACEHOLDERS, PromptContext, Sender};
