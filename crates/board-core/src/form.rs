//! Note Form Validation
//!
//! Turns raw create-form input into a draft for `BoardState::add_note`.
//! The gate is checked before content emptiness.

use thiserror::Error;

use crate::gate::Gate;
use crate::note::NoteColor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid password. Access denied.")]
    AccessDenied,
    #[error("Content cannot be empty.")]
    EmptyContent,
}

/// Raw create-form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub color: NoteColor,
    pub author: String,
    pub password: String,
}

/// Validated input, ready to become a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub color: NoteColor,
    pub author: String,
}

impl NoteForm {
    pub fn validate(&self, gate: &Gate) -> Result<NoteDraft, FormError> {
        if !gate.check(&self.password).is_allowed() {
            return Err(FormError::AccessDenied);
        }
        if self.content.trim().is_empty() {
            return Err(FormError::EmptyContent);
        }
        Ok(NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            color: self.color,
            author: self.author.clone(),
        })
    }
}
