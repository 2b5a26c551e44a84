//! Draft comment state and required-field validation.
//!
//! The validity marker is an explicit two-state value rather than a side
//! channel on the input element. It is set only by a failed submit attempt
//! and cleared by the next edit, so the message never shows while typing.

use crate::constants::REQUIRED_FIELD_MESSAGE;

/// Validity marker for the comment field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Clear,
    /// A submit was attempted with an empty draft.
    Required,
}

impl ValidationState {
    /// Message to surface on the form, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Clear => None,
            Self::Required => Some(REQUIRED_FIELD_MESSAGE),
        }
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Comment text that passed validation. Only [`DraftComment::take_accepted`]
/// produces one, so the thread never receives an empty entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedComment(String);

impl AcceptedComment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The in-progress comment text and its validity marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftComment {
    text: String,
    validation: ValidationState,
}

impl DraftComment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn validation(&self) -> ValidationState {
        self.validation
    }

    /// Whether the submit button is enabled. Length check only; whitespace counts.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty()
    }

    /// Replace the draft with new input. Any edit clears the validity marker.
    pub fn change(&mut self, text: impl Into<String>) {
        self.clear_validation();
        self.text = text.into();
    }

    /// Drop the invalid marker without touching the text.
    pub fn clear_validation(&mut self) {
        self.validation = ValidationState::Clear;
    }

    /// The field reported a missing required value.
    pub fn mark_required(&mut self) {
        self.validation = ValidationState::Required;
    }

    /// Take the draft for submission.
    ///
    /// An empty draft fails the required check: the marker is set and the
    /// draft is left as it was. Otherwise the draft is cleared and returned.
    pub fn take_accepted(&mut self) -> Option<AcceptedComment> {
        if self.text.is_empty() {
            self.mark_required();
            return None;
        }
        self.validation = ValidationState::Clear;
        Some(AcceptedComment(std::mem::take(&mut self.text)))
    }
}
