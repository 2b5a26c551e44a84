//! Shared constants used across the application.

/// Comment every new thread starts with.
pub const PLACEHOLDER_COMMENT: &str = "Post massinha demais, hein?!";

/// Message shown when a comment is submitted without text.
pub const REQUIRED_FIELD_MESSAGE: &str = "Este campo é obrigatório!";

/// Heading above the comment form.
pub const COMMENT_FORM_HEADING: &str = "Deixe seu feedback";

/// Placeholder text inside the comment textarea.
pub const COMMENT_PLACEHOLDER: &str = "Deixe um comentário";

/// Label of the comment submit button.
pub const SUBMIT_LABEL: &str = "Publicar";

/// Name of the form field carrying the draft comment.
pub const COMMENT_FIELD: &str = "comment";
