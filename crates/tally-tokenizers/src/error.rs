//! Error types for tokenizer operations

use thiserror::Error;

/// Errors that can occur when resolving or driving a tokenizer
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Unknown tokenizer model: {0}")]
    UnknownModel(String),

    #[error("Failed to load vocabulary for '{name}': {message}")]
    VocabularyLoad { name: String, message: String },

    #[error("Failed to tokenize text: {0}")]
    TokenizationFailed(String),
}

/// Result type alias for tokenizer operations
pub type TokenizerResult<T> = Result<T, TokenizerError>;
