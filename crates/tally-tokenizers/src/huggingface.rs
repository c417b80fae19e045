//! Hugging Face `tokenizers` adapter
//!
//! Wraps one `tokenizer.json` vocabulary behind the [`Tokenizer`] trait.
//! Encoding adds the model's special tokens and decoding skips them,
//! matching the engine defaults the vendored vocabularies were built for.

use std::path::Path;

use tokenizers::Tokenizer as HfEngine;

use crate::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::{Token, TokenId, Tokenizer};

/// Adapter over a Hugging Face `tokenizers` vocabulary
#[derive(Debug)]
pub struct HfTokenizer {
    name: String,
    engine: HfEngine,
}

impl HfTokenizer {
    /// Load a vocabulary from a `tokenizer.json` file.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> TokenizerResult<Self> {
        let name = name.into();
        let path = path.as_ref();
        let engine = HfEngine::from_file(path).map_err(|e| TokenizerError::VocabularyLoad {
            name: name.clone(),
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(Self { name, engine })
    }

    /// Build a vocabulary from in-memory `tokenizer.json` bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> TokenizerResult<Self> {
        let name = name.into();
        let engine = HfEngine::from_bytes(bytes).map_err(|e| TokenizerError::VocabularyLoad {
            name: name.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { name, engine })
    }
}

impl Tokenizer for HfTokenizer {
    fn tokenize(&self, text: &str) -> TokenizerResult<Vec<Token>> {
        let encoding = self
            .engine
            .encode(text, true)
            .map_err(|e| TokenizerError::TokenizationFailed(e.to_string()))?;
        Ok(encoding
            .get_tokens()
            .iter()
            .cloned()
            .map(Token::Piece)
            .collect())
    }

    fn encode(&self, text: &str) -> TokenizerResult<Vec<TokenId>> {
        let encoding = self
            .engine
            .encode(text, true)
            .map_err(|e| TokenizerError::TokenizationFailed(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, ids: &[TokenId]) -> String {
        // The engine skips ids with no vocabulary entry; any residual engine
        // failure degrades to the empty string rather than surfacing.
        self.engine.decode(ids, true).unwrap_or_default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
