//! OpenAI BPE-rank adapter
//!
//! Wraps the rank tables embedded in `tiktoken-rs`. Unlike the vocabulary
//! file adapters, `tokenize` and `encode` are the same operation here and
//! both yield vocabulary ids; callers must treat the element type of
//! `tokenize` as opaque.

use tiktoken_rs::CoreBPE;

use crate::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::{Token, TokenId, Tokenizer};

/// Adapter over a tiktoken BPE rank table
pub struct TiktokenTokenizer {
    name: &'static str,
    bpe: CoreBPE,
}

impl std::fmt::Debug for TiktokenTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiktokenTokenizer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl TiktokenTokenizer {
    /// The `o200k_base` encoding used by current OpenAI models.
    pub fn o200k_base() -> TokenizerResult<Self> {
        let bpe = tiktoken_rs::o200k_base().map_err(|e| TokenizerError::VocabularyLoad {
            name: "o200k_base".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name: "o200k_base",
            bpe,
        })
    }

    /// The legacy `cl100k_base` encoding.
    pub fn cl100k_base() -> TokenizerResult<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| TokenizerError::VocabularyLoad {
            name: "cl100k_base".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name: "cl100k_base",
            bpe,
        })
    }
}

impl Tokenizer for TiktokenTokenizer {
    /// Identical to [`TiktokenTokenizer::encode`]; yields ids, not pieces.
    fn tokenize(&self, text: &str) -> TokenizerResult<Vec<Token>> {
        Ok(self
            .bpe
            .encode_ordinary(text)
            .into_iter()
            .map(Token::Id)
            .collect())
    }

    fn encode(&self, text: &str) -> TokenizerResult<Vec<TokenId>> {
        Ok(self.bpe.encode_ordinary(text))
    }

    fn decode(&self, ids: &[TokenId]) -> String {
        match self.bpe.decode(ids.to_vec()) {
            Ok(text) => text,
            // Unknown ranks, or a sequence whose bytes are not valid UTF-8
            // as a whole: decode id by id and drop the broken fragments.
            Err(_) => ids
                .iter()
                .map(|&id| self.bpe.decode(vec![id]).unwrap_or_default())
                .collect(),
        }
    }

    fn name(&self) -> &str {
        self.name
    }

    /// Keeps the first `max_tokens` ids and decodes them. A cut can land
    /// inside a multi-byte scalar, in which case the prefix is shortened
    /// one id at a time until it decodes cleanly. No re-encode pass runs in
    /// this variant.
    fn truncate(&self, text: &str, max_tokens: usize, strict: bool) -> TokenizerResult<String> {
        if max_tokens == 0 {
            return Ok(String::new());
        }

        if !strict && text.chars().count() < max_tokens / 2 {
            return Ok(text.to_string());
        }

        let ids = self.bpe.encode_ordinary(text);
        let mut keep = max_tokens.min(ids.len());
        loop {
            match self.bpe.decode(ids[..keep].to_vec()) {
                Ok(truncated) => return Ok(truncated),
                Err(_) if keep > 0 => keep -= 1,
                Err(_) => return Ok(String::new()),
            }
        }
    }
}
