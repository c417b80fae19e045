//! Supported models and the process-wide tokenizer registry
//!
//! Each model maps to one adapter instance, created on first use and cached
//! for the lifetime of the process. Vocabulary files live in the vendor
//! directory and are loaded exactly once per model, however many threads
//! race on the first access.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TokenizerError, TokenizerResult};
use crate::huggingface::HfTokenizer;
use crate::openai::TiktokenTokenizer;
use crate::tokenizer::Tokenizer;

/// Environment variable overriding the vendored vocabulary directory
pub const VENDOR_DIR_ENV: &str = "TALLY_VENDOR_DIR";

const MODEL_COUNT: usize = 12;

/// Every model with a supported tokenizer.
///
/// The string form of each variant (serde, [`FromStr`], [`fmt::Display`]) is
/// its snake_case id, e.g. `open_ai_cl100k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    AllMpnetBaseV2,
    Anthropic,
    Bert,
    BgeLargeEn,
    BgeM3,
    Gemini,
    Llama3,
    Mistral,
    MultilingualE5Large,
    OpenAi,
    OpenAiCl100k,
    Qwen,
}

/// Which engine backs a model, and with what vocabulary.
enum Engine {
    /// Hugging Face `tokenizers`, fed by a vendored `tokenizer.json`
    HuggingFace(&'static str),
    /// Embedded tiktoken rank table
    O200kBase,
    Cl100kBase,
}

impl Model {
    /// All supported models, in registry order.
    pub const ALL: [Model; MODEL_COUNT] = [
        Model::AllMpnetBaseV2,
        Model::Anthropic,
        Model::Bert,
        Model::BgeLargeEn,
        Model::BgeM3,
        Model::Gemini,
        Model::Llama3,
        Model::Mistral,
        Model::MultilingualE5Large,
        Model::OpenAi,
        Model::OpenAiCl100k,
        Model::Qwen,
    ];

    /// The fixed subset designated for LLM token budgeting, as opposed to
    /// the embedding-only models.
    pub fn available_llm_tokenizers() -> &'static [Model] {
        &[
            Model::Anthropic,
            Model::Gemini,
            Model::Llama3,
            Model::Mistral,
            Model::OpenAi,
            Model::Qwen,
        ]
    }

    /// Whether this model belongs to [`Model::available_llm_tokenizers`].
    pub fn is_llm(self) -> bool {
        Self::available_llm_tokenizers().contains(&self)
    }

    /// Stable string identifier, also used by serde.
    pub fn id(self) -> &'static str {
        match self {
            Model::AllMpnetBaseV2 => "all_mpnet_base_v2",
            Model::Anthropic => "anthropic",
            Model::Bert => "bert",
            Model::BgeLargeEn => "bge_large_en",
            Model::BgeM3 => "bge_m3",
            Model::Gemini => "gemini",
            Model::Llama3 => "llama3",
            Model::Mistral => "mistral",
            Model::MultilingualE5Large => "multilingual_e5_large",
            Model::OpenAi => "open_ai",
            Model::OpenAiCl100k => "open_ai_cl100k",
            Model::Qwen => "qwen",
        }
    }

    fn engine(self) -> Engine {
        match self {
            Model::AllMpnetBaseV2 => Engine::HuggingFace("all-mpnet-base-v2.json"),
            Model::Anthropic => Engine::HuggingFace("claude-v1-tokenization.json"),
            Model::Bert => Engine::HuggingFace("bert-base-uncased.json"),
            Model::BgeLargeEn => Engine::HuggingFace("bge-large-en.json"),
            Model::BgeM3 => Engine::HuggingFace("bge-m3.json"),
            Model::Gemini => Engine::HuggingFace("gemma3.json"),
            Model::Llama3 => Engine::HuggingFace("Meta-Llama-3-70B-Instruct.json"),
            Model::Mistral => Engine::HuggingFace("mistral-small-3.1-24b-2503.json"),
            Model::MultilingualE5Large => Engine::HuggingFace("multilingual-e5-large.json"),
            Model::OpenAi => Engine::O200kBase,
            Model::OpenAiCl100k => Engine::Cl100kBase,
            Model::Qwen => Engine::HuggingFace("qwen3.json"),
        }
    }

    /// Absolute path of this model's vendored vocabulary, for the
    /// file-backed models. The tiktoken-backed models embed their rank
    /// tables and return `None`.
    pub fn vocab_path(self) -> Option<PathBuf> {
        match self.engine() {
            Engine::HuggingFace(file) => Some(vendor_dir().join(file)),
            Engine::O200kBase | Engine::Cl100kBase => None,
        }
    }

    /// The process-wide tokenizer for this model, loading its vocabulary on
    /// first use.
    ///
    /// Concurrent first access loads at most once; every caller gets the
    /// same cached instance. A failed load is not cached and the error
    /// surfaces to the caller.
    pub fn tokenizer(self) -> TokenizerResult<&'static dyn Tokenizer> {
        let cell = &REGISTRY[self as usize];
        let adapter = cell.get_or_try_init(|| build(self))?;
        Ok(adapter.as_ref())
    }
}

impl FromStr for Model {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .iter()
            .copied()
            .find(|model| model.id() == s)
            .ok_or_else(|| TokenizerError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

static REGISTRY: [OnceCell<Box<dyn Tokenizer>>; MODEL_COUNT] = [
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
    OnceCell::new(),
];

/// Directory holding the vendored `tokenizer.json` files.
pub fn vendor_dir() -> PathBuf {
    match std::env::var_os(VENDOR_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("vendor"),
    }
}

fn build(model: Model) -> TokenizerResult<Box<dyn Tokenizer>> {
    match model.engine() {
        Engine::HuggingFace(file) => {
            let path = vendor_dir().join(file);
            debug!("Loading tokenizer vocabulary from: {:?}", path);
            Ok(Box::new(HfTokenizer::from_file(model.id(), path)?))
        }
        Engine::O200kBase => {
            debug!("Loading embedded o200k_base rank table");
            Ok(Box::new(TiktokenTokenizer::o200k_base()?))
        }
        Engine::Cl100kBase => {
            debug!("Loading embedded cl100k_base rank table");
            Ok(Box::new(TiktokenTokenizer::cl100k_base()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for model in Model::ALL {
            assert_eq!(model.id().parse::<Model>().unwrap(), model);
            assert_eq!(model.to_string(), model.id());
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "not_a_model".parse::<Model>().unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownModel(_)));
    }

    #[test]
    fn serde_uses_the_snake_case_ids() {
        for model in Model::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.id()));
            let back: Model = serde_json::from_str(&json).unwrap();
            assert_eq!(back, model);
        }
    }

    #[test]
    fn llm_registry_has_the_fixed_membership() {
        let llms = Model::available_llm_tokenizers();
        assert_eq!(
            llms,
            &[
                Model::Anthropic,
                Model::Gemini,
                Model::Llama3,
                Model::Mistral,
                Model::OpenAi,
                Model::Qwen,
            ]
        );
        assert!(Model::OpenAi.is_llm());
        assert!(!Model::Bert.is_llm());
        assert!(!Model::OpenAiCl100k.is_llm());
    }

    #[test]
    fn file_backed_models_resolve_vendor_paths() {
        let path = Model::Bert.vocab_path().unwrap();
        assert!(path.ends_with("bert-base-uncased.json"));
        assert!(Model::OpenAi.vocab_path().is_none());
        assert!(Model::OpenAiCl100k.vocab_path().is_none());
    }

    #[test]
    fn registry_order_matches_discriminants() {
        for (index, model) in Model::ALL.iter().enumerate() {
            assert_eq!(*model as usize, index);
        }
    }
}
