//! # Tally Tokenizers
//!
//! Uniform interface over the subword tokenizers vendored for Tally's
//! supported models. Calling code counts tokens, truncates text to a token
//! budget, and encodes/decodes against any model's vocabulary without
//! branching on model identity.
//!
//! Vocabulary-file-backed models load their `tokenizer.json` from the
//! vendor directory on first use; the OpenAI models use rank tables
//! embedded in the engine. Every model's adapter is a lazy process-wide
//! singleton.
//!
//! ## Example
//!
//! ```
//! use tally_tokenizers::{Model, Tokenizer};
//!
//! # fn main() -> tally_tokenizers::TokenizerResult<()> {
//! let tokenizer = Model::OpenAi.tokenizer()?;
//! let summary = tokenizer.truncate("a very long post body", 2_000, false)?;
//! assert!(tokenizer.below_limit(&summary, 2_001, false)?);
//! # Ok(())
//! # }
//! ```

mod budget;
pub mod error;
pub mod huggingface;
pub mod model;
pub mod openai;
pub mod tokenizer;

pub use error::{TokenizerError, TokenizerResult};
pub use huggingface::HfTokenizer;
pub use model::{vendor_dir, Model, VENDOR_DIR_ENV};
pub use openai::TiktokenTokenizer;
pub use tokenizer::{Token, TokenId, Tokenizer};
