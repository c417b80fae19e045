#![allow(dead_code)]

use tally_tokenizers::{Model, Tokenizer};

/// Resolve a model's tokenizer, skipping with a note when its vendored
/// vocabulary is absent in this checkout.
pub fn loaded(model: Model) -> Option<&'static dyn Tokenizer> {
    if let Some(path) = model.vocab_path() {
        if !path.exists() {
            eprintln!("Skipping {model}: vocabulary not vendored at {path:?}");
            return None;
        }
    }
    match model.tokenizer() {
        Ok(tokenizer) => Some(tokenizer),
        Err(err) => {
            eprintln!("Skipping {model}: {err}");
            None
        }
    }
}

/// Models whose vocabularies ship inside the engine and always load.
pub fn offline_models() -> [Model; 2] {
    [Model::OpenAi, Model::OpenAiCl100k]
}

pub const TEST_SENTENCE: &str = "Hello world, this is a test sentence.";
