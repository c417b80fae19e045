//! Token-budget control shared by every adapter
//!
//! The counting fast paths and the truncate-then-re-encode loop live here,
//! behind the provided methods on [`Tokenizer`], so the algorithm exists
//! exactly once.

use crate::error::TokenizerResult;
use crate::tokenizer::Tokenizer;

/// Cut `text` down to at most `max_tokens` tokens.
///
/// The non-strict fast path skips the engine entirely when the character
/// count is under half the budget: a character can cost up to about two
/// tokens, so such input cannot exceed the budget.
pub(crate) fn truncate<T>(
    tokenizer: &T,
    text: &str,
    max_tokens: usize,
    strict: bool,
) -> TokenizerResult<String>
where
    T: Tokenizer + ?Sized,
{
    if max_tokens == 0 {
        return Ok(String::new());
    }

    if !strict && text.chars().count() < max_tokens / 2 {
        return Ok(text.to_string());
    }

    let mut kept = tokenizer.encode(text)?;
    kept.truncate(max_tokens);
    let mut truncated = tokenizer.decode(&kept);

    // Decoding a cut id prefix can re-encode into a longer sequence when the
    // boundary lands on a merge, so drop ids until the re-encoded count fits.
    while tokenizer.encode(&truncated)?.len() > max_tokens {
        kept.pop();
        truncated = tokenizer.decode(&kept);
        if kept.is_empty() {
            break;
        }
    }

    Ok(truncated)
}

/// Whether `text` encodes to strictly fewer than `limit` ids.
pub(crate) fn below_limit<T>(
    tokenizer: &T,
    text: &str,
    limit: usize,
    strict: bool,
) -> TokenizerResult<bool>
where
    T: Tokenizer + ?Sized,
{
    if !strict && text.chars().count() < limit / 2 {
        return Ok(true);
    }

    Ok(tokenizer.encode(text)?.len() < limit)
}
