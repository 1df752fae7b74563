use crate::arena::{Arena, Span};
use crate::compat::Vec;
use crate::error::Result;
use memchr::memchr_iter;

/// Split a decoded scheme into its ordered `+`-delimited tokens.
///
/// Tokens are sub-spans of the scheme's own bytes, so the list costs no
/// extra arena space. Consecutive `+` delimiters produce nothing; a
/// scheme with no token characters at all still yields exactly one
/// (empty) token, so the list is never empty while a scheme exists.
///
/// Splitting runs on the decoded bytes: an escape such as `%2B` has
/// already become `+` and delimits like any other.
pub(crate) fn split(arena: &Arena, scheme: Span) -> Result<Vec<Span>> {
    let bytes = arena.get(scheme);

    let mut tokens = Vec::new();
    tokens.try_reserve_exact(memchr_iter(b'+', bytes).count() + 1)?;

    let mut start = 0;
    for plus in memchr_iter(b'+', bytes) {
        if plus > start {
            tokens.push(scheme.slice(start as u32, plus as u32));
        }
        start = plus + 1;
    }
    if bytes.len() > start {
        tokens.push(scheme.slice(start as u32, bytes.len() as u32));
    }
    if tokens.is_empty() {
        tokens.push(scheme.slice(0, 0));
    }
    Ok(tokens)
}
