// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Whitespace-separated float list parsing (console `"x y z"` style values).
//!
//! Tokenizing is delegated to a [`Tokenizer`] so hosts can plug in their own
//! command-line lexer; [`CommandTokenizer`] follows the console rules.

use tracing::trace;

use crate::MathError;

/// Maximum number of arguments [`CommandTokenizer`] produces per line.
pub const MAX_ARGS: usize = 80;

/// Splits an input string into argument tokens.
pub trait Tokenizer {
    /// Returns the tokens of `input`, borrowing from it.
    ///
    /// # Errors
    /// Implementations report malformed input (for example an unterminated
    /// quote) as a [`MathError`].
    fn tokenize<'a>(&self, input: &'a str) -> Result<Vec<&'a str>, MathError>;
}

/// Console tokenizer.
///
/// - Tokens are separated by whitespace; a newline ends the command.
/// - `//` starts a comment that runs to the end of the command.
/// - `"quoted text"` forms one token without the quotes.
/// - At most [`MAX_ARGS`] tokens are kept; the rest are dropped.
///
/// Unlike the console, which silently takes everything after an unmatched
/// `"` as one token, an unterminated quote is rejected with
/// [`MathError::UnterminatedQuote`]. Half-quoted float lists are almost
/// always truncated input, and reading them as a single `0.0` hides that.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandTokenizer;

impl Tokenizer for CommandTokenizer {
    fn tokenize<'a>(&self, input: &'a str) -> Result<Vec<&'a str>, MathError> {
        let bytes = input.as_bytes();
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'\n' {
                break;
            }
            if b.is_ascii_whitespace() {
                i += 1;
                continue;
            }
            if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                break;
            }

            let token = if b == b'"' {
                let start = i + 1;
                let len = bytes[start..]
                    .iter()
                    .position(|&c| c == b'"')
                    .ok_or(MathError::UnterminatedQuote(i))?;
                i = start + len + 1;
                &input[start..start + len]
            } else {
                let start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'"' {
                    i += 1;
                }
                &input[start..i]
            };

            if tokens.len() == MAX_ARGS {
                trace!(token, "dropping argument past MAX_ARGS");
                continue;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Parses the longest leading float literal of `s`, like C `atof`.
///
/// Leading whitespace is skipped; input without a numeric prefix yields
/// `0.0`.
pub fn atof(s: &str) -> f32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Parses up to `out.len()` floats from `s` into `out`.
///
/// Tokens are converted with [`atof`] semantics, so a non-numeric token
/// becomes `0.0` but still counts as parsed. Slots past the parsed tokens
/// are zero-filled. Returns the number of values parsed. An empty `out`
/// returns `0` without tokenizing.
///
/// # Errors
/// Propagates tokenizer failures.
///
/// # Examples
/// ```
/// use qmath_core::{parse_floats, CommandTokenizer};
/// let mut out = [9.0_f32; 4];
/// let n = parse_floats(&CommandTokenizer, "1 2.5 -3", &mut out).unwrap();
/// assert_eq!(n, 3);
/// assert_eq!(out, [1.0, 2.5, -3.0, 0.0]);
/// ```
pub fn parse_floats<T>(tokenizer: &T, s: &str, out: &mut [f32]) -> Result<usize, MathError>
where
    T: Tokenizer + ?Sized,
{
    if out.is_empty() {
        return Ok(0);
    }
    let tokens = tokenizer.tokenize(s)?;
    let count = tokens.len().min(out.len());
    for (slot, token) in out.iter_mut().zip(&tokens) {
        *slot = atof(token);
    }
    for slot in &mut out[count..] {
        *slot = 0.0;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atof_takes_numeric_prefix() {
        assert_eq!(atof("12.5abc"), 12.5);
        assert_eq!(atof("  -4"), -4.0);
        assert_eq!(atof(".5"), 0.5);
        assert_eq!(atof("7."), 7.0);
        assert_eq!(atof("1e3"), 1000.0);
        assert_eq!(atof("2e"), 2.0);
        assert_eq!(atof("abc"), 0.0);
        assert_eq!(atof("-"), 0.0);
        assert_eq!(atof(""), 0.0);
    }

    #[test]
    fn tokenizer_handles_quotes_and_comments() {
        let t = CommandTokenizer;
        assert_eq!(t.tokenize("a \"b c\" d // ignored").ok(), Some(vec!["a", "b c", "d"]));
        assert_eq!(t.tokenize("1 2\n3").ok(), Some(vec!["1", "2"]));
        assert_eq!(t.tokenize("   ").ok(), Some(vec![]));
        assert_eq!(t.tokenize("x \"open"), Err(MathError::UnterminatedQuote(2)));
    }

    #[test]
    fn tokenizer_caps_argument_count() {
        let line = vec!["1"; MAX_ARGS + 5].join(" ");
        let tokens = CommandTokenizer.tokenize(&line).unwrap_or_default();
        assert_eq!(tokens.len(), MAX_ARGS);
    }
}
