// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the fallible `qmath-core` operations.

use thiserror::Error;

/// Invalid-input failures surfaced by the math library.
///
/// Degenerate-but-defined inputs (zero-length vectors, empty parse targets)
/// never produce an error; they fall back to documented results instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// `floor_div_mod` was called with a denominator that is not positive.
    #[error("floor_div_mod: bad denominator {0}")]
    BadDenominator(f64),
    /// `floor_div_mod` was called with a NaN or infinite numerator.
    #[error("floor_div_mod: bad numerator {0}")]
    BadNumerator(f64),
    /// The tokenizer reached end of input inside a quoted token.
    #[error("unterminated quoted token starting at byte {0}")]
    UnterminatedQuote(usize),
    /// The process-wide game variant was already published.
    #[error("game variant already set to {current}; refusing to switch to {requested}")]
    VariantAlreadySet {
        /// Variant that is currently active.
        current: crate::GameVariant,
        /// Variant the caller attempted to install.
        requested: crate::GameVariant,
    },
    /// A game-variant name or code did not match any known variant.
    #[error("unknown game variant: {0}")]
    UnknownVariant(String),
}
