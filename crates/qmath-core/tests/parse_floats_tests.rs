// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]
use qmath_core::{parse_floats, CommandTokenizer, MathError, Tokenizer};

/// Splits on commas; stands in for a host-provided lexer.
struct CommaTokenizer;

impl Tokenizer for CommaTokenizer {
    fn tokenize<'a>(&self, input: &'a str) -> Result<Vec<&'a str>, MathError> {
        Ok(input.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
    }
}

#[test]
fn zero_fills_unused_slots() {
    let mut out = [5.0_f32; 5];
    let n = parse_floats(&CommandTokenizer, "0.25 -1", &mut out);
    assert_eq!(n, Ok(2));
    assert_eq!(out, [0.25, -1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn extra_tokens_are_ignored() {
    let mut out = [0.0_f32; 2];
    let n = parse_floats(&CommandTokenizer, "1 2 3 4", &mut out);
    assert_eq!(n, Ok(2));
    assert_eq!(out, [1.0, 2.0]);
}

#[test]
fn empty_target_parses_nothing() {
    let mut out: [f32; 0] = [];
    // Not even tokenized, so malformed input is fine here.
    assert_eq!(parse_floats(&CommandTokenizer, "\"open", &mut out), Ok(0));
}

#[test]
fn non_numeric_tokens_count_as_zero() {
    let mut out = [9.0_f32; 3];
    let n = parse_floats(&CommandTokenizer, "x 3 \"4.5\"", &mut out);
    assert_eq!(n, Ok(3));
    assert_eq!(out, [0.0, 3.0, 4.5]);
}

#[test]
fn comments_end_the_list() {
    let mut out = [9.0_f32; 3];
    let n = parse_floats(&CommandTokenizer, "1 // 2 3", &mut out);
    assert_eq!(n, Ok(1));
    assert_eq!(out, [1.0, 0.0, 0.0]);
}

#[test]
fn malformed_input_is_reported() {
    let mut out = [0.0_f32; 3];
    assert_eq!(
        parse_floats(&CommandTokenizer, "1 \"2", &mut out),
        Err(MathError::UnterminatedQuote(2))
    );
}

#[test]
fn custom_tokenizer_plugs_in() {
    let mut out = [0.0_f32; 3];
    let n = parse_floats(&CommaTokenizer, "1.5, 2.5,3.5", &mut out);
    assert_eq!(n, Ok(3));
    assert_eq!(out, [1.5, 2.5, 3.5]);
}
