// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Text form of a key chain
//!
//! Parses what `KeyChain`'s display form prints, so users can type chains on
//! the command line. It handles:
//! - Key names resolved through a `KeyNames` lookup ("Ctrl + C")
//! - Raw key codes ("17 + 67") for tokens that name no key
//! - An optional side suffix per stroke ("Ctrl (left) + C")
//! - Whitespace around separators
//!
//! # Architecture
//! nom splits the input into stroke tokens; name resolution happens after
//! the split so an unknown name reports the offending token instead of a
//! generic syntax error.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, space0},
    combinator::{all_consuming, map, opt},
    multi::separated_list1,
    sequence::{delimited, preceded},
    IResult, Parser,
};
use thiserror::Error;

use crate::core::chain::KeyChain;
use crate::core::keys::KeyNames;
use crate::core::types::{KeyCode, KeyStroke, ModifierSide};

/// Errors from parsing a chain typed as text
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid key chain syntax: {message}")]
    InvalidSyntax { message: String },

    #[error("Unknown key '{key}'")]
    UnknownKey { key: String },
}

/// A stroke as written, before name resolution.
#[derive(Debug, PartialEq)]
struct RawStroke<'a> {
    key: &'a str,
    side: ModifierSide,
}

/// Parse a chain such as `"Ctrl + Shift + C"`
///
/// # Arguments
/// * `input` - Strokes separated by `+`
/// * `names` - Lookup used to resolve key names
///
/// # Returns
/// The chain in written order. Blank input gives an empty chain.
///
/// # Example
/// ```
/// use hotkey_chain::core::{parser::parse_chain, KeyChain, StandardKeyNames};
///
/// let chain = parse_chain("Ctrl + C", &StandardKeyNames)?;
/// assert_eq!(chain, KeyChain::from_keys([17, 67]));
/// # Ok::<(), hotkey_chain::core::parser::ParseError>(())
/// ```
pub fn parse_chain(input: &str, names: &dyn KeyNames) -> Result<KeyChain, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(KeyChain::new());
    }

    let (_, raw) = all_consuming(parse_strokes)
        .parse(input)
        .map_err(|e| ParseError::InvalidSyntax {
            message: format!("{:?}", e),
        })?;

    raw.into_iter()
        .map(|r| resolve_key(r.key, names).map(|code| KeyStroke::of(code, r.side)))
        .collect()
}

/// Resolve one key token: the name lookup wins, and only tokens that name
/// no key are read as raw integer codes.
///
/// Digit keys display as `"0"`..`"9"`, so a bare digit means the key, not
/// the raw code. Raw codes below 10 can't be typed this way.
pub fn resolve_key(token: &str, names: &dyn KeyNames) -> Result<KeyCode, ParseError> {
    let token = token.trim();
    names
        .code_for(token)
        .or_else(|| token.parse::<KeyCode>().ok())
        .ok_or_else(|| ParseError::UnknownKey {
            key: token.to_string(),
        })
}

fn parse_strokes(input: &str) -> IResult<&str, Vec<RawStroke<'_>>> {
    separated_list1((space0, char('+'), space0), parse_stroke).parse(input)
}

/// Parse a single stroke token: a key with an optional `(left)`/`(right)`.
fn parse_stroke(input: &str) -> IResult<&str, RawStroke<'_>> {
    let (input, key) = take_while1(|c: char| c != '+' && c != '(')(input)?;
    let (input, side) = opt(preceded(space0, parse_side)).parse(input)?;

    Ok((
        input,
        RawStroke {
            key: key.trim(),
            side: side.unwrap_or_default(),
        },
    ))
}

fn parse_side(input: &str) -> IResult<&str, ModifierSide> {
    delimited(
        (char('('), space0),
        alt((
            map(tag_no_case("left"), |_| ModifierSide::Left),
            map(tag_no_case("right"), |_| ModifierSide::Right),
        )),
        (space0, char(')')),
    )
    .parse(input)
}
