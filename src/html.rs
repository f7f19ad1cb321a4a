/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! Conversion between Unicode® strings and runs of numeric HTML character references.
//!
//! Every codepoint is rendered on its own, without any separator between two references:
//! `❤️` (U+2764 U+FE0F) becomes `&#10084;&#65039;` or `&#x2764;&#xfe0f;`.

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::fmt;

use regex::Regex;

/// The two flavours of numeric character references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlEncoding {
    /// `&#<codepoint>;`
    Decimal,
    /// `&#x<codepoint in lowercase hex>;`
    Hexadecimal,
}

impl HtmlEncoding {
    /// Formats a single codepoint as a character reference
    /// # Examples
    /// ```
    /// use emoji_core::html::HtmlEncoding;
    ///
    /// assert_eq!(HtmlEncoding::Decimal.reference(0x1f604), "&#128516;");
    /// assert_eq!(HtmlEncoding::Hexadecimal.reference(0x1f604), "&#x1f604;");
    /// ```
    pub fn reference(self, codepoint: u32) -> String {
        match self {
            HtmlEncoding::Decimal => format!("&#{};", codepoint),
            HtmlEncoding::Hexadecimal => format!("&#x{:x};", codepoint),
        }
    }
}

/// Encodes every codepoint of `unicode` (in order) as a character reference.
///
/// The string is walked by `char`, i.e. by Unicode scalar value, so characters outside the
/// BMP result in exactly one reference each.
/// An empty string results in an empty string.
/// # Examples
/// ```
/// use emoji_core::html::{encode, HtmlEncoding};
///
/// assert_eq!(encode("❤\u{fe0f}", HtmlEncoding::Decimal), "&#10084;&#65039;");
/// assert_eq!(encode("❤\u{fe0f}", HtmlEncoding::Hexadecimal), "&#x2764;&#xfe0f;");
/// assert_eq!(encode("", HtmlEncoding::Decimal), "");
/// ```
pub fn encode(unicode: &str, encoding: HtmlEncoding) -> String {
    unicode.chars()
        .map(|codepoint| encoding.reference(codepoint as u32))
        .collect()
}

/// Shorthand for [encode] with [HtmlEncoding::Decimal]
pub fn decimal(unicode: &str) -> String {
    encode(unicode, HtmlEncoding::Decimal)
}

/// Shorthand for [encode] with [HtmlEncoding::Hexadecimal]
pub fn hexadecimal(unicode: &str) -> String {
    encode(unicode, HtmlEncoding::Hexadecimal)
}

/// Parses a run of numeric character references back into codepoints.
///
/// Decimal and hexadecimal references may be mixed; hex digits and the `x` are accepted in
/// either case. Anything in between two references is an error.
/// # Examples
/// ```
/// use emoji_core::html::decode;
///
/// assert_eq!(decode("&#128516;").unwrap(), vec![0x1f604]);
/// assert_eq!(decode("&#x2764;&#65039;").unwrap(), vec![0x2764, 0xfe0f]);
/// assert!(decode("&#x2764; &#65039;").is_err());
/// ```
pub fn decode(references: &str) -> Result<Vec<u32>, HtmlReferenceError> {
    lazy_static! {
        static ref REFERENCE: Regex = Regex::new(r"&#(?:[0-9]+|[xX][0-9a-fA-F]+);").unwrap();
    }
    let mut codepoints = Vec::new();
    let mut end = 0;
    for reference in REFERENCE.find_iter(references) {
        if reference.start() != end {
            return Err(HtmlReferenceError::Malformed(references[end..reference.start()].to_owned()));
        }
        end = reference.end();
        codepoints.push(parse_reference(reference.as_str())?);
    }
    if end != references.len() {
        return Err(HtmlReferenceError::Malformed(references[end..].to_owned()));
    }
    Ok(codepoints)
}

/// Parses a single reference that already matched `&#N;` or `&#xH;`
fn parse_reference(reference: &str) -> Result<u32, HtmlReferenceError> {
    let digits = reference.trim_start_matches("&#").trim_end_matches(';');
    let value = if digits.starts_with('x') || digits.starts_with('X') {
        u64::from_str_radix(&digits[1..], 16)
    } else {
        digits.parse::<u64>()
    };
    // The digits are already checked, so only an overflow can end up here
    let value = value.unwrap_or(u64::MAX);
    u32::try_from(value).ok()
        .and_then(std::char::from_u32)
        .map(|codepoint| codepoint as u32)
        .ok_or(HtmlReferenceError::InvalidCodepoint(value))
}

/// An error that occurs while decoding character references
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlReferenceError {
    /// The given text is not a numeric character reference
    Malformed(String),
    /// The reference is well-formed, but doesn't denote a Unicode® scalar value
    /// (e.g. a surrogate or anything above `U+10FFFF`).
    /// Values that don't even fit into a `u64` are reported as `u64::MAX`.
    InvalidCodepoint(u64),
}

impl Display for HtmlReferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HtmlReferenceError::Malformed(text) =>
                write!(f, "Not a numeric character reference: {:?}", text),
            HtmlReferenceError::InvalidCodepoint(value) =>
                write!(f, "{} is not a valid Unicode codepoint", value),
        }
    }
}

impl std::error::Error for HtmlReferenceError {}
