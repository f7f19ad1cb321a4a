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
//! Skin tone ("Fitzpatrick") modifiers.
//!
//! A modifier is nothing more than the Unicode® string that gets combined with a base emoji.
//! Which modifiers exist is up to the caller.

use std::fmt::{Display, Formatter};
use std::fmt;

use regex::Regex;

/// An immutable skin tone modifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FitzpatrickModifier {
    unicode: String,
}

impl FitzpatrickModifier {
    /// Creates a modifier from its Unicode® representation
    pub fn new<S: Into<String>>(unicode: S) -> Self {
        Self { unicode: unicode.into() }
    }

    /// Parses a codepoint sequence written in hex, using the delimiters that are accepted for
    /// emoji file names (`-`, `_`, `.` or spaces), e.g. `1f3fd`, `U+1F3FD` or `emoji_u1f3fd.svg`.
    ///
    /// A part only counts as a codepoint if it is entirely hex (optionally prefixed by `u` or
    /// `U+`) and either carries that prefix or contains at least one digit, so words like
    /// `face` or `emoji` aren't taken for codepoints. Skipped parts are logged.
    /// Codepoints that aren't valid Unicode® scalar values are skipped as well.
    /// # Examples
    /// ```
    /// use emoji_core::FitzpatrickModifier;
    ///
    /// let medium = FitzpatrickModifier::from_sequence("1f3fd");
    /// assert_eq!(medium.unicode(), "🏽");
    ///
    /// let prefixed = FitzpatrickModifier::from_sequence("U+1F3FB");
    /// assert_eq!(prefixed.unicode(), "\u{1f3fb}");
    ///
    /// let file_name = FitzpatrickModifier::from_sequence("emoji_u1f3fe.svg");
    /// assert_eq!(file_name.unicode(), "\u{1f3fe}");
    /// ```
    pub fn from_sequence(sequence: &str) -> Self {
        lazy_static! {
            static ref DELIMITERS: Regex = Regex::new(r"[-_. ]+").unwrap();
            static ref HEX_CODEPOINT: Regex = Regex::new(r"^([uU]\+?)?([a-fA-F0-9]{1,8})$").unwrap();
        }
        let codepoints: Vec<u32> = DELIMITERS.split(sequence.trim())
            .filter(|part| !part.is_empty())
            .filter_map(|part| {
                let codepoint = HEX_CODEPOINT.captures(part)
                    .filter(|captures| captures.get(1).is_some()
                        || captures[2].chars().any(|digit| digit.is_ascii_digit()))
                    .and_then(|captures| u32::from_str_radix(&captures[2], 16).ok());
                if codepoint.is_none() {
                    warn!("Ignoring {:?} in modifier sequence {:?}", part, sequence);
                }
                codepoint
            })
            .collect();
        if codepoints.is_empty() {
            warn!("No codepoints found in modifier sequence {:?}", sequence);
        }
        Self::from_u32_sequence(&codepoints)
    }

    /// Builds a modifier from raw codepoints
    /// # Examples
    /// ```
    /// use emoji_core::FitzpatrickModifier;
    ///
    /// let darkest = FitzpatrickModifier::from_u32_sequence(&[0x1f3ff]);
    /// assert_eq!(darkest, FitzpatrickModifier::new("\u{1f3ff}"));
    /// ```
    pub fn from_u32_sequence(codepoints: &[u32]) -> Self {
        let unicode = codepoints.iter()
            .filter_map(|codepoint| {
                let character = std::char::from_u32(*codepoint);
                if character.is_none() {
                    warn!("Skipping invalid codepoint {:X} in modifier", codepoint);
                }
                character
            })
            .collect::<String>();
        Self::new(unicode)
    }

    /// Returns the Unicode® representation that gets appended to a base emoji
    pub fn unicode(&self) -> &str {
        &self.unicode
    }
}

impl AsRef<str> for FitzpatrickModifier {
    fn as_ref(&self) -> &str {
        &self.unicode
    }
}

impl Display for FitzpatrickModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unicode)
    }
}
