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
//! The main data struct for single emojis.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::emojis::errors::UnsupportedModifierError;
use crate::emojis::fitzpatrick::FitzpatrickModifier;
use crate::emojis::prototype::EmojiPrototype;
use crate::emojis::sequence_type::SequenceType;
use crate::html;
use crate::html::HtmlEncoding;

/// An immutable emoji (which might also be a sequence of several codepoints).
///
/// All fields are set once in [Emoji::new]; the HTML references are derived there and never
/// recomputed, so an `Emoji` can be shared between threads freely.
///
/// The identity of an `Emoji` is its Unicode® string alone: equality, hashing and ordering
/// ignore the description, aliases, tags and the sequence type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "EmojiPrototype", into = "EmojiPrototype")]
pub struct Emoji {
    description: String,
    supports_fitzpatrick: bool,
    sequence_type: SequenceType,
    aliases: Vec<String>,
    tags: Vec<String>,
    unicode: String,
    html_dec: String,
    html_hex: String,
    emoji_char: String,
}

impl Emoji {
    /// Creates an emoji and derives its HTML representations.
    ///
    /// `unicode` is not validated in any way; an empty string results in empty HTML references.
    /// # Examples
    /// ```
    /// use emoji_core::{Emoji, SequenceType};
    ///
    /// let smile = Emoji::new(
    ///     "smiling face with open mouth and smiling eyes",
    ///     SequenceType::None,
    ///     vec!["smile"],
    ///     vec!["happy", "joy", "pleased"],
    ///     "😄",
    ///     "😄",
    /// );
    ///
    /// assert_eq!(smile.html_decimal(), "&#128516;");
    /// assert_eq!(smile.html_hexadecimal(), "&#x1f604;");
    /// assert_eq!(smile.aliases(), ["smile"]);
    /// ```
    pub fn new<D, A, T, U, C>(
        description: D,
        sequence_type: SequenceType,
        aliases: A,
        tags: T,
        unicode: U,
        emoji_char: C,
    ) -> Emoji
        where D: Into<String>,
              A: IntoIterator,
              A::Item: Into<String>,
              T: IntoIterator,
              T::Item: Into<String>,
              U: Into<String>,
              C: Into<String> {
        let unicode = unicode.into();
        if unicode.is_empty() {
            debug!("Creating an emoji without any codepoints");
        }
        let html_dec = html::decimal(&unicode);
        let html_hex = html::hexadecimal(&unicode);
        trace!("{:?} => {} / {}", unicode, html_dec, html_hex);

        Emoji {
            description: description.into(),
            supports_fitzpatrick: sequence_type.supports_fitzpatrick(),
            sequence_type,
            aliases: aliases.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
            unicode,
            html_dec,
            html_hex,
            emoji_char: emoji_char.into(),
        }
    }

    /// The human readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a skin tone modifier can be applied, i.e. whether the sequence type isn't
    /// [SequenceType::None]
    pub fn supports_fitzpatrick(&self) -> bool {
        self.supports_fitzpatrick
    }

    /// How a skin tone modifier may be combined with this emoji
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    /// The aliases in the order they were given (the first one is usually the canonical one)
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The tags in the order they were given
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The Unicode® representation of the (unmodified) emoji
    pub fn unicode(&self) -> &str {
        &self.unicode
    }

    /// The secondary character representation, stored verbatim.
    ///
    /// It is independent of [Emoji::unicode] and doesn't take part in the HTML derivation or
    /// in comparisons.
    pub fn emoji_char(&self) -> &str {
        &self.emoji_char
    }

    /// All codepoints, each as a decimal character reference (e.g. `&#10084;&#65039;`)
    pub fn html_decimal(&self) -> &str {
        &self.html_dec
    }

    /// All codepoints, each as a hexadecimal character reference (e.g. `&#x2764;&#xfe0f;`)
    pub fn html_hexadecimal(&self) -> &str {
        &self.html_hex
    }

    /// Returns the stored HTML representation for the given encoding
    pub fn html(&self, encoding: HtmlEncoding) -> &str {
        match encoding {
            HtmlEncoding::Decimal => &self.html_dec,
            HtmlEncoding::Hexadecimal => &self.html_hex,
        }
    }

    /// The codepoint sequence of the Unicode® representation
    /// # Examples
    /// ```
    /// use emoji_core::{Emoji, SequenceType};
    ///
    /// let heart = Emoji::new("red heart", SequenceType::None, vec!["heart"], vec!["love"], "❤\u{fe0f}", "");
    ///
    /// assert_eq!(heart.codepoints(), vec![0x2764, 0xfe0f]);
    /// ```
    pub fn codepoints(&self) -> Vec<u32> {
        self.unicode.chars().map(|codepoint| codepoint as u32).collect()
    }

    /// Returns the Unicode® representation combined with a skin tone modifier.
    ///
    /// Without a modifier this is the same as [Emoji::unicode].
    /// The modifier is appended to the end for both [SequenceType::BaseSkinGender] and
    /// [SequenceType::GenderSkinBase].
    /// # Errors
    /// [UnsupportedModifierError] if the emoji doesn't support Fitzpatrick modifiers, no matter
    /// whether a modifier is given.
    /// # Examples
    /// ```
    /// use emoji_core::{Emoji, FitzpatrickModifier, SequenceType};
    ///
    /// let boy = Emoji::new("boy", SequenceType::BaseSkinGender, vec!["boy"], vec!["child"], "👦", "👦");
    /// let medium = FitzpatrickModifier::new("🏽");
    ///
    /// assert_eq!(boy.unicode_with_modifier(Some(&medium)).unwrap(), "👦🏽");
    /// assert_eq!(boy.unicode_with_modifier(None).unwrap(), "👦");
    ///
    /// let rocket = Emoji::new("rocket", SequenceType::None, vec!["rocket"], vec!["ship"], "🚀", "🚀");
    /// assert!(rocket.unicode_with_modifier(Some(&medium)).is_err());
    /// ```
    pub fn unicode_with_modifier(
        &self,
        modifier: Option<&FitzpatrickModifier>,
    ) -> Result<String, UnsupportedModifierError> {
        if !self.supports_fitzpatrick {
            debug!("{} doesn't support fitzpatrick modifiers", self.unicode);
            return Err(UnsupportedModifierError::new(&self.unicode));
        }
        match modifier {
            Some(modifier) => {
                let mut unicode = String::with_capacity(self.unicode.len() + modifier.unicode().len());
                unicode.push_str(&self.unicode);
                unicode.push_str(modifier.unicode());
                Ok(unicode)
            }
            None => Ok(self.unicode.clone()),
        }
    }
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unicode.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    /// Compares two Emojis by their Unicode® representation only
    fn eq(&self, other: &Emoji) -> bool {
        self.unicode == other.unicode
    }
}

impl Eq for Emoji {}

impl PartialEq<str> for Emoji {
    fn eq(&self, other: &str) -> bool {
        self.unicode == other
    }
}

impl PartialEq<Emoji> for str {
    fn eq(&self, other: &Emoji) -> bool {
        other.unicode == self
    }
}

impl PartialOrd for Emoji {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Emoji {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unicode.cmp(&other.unicode)
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.unicode
    }
}

// Hash and Eq only depend on `unicode`, which hashes exactly like the borrowed str.
impl Borrow<str> for Emoji {
    fn borrow(&self) -> &str {
        &self.unicode
    }
}

impl Display for Emoji {
    /// A diagnostic representation listing all fields except the sequence type and emoji char.
    /// # Examples
    /// ```
    /// use emoji_core::{Emoji, SequenceType};
    ///
    /// let smile = Emoji::new(
    ///     "smiling face with open mouth and smiling eyes",
    ///     SequenceType::None,
    ///     vec!["smile"],
    ///     vec!["happy", "joy", "pleased"],
    ///     "😄",
    ///     "😄",
    /// );
    ///
    /// assert_eq!(
    ///     smile.to_string(),
    ///     "Emoji{description='smiling face with open mouth and smiling eyes', \
    ///      supportsFitzpatrick=false, aliases=[smile], tags=[happy, joy, pleased], \
    ///      unicode='😄', htmlDec='&#128516;', htmlHex='&#x1f604;'}"
    /// );
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Emoji{{description='{}', supportsFitzpatrick={}, aliases=[{}], tags=[{}], \
             unicode='{}', htmlDec='{}', htmlHex='{}'}}",
            self.description,
            self.supports_fitzpatrick,
            self.aliases.iter().join(", "),
            self.tags.iter().join(", "),
            self.unicode,
            self.html_dec,
            self.html_hex
        )
    }
}
