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

use serde::{Deserialize, Serialize};

use crate::emojis::emoji::Emoji;
use crate::emojis::sequence_type::SequenceType;

/// The plain construction record of an [Emoji], as it appears in serialized form.
///
/// Only the caller-supplied fields are part of it; the HTML references and
/// `supports_fitzpatrick` are always derived again when it's turned into an [Emoji].
/// # Examples
/// ```
/// use emoji_core::Emoji;
/// use emoji_core::emojis::prototype::EmojiPrototype;
///
/// let prototype = EmojiPrototype {
///     emoji: String::from("😄"),
///     description: String::from("smiling face with open mouth and smiling eyes"),
///     aliases: vec![String::from("smile")],
///     ..EmojiPrototype::default()
/// };
/// let smile = Emoji::from(prototype);
///
/// assert_eq!(smile.html_decimal(), "&#128516;");
/// assert!(!smile.supports_fitzpatrick());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiPrototype {
    #[serde(alias = "unicode")]
    pub emoji: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "sequenceType")]
    pub sequence_type: SequenceType,
    #[serde(default, alias = "emojiChar")]
    pub emoji_char: String,
}

impl From<EmojiPrototype> for Emoji {
    fn from(prototype: EmojiPrototype) -> Self {
        Emoji::new(
            prototype.description,
            prototype.sequence_type,
            prototype.aliases,
            prototype.tags,
            prototype.emoji,
            prototype.emoji_char,
        )
    }
}

impl From<Emoji> for EmojiPrototype {
    fn from(emoji: Emoji) -> Self {
        Self {
            sequence_type: emoji.sequence_type(),
            emoji: emoji.unicode().to_owned(),
            description: emoji.description().to_owned(),
            aliases: emoji.aliases().to_vec(),
            tags: emoji.tags().to_vec(),
            emoji_char: emoji.emoji_char().to_owned(),
        }
    }
}
