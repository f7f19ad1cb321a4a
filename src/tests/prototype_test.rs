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

use crate::emojis::emoji::Emoji;
use crate::emojis::fitzpatrick::FitzpatrickModifier;
use crate::emojis::prototype::EmojiPrototype;
use crate::emojis::sequence_type::SequenceType;
use crate::tests::init_logger;

const WAVE_JSON: &str = r#"{
    "emoji": "👋",
    "description": "waving hand sign",
    "aliases": ["wave"],
    "tags": ["goodbye"],
    "sequence_type": 1
}"#;

const PERSON_YAML: &str = r#"
unicode: "🧑"
description: person
aliases:
  - adult
sequenceType: 2
emojiChar: "🧑"
"#;

#[test]
fn test_from_json() {
    init_logger();
    let wave: Emoji = serde_json::from_str(WAVE_JSON).unwrap();

    assert_eq!(wave.unicode(), "👋");
    assert_eq!(wave.description(), "waving hand sign");
    assert_eq!(wave.aliases(), ["wave"]);
    assert_eq!(wave.tags(), ["goodbye"]);
    assert_eq!(wave.sequence_type(), SequenceType::BaseSkinGender);
    assert!(wave.supports_fitzpatrick());
    assert_eq!(wave.emoji_char(), "");
    assert_eq!(wave.html_hexadecimal(), "&#x1f44b;");

    let light = FitzpatrickModifier::from_sequence("1f3fb");
    assert_eq!(wave.unicode_with_modifier(Some(&light)).unwrap(), "👋\u{1f3fb}");
}

#[test]
fn test_from_yaml() {
    let person: Emoji = serde_yaml::from_str(PERSON_YAML).unwrap();

    assert_eq!(person.unicode(), "🧑");
    assert_eq!(person.sequence_type(), SequenceType::GenderSkinBase);
    assert_eq!(person.emoji_char(), "🧑");
    assert!(person.tags().is_empty());
    assert_eq!(person.html_decimal(), "&#129489;");
}

#[test]
fn test_defaults() {
    let minimal: Emoji = serde_json::from_str(r#"{"emoji": "🚀"}"#).unwrap();

    assert_eq!(minimal.sequence_type(), SequenceType::None);
    assert!(!minimal.supports_fitzpatrick());
    assert!(minimal.aliases().is_empty());
    assert_eq!(minimal.description(), "");
}

#[test]
fn test_invalid_sequence_type() {
    let result = serde_json::from_str::<Emoji>(r#"{"emoji": "🚀", "sequence_type": 3}"#);
    assert!(result.is_err());

    let missing_unicode = serde_json::from_str::<Emoji>(r#"{"description": "rocket"}"#);
    assert!(missing_unicode.is_err());
}

#[test]
fn test_derived_fields_are_not_serialized() {
    let emoji = Emoji::new("boy", SequenceType::BaseSkinGender, vec!["boy"], vec!["child"], "👦", "👦");
    let value = serde_json::to_value(&emoji).unwrap();

    assert_eq!(value["emoji"], "👦");
    assert_eq!(value["sequence_type"], 1);
    assert!(value.get("html_dec").is_none());
    assert!(value.get("supports_fitzpatrick").is_none());

    let prototype: EmojiPrototype = serde_json::from_value(value).unwrap();
    assert_eq!(prototype, EmojiPrototype::from(emoji.clone()));
    assert_eq!(Emoji::from(prototype), emoji);
}
