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
use crate::emojis::sequence_type::SequenceType;
use crate::html::{decode, decimal, encode, hexadecimal, HtmlEncoding, HtmlReferenceError};

const SAMPLES: &[&str] = &[
    "😄",
    "❤\u{fe0f}",
    "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}",
    "\u{1f1e9}\u{1f1ea}",
    "#\u{fe0f}\u{20e3}",
    "\u{1f3f4}\u{e0064}\u{e0065}\u{e006e}\u{e0077}\u{e007f}",
];

#[test]
fn test_references_decode_to_codepoints() {
    for sample in SAMPLES {
        let emoji = Emoji::new("", SequenceType::None, Vec::<&str>::new(), Vec::<&str>::new(), *sample, "");
        let expected: Vec<u32> = sample.chars().map(|codepoint| codepoint as u32).collect();

        assert_eq!(decode(emoji.html_decimal()).unwrap(), expected);
        assert_eq!(decode(emoji.html_hexadecimal()).unwrap(), expected);
        assert_eq!(emoji.html_decimal().matches("&#").count(), expected.len());
    }
}

#[test]
fn test_hex_is_lowercase_without_padding() {
    assert_eq!(hexadecimal("\u{a9}"), "&#xa9;");
    assert_eq!(hexadecimal("\u{e007f}"), "&#xe007f;");
    assert_eq!(hexadecimal("#"), "&#x23;");
    assert_eq!(decimal("#"), "&#35;");
    assert_eq!(encode("\u{1f3fd}", HtmlEncoding::Hexadecimal), "&#x1f3fd;");
}

#[test]
fn test_decode_mixed_and_uppercase() {
    assert_eq!(decode("&#X1F604;&#10084;&#xFe0f;").unwrap(), vec![0x1f604, 0x2764, 0xfe0f]);
    assert_eq!(decode("").unwrap(), Vec::<u32>::new());
}

#[test]
fn test_decode_errors() {
    assert_eq!(
        decode("&#128516;x").unwrap_err(),
        HtmlReferenceError::Malformed(String::from("x"))
    );
    assert_eq!(
        decode("😄&#128516;").unwrap_err(),
        HtmlReferenceError::Malformed(String::from("😄"))
    );
    assert_eq!(
        decode("&#xd800;").unwrap_err(),
        HtmlReferenceError::InvalidCodepoint(0xd800)
    );
    assert_eq!(
        decode("&#1114112;").unwrap_err(),
        HtmlReferenceError::InvalidCodepoint(0x110000)
    );
    assert!(decode("&#;").is_err());
    assert_eq!(
        decode("&#99999999999999999999999;").unwrap_err(),
        HtmlReferenceError::InvalidCodepoint(u64::MAX)
    );
    assert_eq!(
        decode("&#xfffffffffffffffffff;").unwrap_err(),
        HtmlReferenceError::InvalidCodepoint(u64::MAX)
    );
}
