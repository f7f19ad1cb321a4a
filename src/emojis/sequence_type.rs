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

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classifies whether, and in which positional pattern, a skin tone modifier may be combined
/// with an emoji.
///
/// Both non-zero variants currently compose the same way (the modifier is appended), see
/// [crate::Emoji::unicode_with_modifier].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SequenceType {
    /// No skin tone modifier can be applied
    None,
    /// Base, then skin tone, then gender (e.g. 🏃🏽‍♀️)
    BaseSkinGender,
    /// Gender, then skin tone, then base
    GenderSkinBase,
}

impl SequenceType {
    /// Whether a Fitzpatrick modifier may be combined with an emoji of this type.
    /// # Examples
    /// ```
    /// use emoji_core::SequenceType;
    ///
    /// assert!(!SequenceType::None.supports_fitzpatrick());
    /// assert!(SequenceType::BaseSkinGender.supports_fitzpatrick());
    /// assert!(SequenceType::GenderSkinBase.supports_fitzpatrick());
    /// ```
    pub fn supports_fitzpatrick(self) -> bool {
        self != SequenceType::None
    }
}

impl Default for SequenceType {
    fn default() -> Self {
        SequenceType::None
    }
}

impl From<SequenceType> for u8 {
    fn from(sequence_type: SequenceType) -> Self {
        match sequence_type {
            SequenceType::None => 0,
            SequenceType::BaseSkinGender => 1,
            SequenceType::GenderSkinBase => 2,
        }
    }
}

impl TryFrom<u8> for SequenceType {
    type Error = UnknownSequenceType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SequenceType::None),
            1 => Ok(SequenceType::BaseSkinGender),
            2 => Ok(SequenceType::GenderSkinBase),
            other => Err(UnknownSequenceType(other.to_string())),
        }
    }
}

impl FromStr for SequenceType {
    type Err = UnknownSequenceType;

    /// Accepts the names used by [Display] (in any case, with `_`, `-` or spaces) as well as
    /// their numeric values.
    fn from_str(sequence_type: &str) -> Result<Self, Self::Err> {
        let normalized = sequence_type.trim().to_lowercase().replace(|c: char| c == '-' || c == ' ', "_");
        match normalized.as_str() {
            "none" => Ok(SequenceType::None),
            "base_skin_gender" => Ok(SequenceType::BaseSkinGender),
            "gender_skin_base" => Ok(SequenceType::GenderSkinBase),
            numeric => match numeric.parse::<u8>() {
                Ok(value) => SequenceType::try_from(value),
                Err(_) => Err(UnknownSequenceType(sequence_type.trim().to_owned())),
            },
        }
    }
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceType::None => "NONE",
            SequenceType::BaseSkinGender => "BASE_SKIN_GENDER",
            SequenceType::GenderSkinBase => "GENDER_SKIN_BASE",
        };
        f.write_str(name)
    }
}

/// A sequence type (given as a string or a number) that doesn't match any of the known ones.
/// # Examples
/// ```
/// use std::str::FromStr;
/// use emoji_core::SequenceType;
///
/// let unknown = SequenceType::from_str("skin_first");
/// assert!(unknown.is_err());
/// assert_eq!(unknown.err().unwrap().get(), "skin_first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSequenceType(String);

impl UnknownSequenceType {
    /// Returns the rejected value
    pub fn get(&self) -> &str {
        &self.0
    }
}

impl Display for UnknownSequenceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown sequence type: {}", self.0)
    }
}

impl std::error::Error for UnknownSequenceType {}

#[test]
fn test_names_round_trip() {
    let all_types = vec![
        SequenceType::None,
        SequenceType::BaseSkinGender,
        SequenceType::GenderSkinBase,
    ];
    for sequence_type in all_types {
        assert_eq!(SequenceType::from_str(&sequence_type.to_string()), Ok(sequence_type));
        assert_eq!(SequenceType::try_from(u8::from(sequence_type)), Ok(sequence_type));
    }
}

#[test]
fn test_lenient_parsing() {
    assert_eq!(SequenceType::from_str(" base-skin gender "), Ok(SequenceType::BaseSkinGender));
    assert_eq!(SequenceType::from_str("Gender_Skin_Base"), Ok(SequenceType::GenderSkinBase));
    assert_eq!(SequenceType::from_str("2"), Ok(SequenceType::GenderSkinBase));
    assert_eq!(SequenceType::from_str("0"), Ok(SequenceType::None));
    assert_eq!(SequenceType::from_str("3").unwrap_err().get(), "3");
    assert!(SequenceType::try_from(7u8).is_err());
}
