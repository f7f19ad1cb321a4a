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

use std::fmt::{Display, Formatter};
use std::fmt;

/// Raised when a skin tone modifier is requested for an emoji whose
/// [crate::SequenceType] is `None`.
///
/// This usually means that the caller didn't check
/// [crate::Emoji::supports_fitzpatrick] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedModifierError {
    unicode: String,
}

impl UnsupportedModifierError {
    pub(crate) fn new(unicode: &str) -> Self {
        Self { unicode: unicode.to_owned() }
    }

    /// The (base) Unicode® representation of the emoji that rejected the modifier
    pub fn unicode(&self) -> &str {
        &self.unicode
    }
}

impl Display for UnsupportedModifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot get the unicode with a fitzpatrick modifier, the emoji {} doesn't support fitzpatrick.",
            self.unicode
        )
    }
}

impl std::error::Error for UnsupportedModifierError {}
