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
//! Immutable emoji values: their canonical Unicode® representation, metadata,
//! numeric HTML character references and skin tone modifier composition.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The emoji value object and the types it is built from
pub mod emojis;
/// Numeric HTML character references (`&#128516;`, `&#x1f604;`)
pub mod html;

pub use emojis::emoji::Emoji;
pub use emojis::errors::UnsupportedModifierError;
pub use emojis::fitzpatrick::FitzpatrickModifier;
pub use emojis::sequence_type::SequenceType;

#[cfg(test)]
mod tests;
