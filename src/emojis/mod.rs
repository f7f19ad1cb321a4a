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

/// The emoji value object
pub mod emoji;
/// Errors raised by [emoji::Emoji]
pub mod errors;
/// Skin tone modifiers
pub mod fitzpatrick;
/// The serializable construction record for [emoji::Emoji]
pub mod prototype;
/// How (and whether) an emoji may be combined with a skin tone modifier
pub mod sequence_type;
