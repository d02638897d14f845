// Copyright 2025 Anumber Redact Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical identifier keys
//!
//! The same A-number can be written `A#12-345-678`, `a 12345678`, or
//! `012345678`. The canonical key is the separator-free, zero-padded
//! nine-digit normal form: two raw spellings denote the same identifier
//! exactly when their canonical keys are equal.

use crate::error::{RedactError, RedactResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of digit characters in a canonical key.
pub const CANONICAL_KEY_LEN: usize = 9;

/// Largest value expressible as a nine-digit identifier.
pub const MAX_IDENTIFIER_VALUE: u64 = 999_999_999;

/// Decoration characters stripped during canonicalization.
const DECORATION_CHARS: [char; 4] = ['a', '-', '#', ' '];

/// The nine-digit normal form of an A-number.
///
/// Serializes as the bare digit string, so it can act as a JSON map key in
/// the persisted store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Canonicalize a raw matched substring.
    ///
    /// Lower-cases the input, strips the decoration characters (`a`, `-`,
    /// `#`, space), and left-pads the historically valid eight-digit form
    /// with a single zero. Errors if the result is not exactly nine digits;
    /// the matcher only yields substrings that canonicalize cleanly, so the
    /// error path is a defensive invariant check rather than a normal
    /// outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use anumber_core::CanonicalKey;
    ///
    /// let key = CanonicalKey::canonicalize("A# 123-456-789").unwrap();
    /// assert_eq!(key.as_str(), "123456789");
    /// ```
    pub fn canonicalize(raw: &str) -> RedactResult<Self> {
        let mut digits: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !DECORATION_CHARS.contains(c))
            .collect();

        if digits.len() == CANONICAL_KEY_LEN - 1 {
            digits.insert(0, '0');
        }

        if !is_canonical(&digits) {
            return Err(RedactError::MalformedIdentifier {
                raw: raw.to_string(),
                canonical: digits,
            });
        }

        Ok(CanonicalKey(digits))
    }

    /// Build the canonical key for a numeric value, zero-padded to nine
    /// digits. Returns `None` above [`MAX_IDENTIFIER_VALUE`].
    pub fn from_number(value: u64) -> Option<Self> {
        if value > MAX_IDENTIFIER_VALUE {
            return None;
        }
        Some(CanonicalKey(format!("{value:09}")))
    }

    /// The key as a digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_canonical(s: &str) -> bool {
    s.len() == CANONICAL_KEY_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

// Loading a store with malformed keys would break the uniqueness invariants
// silently, so deserialization re-validates instead of deriving.
impl<'de> Deserialize<'de> for CanonicalKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if is_canonical(&s) {
            Ok(CanonicalKey(s))
        } else {
            Err(serde::de::Error::custom(format!(
                "invalid canonical key {s:?}"
            )))
        }
    }
}
