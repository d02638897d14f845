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

//! A-number candidate scanning
//!
//! Finds substrings that structurally resemble an A-number: an optional
//! leading `A`/`a`, an optional `#` marker (each licensing a single
//! dash/tab/space right after it), then 2-3 digits, 3 digits, and 3 digits
//! with optional dash/space separators between the groups, ending at a word
//! boundary.
//!
//! Only a trailing word boundary is enforced. There is no leading boundary,
//! so a match can begin inside a longer alphanumeric run (`XA123456789`
//! yields `A123456789`). That permissiveness is a property of the source
//! format and is kept as-is.

use regex::Regex;

// Each optional separator is grouped with the prefix character that must
// precede it, so no lookbehind is needed.
const DECORATED_PATTERN: &str =
    r"(?:[aA][-\t ]?)?(?:#[-\t ]?)?[0-9]{2,3}[- ]?[0-9]{3}[- ]?[0-9]{3}\b";

const PLAIN_PATTERN: &str = r"[0-9]{2,3}[- ]?[0-9]{3}[- ]?[0-9]{3}\b";

/// One candidate substring found in a scanned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Candidate<'t> {
    /// The matched substring.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Byte offset of the match start within the scanned value.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the match end.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Scanner for A-number shaped substrings.
///
/// Compiles its patterns once; scanning is stateless across calls, and each
/// call restarts from the beginning of the given value.
pub struct AnumberMatcher {
    decorated: Regex,
    plain: Regex,
}

impl AnumberMatcher {
    pub fn new() -> Self {
        Self {
            decorated: Regex::new(DECORATED_PATTERN).unwrap(),
            plain: Regex::new(PLAIN_PATTERN).unwrap(),
        }
    }

    /// Find decorated candidates in free text.
    ///
    /// Matches are produced lazily, leftmost first, non-overlapping.
    pub fn find_candidates<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = Candidate<'t>> + 't {
        self.decorated.find_iter(text).map(|m| Candidate {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
    }

    /// Find plain digit-group candidates (no letter or hash decoration).
    ///
    /// Used for values already typed as numbers, where decoration cannot
    /// occur.
    pub fn find_plain_candidates<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = Candidate<'t>> + 't {
        self.plain.find_iter(text).map(|m| Candidate {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
    }
}

impl Default for AnumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str) -> Vec<(&str, usize)> {
        static MATCHER: std::sync::OnceLock<AnumberMatcher> = std::sync::OnceLock::new();
        MATCHER
            .get_or_init(AnumberMatcher::new)
            .find_candidates(text)
            .map(|c| (c.text(), c.start()))
            .collect()
    }

    #[test]
    fn test_decorated_forms_match_fully() {
        for text in [
            "A#12-345-678",
            "a 123-456-789",
            "A123456789",
            "#123456789",
            "A-12 345 678",
            "a\t123 456 789",
        ] {
            assert_eq!(matches(text), vec![(text, 0)], "{text}");
        }
    }

    #[test]
    fn test_bare_digit_runs() {
        // Eight digits is the grouped minimum (2+3+3), nine the maximum.
        assert_eq!(matches("12345678"), vec![("12345678", 0)]);
        assert_eq!(matches("123456789"), vec![("123456789", 0)]);
        assert_eq!(matches("1234567"), vec![]);
    }

    #[test]
    fn test_trailing_word_boundary_required() {
        assert_eq!(matches("123456789x"), vec![]);
        assert_eq!(matches("123456789 next"), vec![("123456789", 0)]);
        assert_eq!(matches("(123456789)"), vec![("123456789", 1)]);
    }

    #[test]
    fn test_no_leading_boundary_is_permissive() {
        // Accepted source-format quirk: with no leading boundary the match
        // can start inside a longer alphanumeric run.
        assert_eq!(matches("XA123456789"), vec![("A123456789", 1)]);
        assert_eq!(matches("1234567890"), vec![("234567890", 1)]);
    }

    #[test]
    fn test_multiple_candidates_left_to_right() {
        let found = matches("A#12-345-678 and then a 12345678 again");
        assert_eq!(
            found,
            vec![("A#12-345-678", 0), ("a 12345678", 22)]
        );
    }

    #[test]
    fn test_embedded_in_text() {
        let found = matches("Case number A123-456-789 was closed");
        assert_eq!(found, vec![("A123-456-789", 12)]);
    }

    #[test]
    fn test_plain_pattern_ignores_decoration() {
        let matcher = AnumberMatcher::new();
        let found: Vec<_> = matcher
            .find_plain_candidates("A123456789")
            .map(|c| (c.text(), c.start()))
            .collect();
        assert_eq!(found, vec![("123456789", 1)]);

        let none: Vec<_> = matcher.find_plain_candidates("1234567").collect();
        assert!(none.is_empty());
    }
}
