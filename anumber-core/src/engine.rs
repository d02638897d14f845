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

//! Substitution engine
//!
//! Orchestrates the matcher, canonicalizer, allocator, and store to rewrite
//! values in place: text values have every matched span replaced by a UID
//! token, numeric values in the nine-digit range are replaced by the raw
//! UID integer.

use crate::allocator::UidAllocator;
use crate::canonical::CanonicalKey;
use crate::config::RedactionConfig;
use crate::error::RedactResult;
use crate::matcher::AnumberMatcher;
use crate::store::MappingStore;

/// One processing session over a mapping store.
///
/// The session exclusively owns the store and the allocator between the
/// load and save brackets; no other access may interleave. Allocation order
/// is first-sight order: candidates left-to-right within a value, values in
/// whatever order the caller feeds them.
pub struct RedactionSession {
    matcher: AnumberMatcher,
    store: MappingStore,
    allocator: UidAllocator,
    uid_prefix: String,
}

impl RedactionSession {
    /// Start a session over a loaded (or empty) store, seeding the
    /// allocator from the store's largest recorded UID.
    pub fn new(store: MappingStore, config: &RedactionConfig) -> Self {
        let allocator = UidAllocator::for_store(&store);
        Self {
            matcher: AnumberMatcher::new(),
            store,
            allocator,
            uid_prefix: config.uid_prefix.clone(),
        }
    }

    /// Replace every A-number in `text` with its UID token, leaving the
    /// surrounding text unchanged.
    ///
    /// Repeated spellings of one identifier all rewrite to the same token.
    /// A candidate that fails to canonicalize aborts the whole attempt and
    /// leaves the store exactly as it was for that candidate.
    pub fn substitute_text(&mut self, text: &str) -> RedactResult<String> {
        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;
        let mut replaced = 0usize;

        for candidate in self.matcher.find_candidates(text) {
            let key = CanonicalKey::canonicalize(candidate.text())?;
            let uid = self.store.lookup_or_insert(key, &mut self.allocator);

            output.push_str(&text[last_end..candidate.start()]);
            output.push_str(&self.uid_prefix);
            output.push_str(&uid.to_string());
            last_end = candidate.end();
            replaced += 1;
        }
        output.push_str(&text[last_end..]);

        if replaced > 0 {
            tracing::debug!(replaced, "Substituted identifiers in text value");
        }
        Ok(output)
    }

    /// Replace a numeric value with its UID when it lies in the closed
    /// range `[0, 999999999]`; values outside the range are not identifiers
    /// and pass through unchanged.
    pub fn substitute_number(&mut self, number: i64) -> i64 {
        let key = match u64::try_from(number).ok().and_then(CanonicalKey::from_number) {
            Some(key) => key,
            None => return number,
        };
        self.store.lookup_or_insert(key, &mut self.allocator) as i64
    }

    /// The mapping store as grown so far.
    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    /// End the session, handing the store back for the final save.
    pub fn into_store(self) -> MappingStore {
        self.store
    }
}
