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

//! Integration tests for identifier substitution across whole sessions,
//! including persistence between runs.

use anumber_core::{
    CanonicalKey, MappingStore, RedactionConfig, RedactionSession, StoreCodec, UidAllocator,
};
use proptest::prelude::*;
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn test_end_to_end_two_spellings_one_uid() {
    let config = RedactionConfig::default();
    let mut session = RedactionSession::new(MappingStore::new(), &config);

    let out = session
        .substitute_text("Case A#12-345-678 and also a 12345678 again")
        .unwrap();
    assert_eq!(out, "Case UID-0 and also UID-0 again");

    let store = session.into_store();
    let entries: Vec<_> = store.iter().map(|(k, uid)| (k.as_str().to_string(), uid)).collect();
    assert_eq!(entries, vec![("012345678".to_string(), 0)]);
}

#[test]
fn test_uids_stable_across_runs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mapping.bin");
    let config = RedactionConfig::default();
    let codec = config.store_codec;

    // Run 1: two identifiers discovered, store saved.
    let store = MappingStore::load(&path, codec).unwrap();
    let mut session = RedactionSession::new(store, &config);
    let first = session.substitute_text("A123456789 then 98-765-432").unwrap();
    assert_eq!(first, "UID-0 then UID-1");
    session.into_store().save(&path, codec).unwrap();

    // Run 2: the same identifiers in different spellings keep their UIDs;
    // a new identifier continues from the prior maximum.
    let store = MappingStore::load(&path, codec).unwrap();
    assert_eq!(store.len(), 2);
    let mut session = RedactionSession::new(store, &config);

    let second = session
        .substitute_text("#123-456-789 and 098765432 and 555555555")
        .unwrap();
    assert_eq!(second, "UID-0 and UID-1 and UID-2");
}

#[test]
fn test_idempotent_over_saved_output() {
    let config = RedactionConfig::default();
    let mut session = RedactionSession::new(MappingStore::new(), &config);

    let once = session
        .substitute_text("Approved: a 123-456-789, cf. #22-333-444.")
        .unwrap();
    let twice = session.substitute_text(&once).unwrap();
    assert_eq!(twice, once);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn test_numeric_and_text_paths_agree_across_runs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mapping.bin");
    let config = RedactionConfig::default();

    let mut session = RedactionSession::new(MappingStore::new(), &config);
    assert_eq!(session.substitute_number(12_345_678), 0);
    session.into_store().save(&path, config.store_codec).unwrap();

    let store = MappingStore::load(&path, config.store_codec).unwrap();
    let mut session = RedactionSession::new(store, &config);
    let out = session.substitute_text("text form A12-345-678").unwrap();
    assert_eq!(out, "text form UID-0");
}

#[test]
fn test_custom_prefix() {
    let config = RedactionConfig {
        uid_prefix: "CASE:".to_string(),
        ..RedactionConfig::default()
    };
    let mut session = RedactionSession::new(MappingStore::new(), &config);
    let out = session.substitute_text("see 123456789").unwrap();
    assert_eq!(out, "see CASE:0");
}

proptest! {
    /// Distinct canonical keys always receive pairwise distinct UIDs that
    /// form a contiguous run starting at the allocator seed.
    #[test]
    fn prop_distinct_keys_distinct_contiguous_uids(
        raws in proptest::collection::hash_set("[0-9]{9}", 1..40),
        seed in 0u64..1000,
    ) {
        let mut store = MappingStore::new();
        let mut allocator = UidAllocator::starting_at(seed);

        let mut uids = HashSet::new();
        for raw in &raws {
            let key = CanonicalKey::canonicalize(raw).unwrap();
            uids.insert(store.lookup_or_insert(key, &mut allocator));
        }

        prop_assert_eq!(uids.len(), raws.len());
        let max = uids.iter().copied().max().unwrap();
        prop_assert_eq!(max, seed + raws.len() as u64 - 1);
        for uid in seed..=max {
            prop_assert!(uids.contains(&uid));
        }
    }

    /// Save followed by load reproduces the store exactly, with either codec.
    #[test]
    fn prop_store_round_trips(
        raws in proptest::collection::hash_set("[0-9]{9}", 0..30),
        compressed in proptest::bool::ANY,
    ) {
        let mut store = MappingStore::new();
        let mut allocator = UidAllocator::starting_at(0);
        for raw in &raws {
            let key = CanonicalKey::canonicalize(raw).unwrap();
            store.lookup_or_insert(key, &mut allocator);
        }

        let codec = if compressed { StoreCodec::Zlib } else { StoreCodec::Plain };
        let dir = tempdir().unwrap();
        let path = dir.path().join("store");
        store.save(&path, codec).unwrap();
        let loaded = MappingStore::load(&path, codec).unwrap();
        prop_assert_eq!(loaded, store);
    }
}
