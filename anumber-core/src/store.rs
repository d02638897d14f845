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

//! Durable canonical-key to UID mapping
//!
//! The store is what makes UIDs stable across runs: it is loaded once at
//! session start, mutated only through [`MappingStore::lookup_or_insert`],
//! and written back wholesale at session end. Once a `(key, UID)` pair is
//! recorded it is never altered or removed.
//!
//! On disk the store is one flat JSON object of nine-digit key strings to
//! integer UIDs, either raw UTF-8 or compressed as a zlib stream. The codec
//! is a configuration toggle, not a per-file signal: load and save must
//! agree on it.

use crate::allocator::{Uid, UidAllocator};
use crate::canonical::CanonicalKey;
use crate::error::{RedactError, RedactResult};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

/// On-disk representation of the persisted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreCodec {
    /// Raw UTF-8 JSON.
    Plain,
    /// JSON compressed as a zlib stream.
    Zlib,
}

/// Mapping from canonical identifier keys to UIDs.
///
/// Invariants: keys are unique, UIDs are unique, and recorded pairs are
/// immutable for the lifetime of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingStore {
    entries: BTreeMap<CanonicalKey, Uid>,
}

impl MappingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from `path`.
    ///
    /// A missing file is not an error: processing proceeds against an empty
    /// store and UIDs are issued from zero. Present but undecodable bytes
    /// are fatal for the session.
    pub fn load(path: &Path, codec: StoreCodec) -> RedactResult<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Mapping store not found, starting fresh"
                );
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };

        let json = match codec {
            StoreCodec::Plain => bytes,
            StoreCodec::Zlib => {
                let mut decoder = ZlibDecoder::new(&bytes[..]);
                let mut decompressed = Vec::new();
                decoder
                    .read_to_end(&mut decompressed)
                    .map_err(|e| RedactError::StoreDecode(format!("zlib stream: {e}")))?;
                decompressed
            }
        };

        let entries: BTreeMap<CanonicalKey, Uid> = serde_json::from_slice(&json)?;
        tracing::debug!(entries = entries.len(), "Loaded mapping store");

        Ok(Self { entries })
    }

    /// Persist the full mapping to `path`, replacing any prior contents.
    pub fn save(&self, path: &Path, codec: StoreCodec) -> RedactResult<()> {
        let json = serde_json::to_vec(&self.entries)?;
        let bytes = match codec {
            StoreCodec::Plain => json,
            StoreCodec::Zlib => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&json)?;
                encoder.finish()?
            }
        };
        std::fs::write(path, bytes)?;
        tracing::debug!(entries = self.entries.len(), path = %path.display(), "Saved mapping store");
        Ok(())
    }

    /// Return the UID for `key`, recording a freshly allocated one on first
    /// sight. The single mutation path into the store.
    pub fn lookup_or_insert(&mut self, key: CanonicalKey, allocator: &mut UidAllocator) -> Uid {
        if let Some(&uid) = self.entries.get(&key) {
            return uid;
        }
        let uid = allocator.allocate();
        self.entries.insert(key, uid);
        uid
    }

    /// Look up a key without inserting.
    pub fn get(&self, key: &CanonicalKey) -> Option<Uid> {
        self.entries.get(key).copied()
    }

    /// Largest UID recorded so far.
    pub fn max_uid(&self) -> Option<Uid> {
        self.entries.values().copied().max()
    }

    /// Number of recorded identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, Uid)> {
        self.entries.iter().map(|(key, &uid)| (key, uid))
    }
}
