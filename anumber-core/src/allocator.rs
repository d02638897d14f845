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

//! Monotonic UID allocation

use crate::store::MappingStore;

/// Surrogate identifier assigned to a canonical key.
pub type Uid = u64;

/// Issues UIDs in strictly increasing order, one per call.
///
/// Allocator state is never persisted. It is re-derived from the store's
/// contents at session start, so re-running against an unchanged store
/// reproduces the same seed. The allocator introduces no gaps of its own;
/// gaps can only appear if external tooling edits the persisted store.
#[derive(Debug, Clone)]
pub struct UidAllocator {
    next_uid: Uid,
}

impl UidAllocator {
    /// Start issuing from `seed`.
    pub fn starting_at(seed: Uid) -> Self {
        Self { next_uid: seed }
    }

    /// Seed from the largest UID recorded in `store`, or zero when empty.
    pub fn for_store(store: &MappingStore) -> Self {
        Self::starting_at(store.max_uid().map_or(0, |max| max + 1))
    }

    /// Issue the next UID.
    pub fn allocate(&mut self) -> Uid {
        let uid = self.next_uid;
        self.next_uid += 1;
        uid
    }

    /// The UID the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> Uid {
        self.next_uid
    }
}
