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

//! Anumber Core
//!
//! Detection of A-numbers in text and tabular values, and their replacement
//! with stable, sequentially assigned surrogate UIDs.
//!
//! An A-number is a nine-digit identifier that appears in the wild with an
//! optional leading letter, an optional `#` marker, and dash/space
//! separators splitting the digits into groups. Every spelling of one
//! identifier reduces to a single [`CanonicalKey`]; the key-to-UID mapping
//! is held in a [`MappingStore`] that persists across runs, so the same
//! identifier always receives the same UID even in separate invocations on
//! different files.
//!
//! # Usage
//!
//! ```
//! use anumber_core::{MappingStore, RedactionConfig, RedactionSession};
//!
//! let config = RedactionConfig::default();
//! let mut session = RedactionSession::new(MappingStore::new(), &config);
//!
//! let text = session.substitute_text("Case A#12-345-678 reviewed").unwrap();
//! assert_eq!(text, "Case UID-0 reviewed");
//! ```
//!
//! A durable session brackets the same calls with [`MappingStore::load`] and
//! [`MappingStore::save`].

pub mod allocator;
pub mod canonical;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod store;

pub use allocator::{Uid, UidAllocator};
pub use canonical::{CanonicalKey, CANONICAL_KEY_LEN, MAX_IDENTIFIER_VALUE};
pub use config::RedactionConfig;
pub use engine::RedactionSession;
pub use error::{RedactError, RedactResult};
pub use matcher::{AnumberMatcher, Candidate};
pub use store::{MappingStore, StoreCodec};
