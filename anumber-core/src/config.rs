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

//! Redaction configuration

use crate::store::StoreCodec;
use serde::{Deserialize, Serialize};

/// Configuration for a redaction session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Prefix of replacement tokens; the decimal UID is appended with no
    /// leading zeros or separators.
    pub uid_prefix: String,

    /// On-disk representation of the persisted mapping store. Load and save
    /// within one run always use the same value.
    pub store_codec: StoreCodec,

    /// Suffix appended to an input file's stem when writing redacted output.
    pub output_suffix: String,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            uid_prefix: "UID-".to_string(),
            store_codec: StoreCodec::Zlib,
            output_suffix: "_redacted".to_string(),
        }
    }
}
