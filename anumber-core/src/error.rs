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

//! Redaction error types

use thiserror::Error;

/// Result type for redaction operations
pub type RedactResult<T> = Result<T, RedactError>;

/// Errors that can occur while detecting and substituting identifiers
#[derive(Debug, Error)]
pub enum RedactError {
    /// A candidate did not reduce to exactly nine digits. Only reachable
    /// when the matcher's contract is violated, so this doubles as an
    /// internal consistency check.
    #[error("Malformed identifier {raw:?}: canonical form {canonical:?} is not nine digits")]
    MalformedIdentifier {
        /// The raw substring handed to the canonicalizer
        raw: String,
        /// What it reduced to
        canonical: String,
    },

    /// Store bytes were present but could not be decoded. Fatal for the
    /// session: substituting against a partially decoded store could hand
    /// out colliding UIDs.
    #[error("Store decode error: {0}")]
    StoreDecode(String),

    /// A document handed to the traversal adapter is not a supported format
    #[error("File format {extension:?} is not supported")]
    UnsupportedDocumentFormat {
        /// The offending file extension, including the dot
        extension: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RedactError {
    fn from(e: serde_json::Error) -> Self {
        RedactError::StoreDecode(e.to_string())
    }
}
