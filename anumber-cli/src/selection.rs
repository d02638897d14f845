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

//! Per-file column selection arguments

use std::path::PathBuf;

/// A file to process plus the columns selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub path: PathBuf,
    /// Zero-based column indices; empty means every column.
    pub columns: Vec<usize>,
}

/// Parse a `path` or `path:col1,col2,...` argument.
pub fn parse_file_selection(value: &str) -> Result<FileSelection, String> {
    let Some((path, columns)) = value.split_once(':') else {
        return Ok(FileSelection {
            path: PathBuf::from(value),
            columns: Vec::new(),
        });
    };

    let columns = columns
        .split(',')
        .filter(|c| !c.is_empty())
        .map(|c| {
            c.parse::<usize>()
                .map_err(|_| format!("invalid column number {c:?}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FileSelection {
        path: PathBuf::from(path),
        columns,
    })
}
