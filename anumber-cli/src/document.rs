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

//! Tabular document traversal
//!
//! Everything the core does not know about lives here: file formats,
//! sheets, rows, and columns. A document is a JSON file holding either one
//! table (an array of rows, each row an array of cells) or an object
//! mapping sheet names to tables. Each selected cell is inspected once:
//! strings take the text substitution path, integers the numeric path, and
//! any other value passes through untouched.

use crate::selection::FileSelection;
use anumber_core::{RedactError, RedactionConfig, RedactionSession};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Process one document, writing the redacted copy next to the input.
///
/// Returns the output path. The store grows as a side effect of
/// substitution; saving it is the caller's job.
pub fn redact_document(
    session: &mut RedactionSession,
    file: &FileSelection,
    config: &RedactionConfig,
) -> Result<PathBuf> {
    let extension = file
        .path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if extension != "json" {
        return Err(RedactError::UnsupportedDocumentFormat {
            extension: format!(".{extension}"),
        }
        .into());
    }

    let content = std::fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read {}", file.path.display()))?;
    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON document", file.path.display()))?;

    match &mut document {
        Value::Array(rows) => redact_table(session, rows, &file.columns)?,
        Value::Object(sheets) => {
            for (name, sheet) in sheets.iter_mut() {
                debug!(sheet = %name, "Processing sheet");
                let Value::Array(rows) = sheet else {
                    bail!("sheet {name:?} is not an array of rows");
                };
                redact_table(session, rows, &file.columns)?;
            }
        }
        _ => bail!("document root must be a table or an object of sheets"),
    }

    let output = output_path(&file.path, &config.output_suffix);
    let rendered = serde_json::to_string_pretty(&document)?;
    std::fs::write(&output, rendered)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(output)
}

fn redact_table(
    session: &mut RedactionSession,
    rows: &mut [Value],
    columns: &[usize],
) -> Result<()> {
    for (row_number, row) in rows.iter_mut().enumerate() {
        let Value::Array(cells) = row else {
            bail!("row {row_number} is not an array of cells");
        };
        for (column, cell) in cells.iter_mut().enumerate() {
            if !columns.is_empty() && !columns.contains(&column) {
                continue;
            }
            redact_cell(session, cell)?;
        }
    }
    Ok(())
}

fn redact_cell(session: &mut RedactionSession, cell: &mut Value) -> Result<()> {
    match cell {
        Value::String(text) => {
            let substituted = session.substitute_text(text)?;
            *cell = Value::String(substituted);
        }
        // Integer cells only; floats, bools, and nulls are never identifiers.
        Value::Number(n) => {
            if let Some(number) = n.as_i64() {
                *cell = Value::from(session.substitute_number(number));
            }
        }
        _ => {}
    }
    Ok(())
}

fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let mut name = format!("{stem}{suffix}");
    if let Some(extension) = input.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(extension);
    }
    input.with_file_name(name)
}
