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

//! Anumber Redact CLI
//!
//! Replaces A-numbers in tabular documents with stable UIDs, persisting
//! the identifier-to-UID mapping between runs.

use anumber_core::{MappingStore, RedactionConfig, RedactionSession, StoreCodec};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

mod document;
mod selection;

use selection::FileSelection;

#[derive(Parser)]
#[command(name = "anumber-redact")]
#[command(about = "Replaces A-numbers with stable UIDs", long_about = None)]
struct Cli {
    /// Mapping store to load and save; when omitted the mapping is
    /// ephemeral and every run starts fresh
    #[arg(short = 's', long)]
    store: Option<PathBuf>,

    /// Persist the mapping store as plain JSON instead of a zlib stream
    #[arg(long)]
    plain: bool,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Files to process: `path` for every column, or `path:col1,col2,...`
    /// for specific zero-based columns
    #[arg(required = true, value_parser = selection::parse_file_selection)]
    files: Vec<FileSelection>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = RedactionConfig {
        store_codec: if cli.plain {
            StoreCodec::Plain
        } else {
            StoreCodec::Zlib
        },
        ..RedactionConfig::default()
    };

    let store = match &cli.store {
        Some(path) => MappingStore::load(path, config.store_codec)
            .context("Failed to load mapping store")?,
        None => MappingStore::new(),
    };
    let known = store.len();

    let mut session = RedactionSession::new(store, &config);

    let mut failures = 0usize;
    for file in &cli.files {
        match document::redact_document(&mut session, file, &config) {
            Ok(output) => {
                println!("✓ {} -> {}", file.path.display(), output.display());
            }
            Err(e) => {
                failures += 1;
                eprintln!("✗ {}: {:#}", file.path.display(), e);
            }
        }
    }

    let store = session.into_store();
    info!(
        identifiers = store.len(),
        new = store.len() - known,
        "Processing complete"
    );

    // Save before reporting failures: mappings discovered in files that did
    // succeed must not be lost, or their identifiers would drift next run.
    if let Some(path) = &cli.store {
        store
            .save(path, config.store_codec)
            .context("Failed to save mapping store")?;
    }

    if failures > 0 {
        anyhow::bail!("{failures} file(s) failed");
    }
    Ok(())
}
