//! # The Linking Operation
//!
//! Batch driver for the card rewrite. Files are processed one at a time in
//! list order; mapping entries are applied in order against the current text
//! of the file. A file is only written back when its text actually changed.
//!
//! Nothing here prints. Each file produces a [`FileReport`] and the batch
//! produces a [`RunReport`]; the CLI turns those into terminal output.
//!
//! Error policy: a missing target file is not an error (the file is skipped
//! without being read or created), and a name with no matching card block is
//! not an error. Any real I/O failure propagates and aborts the whole batch.

use crate::config::{CardLink, LinkerConfig};
use crate::error::Result;
use crate::rewrite;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one card was wrapped and the file was written back.
    Updated,
    /// The file exists but no card needed wrapping.
    Unchanged,
    /// The path does not exist; skipped without reading.
    Missing,
}

/// What happened to one target file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Number of mapping entries that matched and were wrapped.
    pub cards_linked: usize,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn updated_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Updated)
            .count()
    }
}

/// Process one file: read it, wrap every matching card, and write it back if
/// anything changed.
pub fn process(path: &Path, cards: &[CardLink]) -> Result<FileReport> {
    process_inner(path, cards, true)
}

/// Like [`process`], but never writes. Used for dry runs.
pub fn preview(path: &Path, cards: &[CardLink]) -> Result<FileReport> {
    process_inner(path, cards, false)
}

fn process_inner(path: &Path, cards: &[CardLink], write: bool) -> Result<FileReport> {
    if !path.exists() {
        return Ok(FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Missing,
            cards_linked: 0,
        });
    }

    let original = fs::read_to_string(path)?;
    let mut content = original.clone();
    let mut cards_linked = 0;

    for card in cards {
        if let Some(rewritten) = rewrite::wrap_card(&content, &card.name, &card.href)? {
            content = rewritten;
            cards_linked += 1;
        }
    }

    if content == original {
        return Ok(FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Unchanged,
            cards_linked: 0,
        });
    }

    if write {
        fs::write(path, &content)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        outcome: FileOutcome::Updated,
        cards_linked,
    })
}

/// Run the whole batch. Target paths are resolved against `base_dir`, but the
/// reports keep the configured paths for display.
pub fn run(config: &LinkerConfig, base_dir: &Path, dry_run: bool) -> Result<RunReport> {
    let mut report = RunReport::default();

    for file in &config.files {
        let target = base_dir.join(file);
        let file_report = if dry_run {
            preview(&target, &config.cards)?
        } else {
            process(&target, &config.cards)?
        };
        report.files.push(FileReport {
            path: file.clone(),
            ..file_report
        });
    }

    Ok(report)
}
