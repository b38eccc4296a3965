use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, SubsecRound, Utc};

use crate::extraction::types::ExtractionRecord;
use crate::util::time::{file_date, local_offset};

mod csv;
mod json;
mod txt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Txt,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    fn file_prefix(&self) -> &'static str {
        match self {
            ExportFormat::Json | ExportFormat::Txt => "content",
            ExportFormat::Csv => "content-stats",
        }
    }
}

/// A rendered export, ready to be written out.
#[derive(Debug, Clone)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

impl Export {
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create export dir: {}", dir.display()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes()).with_context(|| format!("Failed to write export: {}", path.display()))?;
        Ok(path)
    }
}

/// Renders exports as of `now`, with dates shown in `offset`.
pub struct Exporter {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl Exporter {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now: now.trunc_subsecs(3), offset }
    }

    pub fn local() -> Self {
        Self::new(Utc::now(), local_offset())
    }

    /// `None` when there is no record to export.
    pub fn export(&self, format: ExportFormat, record: Option<&ExtractionRecord>) -> Result<Option<Export>> {
        let Some(record) = record else { return Ok(None) };
        let contents = match format {
            ExportFormat::Json => json::render(record, self.now)?,
            ExportFormat::Txt => txt::render(record, self.offset),
            ExportFormat::Csv => csv::render(std::slice::from_ref(record), self.offset),
        };
        let file_name = format!("{}-{}.{}", format.file_prefix(), file_date(self.now), format.as_str());
        Ok(Some(Export { file_name, contents }))
    }
}
