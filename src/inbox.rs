//! File-backed inbox of forwarded lead emails
//!
//! The inbox is a single append-only text file that a mail filter writes
//! forwarded notifications into. Parsing reads it as a stream of lines and
//! never modifies it; [`Inbox::clear`] is the only operation that does.
//!
//! Parses and clears against the same file are not coordinated here. Callers
//! must not clear while a parse is in flight.

use crate::error::{InboxError, Result};
use crate::extractor::{LeadExtractor, ParseOutcome};
use crate::types::Lead;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Inbox {
    path: PathBuf,
    extractor: LeadExtractor,
}

impl Inbox {
    /// Open the inbox at `path`, creating an empty file if none exists
    ///
    /// Existing content is left untouched.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_extractor(path, LeadExtractor::new()).await
    }

    pub async fn with_extractor(path: impl Into<PathBuf>, extractor: LeadExtractor) -> Result<Self> {
        let path = path.into();
        ensure_exists(&path).await?;
        Ok(Self { path, extractor })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole inbox and return the committed leads with the report
    ///
    /// Bytes that are not valid UTF-8 are decoded as U+FFFD. Fails without
    /// partial output on the first I/O error.
    pub async fn parse(&self) -> Result<ParseOutcome> {
        let file = File::open(&self.path)
            .await
            .map_err(|e| InboxError::io(&self.path, e))?;
        let mut reader = BufReader::new(file);
        let mut stream = self.extractor.stream();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| InboxError::io(&self.path, e))?;
            if read == 0 {
                break;
            }
            stream.push(&String::from_utf8_lossy(trim_line_ending(&buf)));
        }

        Ok(stream.finish())
    }

    /// Committed leads only
    pub async fn leads(&self) -> Result<Vec<Lead>> {
        Ok(self.parse().await?.leads)
    }

    /// Truncate the inbox to empty
    pub async fn clear(&self) -> Result<()> {
        fs::write(&self.path, b"")
            .await
            .map_err(|e| InboxError::io(&self.path, e))?;
        info!("Inbox {} cleared", self.path.display());
        Ok(())
    }

    /// Parse, then clear only if the parse succeeded
    pub async fn drain(&self) -> Result<ParseOutcome> {
        let outcome = self.parse().await?;
        self.clear().await?;
        Ok(outcome)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

async fn ensure_exists(path: &Path) -> Result<()> {
    if fs::try_exists(path)
        .await
        .map_err(|e| InboxError::io(path, e))?
    {
        debug!("Inbox {} already exists", path.display());
        return Ok(());
    }

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| InboxError::io(path, e))?;
    info!("Inbox {} created", path.display());
    Ok(())
}
