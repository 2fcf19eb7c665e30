//! Newline-delimited JSON result sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::domain::errors::{HarnessError, HarnessResult};
use crate::domain::models::RunRecord;
use crate::domain::ports::RecordSink;

/// Appends one JSON object per line to a run file.
///
/// The file is truncated on creation. Every record is written as a single
/// buffer (line plus `\n`) and flushed before `append` returns, so killing the
/// process mid-run leaves a valid prefix of complete lines.
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    file: File,
    written: usize,
}

impl JsonlSink {
    /// Create (or truncate) `path`, creating parent directories first.
    pub async fn create(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref().to_path_buf();
        let output_err = |source| HarnessError::OutputPath {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(output_err)?;
        }
        let file = File::create(&path).await.map_err(output_err)?;

        Ok(Self {
            path,
            file,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records appended so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

#[async_trait]
impl RecordSink for JsonlSink {
    async fn append(&mut self, record: &RunRecord) -> HarnessResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let result = match self.file.write_all(&line).await {
            Ok(()) => self.file.flush().await,
            Err(e) => Err(e),
        };
        result.map_err(|source| HarnessError::SinkWrite {
            path: self.path.clone(),
            source,
        })?;

        self.written += 1;
        Ok(())
    }
}
