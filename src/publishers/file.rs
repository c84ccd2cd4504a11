use async_trait::async_trait;
use bon::bon;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::types::ReportRecord;
use crate::traits::report_sink::ReportSink;

/// Append-mode output file. Nothing touches the disk until `prepare`,
/// which empties the file once for the run.
pub struct FileReportWriter {
    path: PathBuf,
    create_dirs: bool,
    file: Option<File>,
}

#[bon]
impl FileReportWriter {
    #[builder]
    pub fn new(
        #[builder(into)] path: PathBuf,
        #[builder(default = true)] create_dirs: bool,
    ) -> Self {
        Self { path, create_dirs, file: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileReportWriter {
    fn name(&self) -> &str { "file" }

    async fn prepare(&mut self) -> Result<()> {
        if self.create_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.set_len(0)?;
        info!(path = %self.path.display(), "file: output truncated");
        self.file = Some(file);
        Ok(())
    }

    async fn write_report(&mut self, record: &ReportRecord) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| std::io::Error::new(ErrorKind::NotConnected, "output file not prepared"))?;
        file.write_all(record.render().as_bytes())?;
        file.flush()?;
        debug!(id = %record.id, text_len = record.text.len(), "file: report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvestError;

    fn record(id: &str, text: &str) -> ReportRecord {
        ReportRecord { id: id.into(), text: text.to_string() }
    }

    #[tokio::test]
    async fn building_leaves_existing_output_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lsrs.txt");
        std::fs::write(&path, "previous run\n").unwrap();

        let writer = FileReportWriter::builder().path(&path).build();
        assert_eq!(writer.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
    }

    #[tokio::test]
    async fn prepare_clears_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lsrs.txt");
        std::fs::write(&path, "stale content from last run\n").unwrap();

        let mut writer = FileReportWriter::builder().path(&path).build();
        writer.prepare().await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn writes_are_incremental_and_ordered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lsrs.txt");
        let mut writer = FileReportWriter::builder().path(&path).build();
        writer.prepare().await.unwrap();

        writer.write_report(&record("https://a/1", "TORNADO")).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://a/1\nTORNADO\n========================================\n"
        );

        writer.write_report(&record("https://a/2", "HAIL")).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "https://a/1\nTORNADO\n========================================\n\
             https://a/2\nHAIL\n========================================\n"
        );
    }

    #[tokio::test]
    async fn write_before_prepare_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FileReportWriter::builder().path(dir.path().join("lsrs.txt")).build();
        let err = writer.write_report(&record("https://a/1", "X")).await.unwrap_err();
        assert!(matches!(err, HarvestError::Io(ref e) if e.kind() == ErrorKind::NotConnected));
    }

    #[tokio::test]
    async fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/lsrs.txt");
        FileReportWriter::builder().path(&path).build().prepare().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn missing_parent_without_create_dirs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent/lsrs.txt");
        let mut writer = FileReportWriter::builder().path(&path).create_dirs(false).build();
        assert!(matches!(writer.prepare().await, Err(HarvestError::Io(_))));
    }
}
