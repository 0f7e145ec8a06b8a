//! Append-only operation log
//!
//! One JSON object per line. The file is opened for each append so a crash
//! loses at most the entry being written.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{CalculatorError, CalculatorResult};

use super::entry::LogEntry;

/// Writer and reader for `operations.log`
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record one mutation
    pub fn log(&self, entry: &LogEntry) -> CalculatorResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| CalculatorError::Json(format!("cannot encode log entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;

        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every recorded entry, oldest first
    ///
    /// A log that was never written reads as empty.
    pub fn read_all(&self) -> CalculatorResult<Vec<LogEntry>> {
        let Some(reader) = self.reader()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                CalculatorError::Io(format!("operation log line {} unreadable: {}", line_no, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str::<LogEntry>(&line).map_err(|e| {
                CalculatorError::Json(format!("operation log line {} is corrupt: {}", line_no, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> CalculatorResult<Vec<LogEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    /// Number of entries, counted without decoding them
    pub fn entry_count(&self) -> CalculatorResult<usize> {
        let Some(reader) = self.reader()? else {
            return Ok(0);
        };

        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn reader(&self) -> CalculatorResult<Option<BufReader<File>>> {
        if !self.exists() {
            return Ok(None);
        }
        let file = File::open(&self.log_path).map_err(|e| self.io_error("open", e))?;
        Ok(Some(BufReader::new(file)))
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> CalculatorError {
        CalculatorError::Io(format!(
            "cannot {} operation log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::OperationKind;
    use crate::models::Operation;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("operations.log");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = LogEntry::for_operation(&Operation::Add(5), 0, 5).unwrap();

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, OperationKind::Add);
        assert_eq!(entries[0].after, 5);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..5 {
            let entry = LogEntry::for_operation(&Operation::Add(1), i, i + 1).unwrap();
            logger.log(&entry).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 5);

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].before, 3);
        assert_eq!(recent[1].after, 5);

        assert_eq!(logger.read_recent(50).unwrap().len(), 5);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (logger, _temp) = create_test_logger();
        let entry = LogEntry::for_operation(&Operation::Clear, 9, 0).unwrap();
        logger.log(&entry).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "\n   "))
            .unwrap();
        logger.log(&entry).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
        assert_eq!(logger.entry_count().unwrap(), 2);
    }

    #[test]
    fn test_open_failure_names_the_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let entry = LogEntry::for_operation(&Operation::Add(1), 0, 1).unwrap();

        let err = logger.log(&entry).unwrap_err();
        assert!(matches!(err, CalculatorError::Io(_)));
        assert!(err.to_string().contains("cannot open operation log"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        let entry = LogEntry::for_operation(&Operation::Add(1), 0, 1).unwrap();
        logger.log(&entry).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "{{broken"))
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, CalculatorError::Json(_)));
        assert!(err.to_string().contains("line 2"));
    }
}
