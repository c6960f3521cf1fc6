//! Consultation log - an append-only text file of recommendations.

use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::Consultation;
use crate::error::{AdvisorError, Result};

/// Timestamp layout used in log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed consultation that produced recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRecord {
    pub timestamp: NaiveDateTime,
    pub student: String,
    pub fields: Vec<String>,
}

impl ConsultationRecord {
    pub fn new(timestamp: NaiveDateTime, student: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            timestamp,
            student: student.into(),
            fields,
        }
    }

    /// Build a record from a consultation's matched fields.
    pub fn from_consultation(
        timestamp: NaiveDateTime,
        student: impl Into<String>,
        consultation: &Consultation,
    ) -> Self {
        let fields = consultation
            .fields()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self::new(timestamp, student, fields)
    }
}

impl std::fmt::Display for ConsultationRecord {
    /// `[2024-05-01 09:30:00] Budi: Informatika, Statistika`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.student,
            self.fields.join(", ")
        )
    }
}

/// Appends consultation records to a text file, one line each.
#[derive(Debug, Clone)]
pub struct ConsultationLog {
    path: PathBuf,
}

impl ConsultationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    pub fn append(&self, record: &ConsultationRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| AdvisorError::io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AdvisorError::io(&self.path, e))?;
        writeln!(file, "{}", record).map_err(|e| AdvisorError::io(&self.path, e))?;

        info!(
            path = %self.path.display(),
            student = %record.student,
            matches = record.fields.len(),
            "consultation logged"
        );
        Ok(())
    }

    /// Log a consultation stamped with the current local time.
    ///
    /// Nothing is written when the consultation found no match.
    pub fn record(
        &self,
        student: &str,
        consultation: &Consultation,
    ) -> Result<Option<ConsultationRecord>> {
        if consultation.is_empty() {
            return Ok(None);
        }

        let record =
            ConsultationRecord::from_consultation(Local::now().naive_local(), student.trim(), consultation);
        self.append(&record)?;
        Ok(Some(record))
    }

    /// All logged lines, oldest first. A missing file has no lines.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| AdvisorError::io(&self.path, e))?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
