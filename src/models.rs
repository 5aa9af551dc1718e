//! Core Data Models
//!
//! This module defines the data structures that flow through the access-log analysis
//! pipeline, from a single parsed line up to the report handed to the display layer.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: [`Record`] - One fully parsed Combined Log Format line
//! 2. **Aggregation**: [`Group`] - A `(key, count)` pair for one distinct field value
//! 3. **Analysis**: [`AnalysisResult`] - Distinct origin count plus two ranked group lists
//! 4. **Report**: [`AnalysisReport`] - The result together with input bookkeeping
//!
//! ## Field Selection
//!
//! Aggregation is keyed by [`RecordField`], a closed enum with a typed accessor. Records
//! have a fixed shape, so there is no way to ask for a field that does not exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One access-log line split into its eleven fields.
///
/// Records are only produced by a [`crate::parser::LogFormat`] implementation; a line
/// either yields a complete record or a parse error, never a partial one. Fields are
/// read-only outside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub(crate) origin: String,
    pub(crate) identity: String,
    #[serde(rename = "userId")]
    pub(crate) user_id: String,
    pub(crate) timestamp: String,
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) protocol: String,
    pub(crate) status: u64,
    pub(crate) size: u64,
    pub(crate) referrer: String,
    #[serde(rename = "userAgent")]
    pub(crate) user_agent: String,
}

impl Record {
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Kept exactly as written between the brackets.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn status(&self) -> u64 {
        self.status
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn referrer(&self) -> &str {
        &self.referrer
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Fields a collection of records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    /// Client address (first token of the line)
    Origin,
    /// Requested resource from the request line
    Path,
}

impl RecordField {
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            RecordField::Origin => &record.origin,
            RecordField::Path => &record.path,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Origin => f.write_str("origin"),
            RecordField::Path => f.write_str("path"),
        }
    }
}

/// A distinct field value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub key: String,
    pub count: usize,
}

impl Group {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Summary statistics for one batch of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "totalRecords")]
    pub total_records: usize,
    #[serde(rename = "uniqueOrigins")]
    pub distinct_origins: usize,
    /// Most visited resources, ranked
    #[serde(rename = "topPaths")]
    pub top_paths: Vec<Group>,
    /// Most active origins, ranked
    #[serde(rename = "topOrigins")]
    pub top_origins: Vec<Group>,
}

/// Everything the display layer needs to present one run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    #[serde(rename = "totalLines")]
    pub total_lines: usize,
    #[serde(rename = "skippedLines")]
    pub skipped_lines: usize,
    #[serde(rename = "topN")]
    pub top_n: usize,
    #[serde(flatten)]
    pub result: AnalysisResult,
}
