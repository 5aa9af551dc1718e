//! Analysis Engine
//!
//! [`LogAnalyzer`] turns a batch of parsed [`Record`]s into an [`AnalysisResult`]:
//!
//! - the number of distinct origins (client addresses),
//! - the top N requested paths ("most visited resources"),
//! - the top N origins ("most active clients").
//!
//! The engine holds no state between calls. Given the same records and `top_n` it
//! always returns the same result, and it never retains the records it was given.
//!
//! ## Usage Example
//!
//! ```rust
//! use access_log_analyzer::analyzer::LogAnalyzer;
//! use access_log_analyzer::parser::{CombinedLogParser, LogFormat};
//!
//! let lines = vec![
//!     r#"10.0.0.1 - - [01/Jan/2022:00:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "-""#.to_string(),
//! ];
//! let batch = CombinedLogParser::new().parse_lines(&lines).unwrap();
//! let result = LogAnalyzer::new().analyse(&batch.records, 1).unwrap();
//! assert_eq!(result.distinct_origins, 1);
//! ```

use crate::aggregator::group_by;
use crate::error::{AnalysisError, AnalysisOutcome};
use crate::models::{AnalysisResult, Record, RecordField};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalyzer;

impl LogAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyse(&self, records: &[Record], top_n: usize) -> AnalysisOutcome<AnalysisResult> {
        if records.is_empty() {
            return Err(AnalysisError::EmptyResult);
        }

        let origins = group_by(records, RecordField::Origin);
        let paths = group_by(records, RecordField::Path);

        debug!(
            records = records.len(),
            distinct_origins = origins.len(),
            distinct_paths = paths.len(),
            top_n,
            "Grouped records"
        );

        let top_paths = paths.top_n(top_n)?;
        let top_origins = origins.top_n(top_n)?;

        Ok(AnalysisResult {
            total_records: records.len(),
            distinct_origins: origins.len(),
            top_paths,
            top_origins,
        })
    }
}
