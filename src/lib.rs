//! Access Log Analyzer Library
//!
//! Parses HTTP access logs in the Combined Log Format and computes summary statistics:
//! the number of distinct client addresses, the most visited URLs and the most active
//! clients.
//!
//! ## Architecture Overview
//!
//! - [`models`] - Records, groups and analysis results
//! - [`parser`] - The [`parser::LogFormat`] strategy trait and the Combined Log Format parser
//! - [`aggregator`] - Grouping by field and deterministic top-N ranking
//! - [`analyzer`] - The analysis engine combining the two
//! - [`reader`] - Line sources
//! - [`commands`] - The read → parse → analyse pipeline behind the CLI
//! - [`display`] - Terminal and JSON rendering
//! - [`config`] - Configuration with file and environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Example
//!
//! ```rust
//! use access_log_analyzer::{CombinedLogParser, LogAnalyzer, LogFormat};
//!
//! let lines: Vec<String> = [
//!     r#"192.168.0.1 - - [01/Jan/2022:00:00:00 +0000] "GET /home HTTP/1.1" 200 10 "-" "-""#,
//!     r#"192.168.0.1 - - [01/Jan/2022:00:00:05 +0000] "GET /about HTTP/1.1" 200 10 "-" "-""#,
//!     r#"192.168.0.2 - - [01/Jan/2022:00:00:09 +0000] "GET /home HTTP/1.1" 200 10 "-" "-""#,
//! ]
//! .iter()
//! .map(|l| l.to_string())
//! .collect();
//!
//! let batch = CombinedLogParser::new().parse_lines(&lines)?;
//! let result = LogAnalyzer::new().analyse(&batch.records, 2)?;
//!
//! assert_eq!(result.distinct_origins, 2);
//! assert_eq!(result.top_paths[0].key, "/home");
//! # Ok::<(), access_log_analyzer::error::AnalysisError>(())
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod reader;

pub use analyzer::LogAnalyzer;
pub use error::{AnalysisError, LineParseError};
pub use models::*;
pub use parser::{CombinedLogParser, LogFormat, LogFormatKind};
