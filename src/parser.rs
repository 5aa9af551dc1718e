//! Access-log line parsing
//!
//! A [`LogFormat`] turns raw lines into [`Record`]s. Each supported format is its own
//! strategy object, chosen at runtime through [`LogFormatKind`] and passed to whoever
//! needs it; there is no shared parser state.
//!
//! The only format implemented is the Combined Log Format:
//!
//! ```text
//! <origin> <identity> <userid> [<timestamp>] "<method> <path> <protocol>" <status> <size> "<referrer>" "<user-agent>"
//! ```
//!
//! A line that does not fit is reported as a [`LineParseError`] and skipped; it never
//! stops the rest of the batch.

use crate::error::{AnalysisError, AnalysisOutcome, LineParseError, ParseFailureReason};
use crate::models::Record;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

// Anything after the user-agent field is ignored.
const COMBINED_LOG_PATTERN: &str =
    r#"^(\S+) (\S+) (\S+) \[([^\]]+)\] "([^"]*)" (\S+) (\S+) "([^"]*)" "([^"]*)""#;

fn combined_log_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(COMBINED_LOG_PATTERN).expect("combined log pattern compiles"))
}

/// A rejected line and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based position in the input
    pub line_number: usize,
    pub error: LineParseError,
}

/// Output of parsing a whole batch of lines.
#[derive(Debug, Clone, Default)]
pub struct BatchParse {
    /// Successfully parsed records, in input order
    pub records: Vec<Record>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl BatchParse {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// A log line grammar.
pub trait LogFormat: Send + Sync {
    /// Name used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    fn parse_line(&self, line: &str) -> Result<Record, LineParseError>;

    /// Parse every line, keeping the survivors in order.
    ///
    /// Bad lines, blank ones included, are logged and collected as diagnostics, so
    /// `records.len() + diagnostics.len() == lines.len()`. Fails only when no line
    /// produced a record.
    fn parse_lines(&self, lines: &[String]) -> AnalysisOutcome<BatchParse> {
        let mut batch = BatchParse::default();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;

            match self.parse_line(line) {
                Ok(record) => batch.records.push(record),
                Err(error) => {
                    warn!(
                        line_number,
                        format = self.name(),
                        reason = %error.reason,
                        "Skipping unparseable log line"
                    );
                    batch.diagnostics.push(ParseDiagnostic { line_number, error });
                }
            }
        }

        debug!(
            parsed = batch.records.len(),
            skipped = batch.skipped(),
            "Finished parsing batch"
        );

        if batch.records.is_empty() {
            return Err(AnalysisError::EmptyResult);
        }

        Ok(batch)
    }
}

/// Parser for the Apache/NGINX Combined Log Format.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedLogParser;

impl CombinedLogParser {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormat for CombinedLogParser {
    fn name(&self) -> &'static str {
        "combined-log-format"
    }

    fn parse_line(&self, line: &str) -> Result<Record, LineParseError> {
        let fields = combined_log_regex()
            .captures(line)
            .ok_or_else(|| LineParseError::grammar(line))?;

        let request: Vec<&str> = fields[5].split_whitespace().collect();
        let [method, path, protocol] = request.as_slice() else {
            return Err(LineParseError::new(
                line,
                ParseFailureReason::MalformedRequest {
                    tokens: request.len(),
                },
            ));
        };

        let status = parse_quantity("status", &fields[6])
            .map_err(|reason| LineParseError::new(line, reason))?;
        let size =
            parse_quantity("size", &fields[7]).map_err(|reason| LineParseError::new(line, reason))?;

        Ok(Record {
            origin: fields[1].to_string(),
            identity: fields[2].to_string(),
            user_id: fields[3].to_string(),
            timestamp: fields[4].to_string(),
            method: method.to_string(),
            path: path.to_string(),
            protocol: protocol.to_string(),
            status,
            size,
            referrer: fields[8].to_string(),
            user_agent: fields[9].to_string(),
        })
    }
}

fn invalid_value(field: &'static str, token: &str) -> ParseFailureReason {
    ParseFailureReason::InvalidFieldValue {
        field,
        value: token.to_string(),
    }
}

/// Parse a non-negative integer token.
///
/// Decimal literals are accepted and truncated toward zero, so `"1234.9"` reads as
/// `1234`. Negative, non-finite and non-numeric tokens are rejected.
pub fn parse_quantity(field: &'static str, token: &str) -> Result<u64, ParseFailureReason> {
    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }

    let value: f64 = token.parse().map_err(|_| invalid_value(field, token))?;
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated >= u64::MAX as f64 {
        return Err(invalid_value(field, token));
    }

    Ok(truncated as u64)
}

/// Log formats selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormatKind {
    #[default]
    CombinedLogFormat,
}

impl LogFormatKind {
    /// Build a fresh parser for this format.
    pub fn parser(&self) -> Box<dyn LogFormat> {
        match self {
            LogFormatKind::CombinedLogFormat => Box::new(CombinedLogParser::new()),
        }
    }
}

impl fmt::Display for LogFormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormatKind::CombinedLogFormat => f.write_str("combined-log-format"),
        }
    }
}

impl FromStr for LogFormatKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "combined-log-format" | "combined" => Ok(LogFormatKind::CombinedLogFormat),
            other => anyhow::bail!("Unknown log format: {}", other),
        }
    }
}
