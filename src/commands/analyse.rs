//! Analyse command
//!
//! Reads every line from a [`LogReader`], parses them with the given [`LogFormat`] and
//! runs the [`LogAnalyzer`] over the surviving records. Each stage's failure is wrapped
//! with context naming the stage.

use anyhow::{Context, Result};
use tracing::info;

use crate::analyzer::LogAnalyzer;
use crate::logging::run_span;
use crate::models::AnalysisReport;
use crate::parser::LogFormat;
use crate::reader::LogReader;

pub fn run_analyse(
    reader: &dyn LogReader,
    format: &dyn LogFormat,
    analyzer: &LogAnalyzer,
    top_n: usize,
) -> Result<AnalysisReport> {
    let source = reader.source();
    let span = run_span(&source);
    let _enter = span.enter();

    let lines = reader.read_lines().context("Error reading log file")?;

    let batch = format
        .parse_lines(&lines)
        .context("Error parsing log file")?;

    let result = analyzer
        .analyse(&batch.records, top_n)
        .context("Error analysing log file")?;

    info!(
        total_lines = lines.len(),
        records = result.total_records,
        skipped = batch.skipped(),
        distinct_origins = result.distinct_origins,
        "Analysis completed"
    );

    Ok(AnalysisReport {
        source,
        total_lines: lines.len(),
        skipped_lines: batch.skipped(),
        top_n,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::parser::CombinedLogParser;

    struct StaticReader(Vec<&'static str>);

    impl LogReader for StaticReader {
        fn source(&self) -> String {
            "memory".to_string()
        }

        fn read_lines(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|l| l.to_string()).collect())
        }
    }

    #[test]
    fn test_run_analyse_counts_skipped_lines() {
        let reader = StaticReader(vec![
            r#"1.1.1.1 - - [01/Jan/2022:00:00:00 +0000] "GET /a HTTP/1.1" 200 10 "-" "-""#,
            "garbage",
            r#"2.2.2.2 - - [01/Jan/2022:00:00:01 +0000] "GET /a HTTP/1.1" 200 10 "-" "-""#,
        ]);

        let report = run_analyse(&reader, &CombinedLogParser::new(), &LogAnalyzer::new(), 1).unwrap();
        assert_eq!(report.source, "memory");
        assert_eq!(report.total_lines, 3);
        assert_eq!(report.skipped_lines, 1);
        assert_eq!(report.result.distinct_origins, 2);
        assert_eq!(report.result.top_paths[0].key, "/a");
    }

    #[test]
    fn test_run_analyse_empty_input() {
        let reader = StaticReader(vec![]);
        let err = run_analyse(&reader, &CombinedLogParser::new(), &LogAnalyzer::new(), 1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::EmptyResult)
        );
        assert!(format!("{:#}", err).contains("no valid records in input"));
    }
}
