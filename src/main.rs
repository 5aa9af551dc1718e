use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};

use access_log_analyzer::commands::run_analyse;
use access_log_analyzer::config::Config;
use access_log_analyzer::display::ReportDisplayManager;
use access_log_analyzer::logging::init_logging;
use access_log_analyzer::parser::LogFormatKind;
use access_log_analyzer::reader::FileReader;
use access_log_analyzer::LogAnalyzer;

#[derive(Parser)]
#[command(name = "access-log-analyzer")]
#[command(about = "Parses an HTTP access log and reports unique clients, top URLs and top clients")]
#[command(version)]
struct Cli {
    /// Access log to analyse (defaults to input.log_dir/input.log_file from config)
    file: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ranked entries to show
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Log line format
    #[arg(long)]
    format: Option<LogFormatKind>,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run(cli) {
        handle_error(e, json);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_file = Config::locate(cli.config.as_deref());
    let mut config = Config::load(config_file.as_deref())?;

    if let Some(top_n) = cli.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(format) = cli.format {
        config.input.log_format = format;
    }
    config.output.json |= cli.json;

    let _guard = init_logging(&config)?;

    if let Some(path) = &config_file {
        info!(config_file = %path.display(), "Loaded configuration from file");
    }
    if config.analysis.top_n == 0 {
        warn!("top_n is 0, ranked lists will be empty");
    }

    let path = cli.file.unwrap_or_else(|| config.log_file_path());
    let reader = FileReader::new(path);
    let parser = config.input.log_format.parser();
    let analyzer = LogAnalyzer::new();

    let report = run_analyse(&reader, parser.as_ref(), &analyzer, config.analysis.top_n)?;

    let display = ReportDisplayManager::new(config.output.json_pretty);
    println!("{}", display.render(&report, config.output.json)?);

    Ok(())
}

fn handle_error(e: anyhow::Error, json: bool) -> ! {
    if json {
        println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
    } else {
        eprintln!("Error: {:#}", e);
    }
    process::exit(1);
}
