#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Build one Combined Log Format line.
pub fn clf_line(origin: &str, path: &str, status: &str, size: &str) -> String {
    format!(
        r#"{} - - [10/Oct/2000:13:55:36 -0700] "GET {} HTTP/1.1" {} {} "http://example.com/" "Mozilla/5.0""#,
        origin, path, status, size
    )
}

/// Six requests from three clients: 192.168.0.1 ×3, 192.168.0.2 ×2, 192.168.0.3 ×1.
pub fn sample_lines() -> Vec<String> {
    vec![
        clf_line("192.168.0.1", "/home", "200", "512"),
        clf_line("192.168.0.2", "/about", "200", "128"),
        clf_line("192.168.0.1", "/home", "200", "512"),
        clf_line("192.168.0.3", "/contact", "404", "0"),
        clf_line("192.168.0.1", "/home", "304", "0"),
        clf_line("192.168.0.2", "/about", "200", "128"),
    ]
}

pub fn create_test_log(dir: &Path, filename: &str, lines: &[String]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, lines.join("\n"))?;
    Ok(file_path)
}
