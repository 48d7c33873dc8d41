use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn journal_chart_cmd() -> Command {
    let mut cmd = Command::cargo_bin("journal-chart").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("JOURNAL_CHART_CONFIG");
    cmd.env_remove("JOURNAL_CHART_WEEK_START");
    cmd.env_remove("JOURNAL_CHART_OVERLAP_CHECK");
    cmd
}

/// Write a journal CSV with the standard header followed by `rows`
#[allow(dead_code)]
pub fn write_journal(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("journal.csv");
    let mut contents = String::from("start,end,category\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}
