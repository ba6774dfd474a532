#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 24-base window matching both motifs exactly
pub const PERFECT_WINDOW: &str = "GTTCAAAACAAAAAAAAAAAACCA";

pub fn trnasorter_cmd() -> Command {
    Command::cargo_bin("trnasorter").unwrap()
}

/// Create a test FASTA file with the given content
pub fn create_test_fasta(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

/// 75-base full-length body ending in a perfect window
pub fn full_length_body() -> String {
    let mut body: Vec<char> = "G".repeat(75 - PERFECT_WINDOW.len()).chars().collect();
    body[7] = 'T';
    body[13] = 'A';
    let mut body: String = body.into_iter().collect();
    body.push_str(PERFECT_WINDOW);
    body
}

/// One read of each outcome: full-length, with trailer, too short, junk
pub fn create_mixed_fasta() -> String {
    format!(
        ">full|count:12 sample read\n{}\n>trailer\n{}TTAG\n>short\nGTTCCCA\n>junk\n{}\n",
        full_length_body(),
        full_length_body(),
        "A".repeat(40)
    )
}

/// `n` reads that all pass, every third one with a trailer
pub fn create_passing_fasta(n: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        let trailer = if i % 3 == 0 { "AC" } else { "" };
        content.push_str(&format!(">read_{} test read\nGGGGGG{}{}\n", i, PERFECT_WINDOW, trailer));
    }
    content
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        create_test_fasta(self.temp_dir.path(), name, content)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
