//! Reading back the tail of a log file

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use taglog_core::Result;

/// Reader over a single log file
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Last `n` lines of the file; empty when the file does not exist.
    /// Invalid UTF-8 is replaced rather than reported.
    pub fn tail(&self, n: usize) -> Result<Vec<String>> {
        if n == 0 || !self.path.exists() {
            return Ok(vec![]);
        }

        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut lines: VecDeque<String> = VecDeque::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            lines.push_back(String::from_utf8_lossy(&buf).into_owned());
            if lines.len() > n {
                lines.pop_front();
            }
        }

        Ok(lines.into())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes, 0 when missing
    pub fn size(&self) -> Result<u64> {
        if !self.path.exists() {
            return Ok(0);
        }
        Ok(std::fs::metadata(&self.path)?.len())
    }
}
