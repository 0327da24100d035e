//! Latest command implementation

use anyhow::{bail, Result};
use taglog_files::LogFiles;

pub fn execute(files: &LogFiles, tag: &str) -> Result<()> {
    match files.latest(tag)? {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!("No log file for tag {} in {}", tag, files.dir().display()),
    }
}
