//! Tail command implementation

use anyhow::{bail, Result};
use taglog_files::LogFiles;

pub fn execute(files: &LogFiles, tag: &str, lines: usize) -> Result<()> {
    let Some(reader) = files.latest_reader(tag)? else {
        bail!("No log file for tag {} in {}", tag, files.dir().display());
    };

    for line in reader.tail(lines)? {
        println!("{}", line);
    }
    Ok(())
}
