//! Create command implementation

use anyhow::Result;
use taglog_files::LogFiles;
use tracing::info;

pub fn execute(files: &LogFiles, tag: &str) -> Result<()> {
    let log = files.create_now(tag)?;
    info!("Created {} log: {}", tag, log.name());
    println!("{}", log.path().display());
    Ok(())
}
