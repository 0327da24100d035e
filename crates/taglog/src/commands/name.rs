//! Name command implementation

use anyhow::Result;
use chrono::Local;
use taglog_files::LogFiles;

pub fn execute(files: &LogFiles, tag: &str) -> Result<()> {
    let (name, link) = files.name(tag, &Local::now());
    println!("{}", name);
    println!("{}", link);
    Ok(())
}
