//! taglog Files - Log file naming, creation and "latest" symlinks
//!
//! Files are named `<program>.<host>.<user>.log.<tag>.<YYYYMMDD-HHMMSS>.<pid>`
//! and each tag gets a `<program>.<tag>` symlink pointing at its newest file.

mod creator;
mod naming;
mod reader;

pub use creator::{LogFile, LogFiles};
pub use naming::{link_name, log_name};
pub use reader::LogReader;
