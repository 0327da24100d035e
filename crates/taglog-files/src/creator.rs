//! Log file creation with per-tag "latest" symlinks

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use taglog_core::{Error, Identity, LogConfig, Result};
use tracing::debug;

use crate::naming;
use crate::reader::LogReader;

/// A freshly created (or reopened) log file
#[derive(Debug)]
pub struct LogFile {
    name: String,
    link: String,
    file: File,
    path: PathBuf,
}

impl LogFile {
    /// Bare file name, as stored in the symlink
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the tag's symlink inside the log directory
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Log directory joined with the file name
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Take ownership of the open handle
    pub fn into_file(self) -> File {
        self.file
    }
}

/// Creates log files in one directory on behalf of one process
#[derive(Debug, Clone)]
pub struct LogFiles {
    config: LogConfig,
    identity: Identity,
}

impl LogFiles {
    pub fn new(config: LogConfig, identity: Identity) -> Self {
        Self { config, identity }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// File name and symlink name for `tag` at `t`
    pub fn name<Tz>(&self, tag: &str, t: &DateTime<Tz>) -> (String, String)
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        naming::log_name(&self.identity, tag, t)
    }

    /// Create the log file for `tag` started at `t` and point the tag's
    /// symlink at it.
    ///
    /// An existing file with the same name is reopened for appending, never
    /// truncated. Symlink maintenance is best-effort: its failures are
    /// discarded and never turn a successful open into an error.
    pub fn create<Tz>(&self, tag: &str, t: &DateTime<Tz>) -> Result<LogFile>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let dir = self.dir();
        if dir.as_os_str().is_empty() {
            return Err(Error::config("no log directory configured"));
        }

        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let (name, link) = self.name(tag, t);
        let path = dir.join(&name);

        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| Error::OpenFile {
                path: path.clone(),
                source,
            })?;

        update_symlink(&dir.join(&link), &name);
        debug!("Created log file: {}", path.display());

        Ok(LogFile {
            name,
            link,
            file,
            path,
        })
    }

    /// Create the log file for `tag` stamped with the current local time
    pub fn create_now(&self, tag: &str) -> Result<LogFile> {
        self.create(tag, &Local::now())
    }

    /// Path of the symlink tracking the newest file for `tag`
    pub fn link_path(&self, tag: &str) -> PathBuf {
        self.dir().join(naming::link_name(&self.identity, tag))
    }

    /// Newest log file for `tag`, following its symlink.
    ///
    /// Returns `None` when the symlink is missing or the entry at its path is
    /// not a symlink.
    pub fn latest(&self, tag: &str) -> Result<Option<PathBuf>> {
        let link = self.link_path(tag);

        let meta = match fs::symlink_metadata(&link) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if !meta.file_type().is_symlink() {
            return Ok(None);
        }

        let target = fs::read_link(&link)?;
        if target.is_absolute() {
            Ok(Some(target))
        } else {
            Ok(Some(self.dir().join(target)))
        }
    }

    /// Reader over the newest log file for `tag`, if there is one
    pub fn latest_reader(&self, tag: &str) -> Result<Option<LogReader>> {
        Ok(self.latest(tag)?.map(LogReader::new))
    }
}

/// Replace the symlink at `link` with one pointing at `target`.
/// Both steps ignore their errors.
fn update_symlink(link: &Path, target: &str) {
    let _ = fs::remove_file(link);
    let _ = symlink(target, link);
}

#[cfg(unix)]
fn symlink(target: &str, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &str, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &str, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}
