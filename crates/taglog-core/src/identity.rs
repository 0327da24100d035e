//! Process identity embedded in every log file name

use std::path::Path;
use tracing::debug;

use crate::constants::{UNKNOWN_HOST, UNKNOWN_PROGRAM, UNKNOWN_USER};

/// Who is writing the logs: program, host, user and process id.
///
/// Built once by the owning process with [`Identity::detect`] and handed to
/// whatever creates log files. Values are fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    program: String,
    host: String,
    user: String,
    pid: u32,
}

impl Identity {
    /// Build an identity from explicit values.
    ///
    /// `host` is truncated at its first `.` and path separators in `user`
    /// are replaced, exactly as [`Identity::detect`] does.
    pub fn new(
        program: impl Into<String>,
        host: impl AsRef<str>,
        user: impl AsRef<str>,
        pid: u32,
    ) -> Self {
        Self {
            program: program.into(),
            host: short_hostname(host.as_ref()).to_string(),
            user: sanitize_user(user.as_ref()),
            pid,
        }
    }

    /// Inspect the running process. Lookups that fail fall back to
    /// placeholders; this never returns an error.
    pub fn detect() -> Self {
        let program = program_name().unwrap_or_else(|| {
            debug!("Program name unavailable, using {}", UNKNOWN_PROGRAM);
            UNKNOWN_PROGRAM.to_string()
        });
        let host = hostname().unwrap_or_else(|| {
            debug!("Hostname lookup failed, using {}", UNKNOWN_HOST);
            UNKNOWN_HOST.to_string()
        });
        let user = username().unwrap_or_else(|| {
            debug!("User lookup failed, using {}", UNKNOWN_USER);
            UNKNOWN_USER.to_string()
        });

        Self::new(program, host, user, std::process::id())
    }

    /// Replace the program name, keeping host, user and pid
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

/// Truncate a hostname at its first period: "www.example.com" becomes "www".
pub fn short_hostname(hostname: &str) -> &str {
    match hostname.find('.') {
        Some(i) => &hostname[..i],
        None => hostname,
    }
}

/// Make a user name safe for use inside a file name.
///
/// Domain accounts look like `DOMAIN\user`, so both separators are replaced.
pub fn sanitize_user(user: &str) -> String {
    user.replace(['/', '\\'], "_")
}

fn program_name() -> Option<String> {
    let from_args = std::env::args_os()
        .next()
        .and_then(|arg0| base_name(Path::new(&arg0)));
    from_args.or_else(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| base_name(&exe))
    })
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(unix)]
fn hostname() -> Option<String> {
    nix::unistd::gethostname()
        .ok()
        .map(|h| h.to_string_lossy().into_owned())
        .filter(|h| !h.is_empty())
}

#[cfg(not(unix))]
fn hostname() -> Option<String> {
    std::env::var("COMPUTERNAME").ok().filter(|h| !h.is_empty())
}

#[cfg(unix)]
fn username() -> Option<String> {
    use nix::unistd::{Uid, User};

    User::from_uid(Uid::current())
        .ok()
        .flatten()
        .map(|u| u.name)
        .filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
fn username() -> Option<String> {
    std::env::var("USERNAME").ok().filter(|u| !u.is_empty())
}
