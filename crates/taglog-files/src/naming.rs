//! Log file and symlink names

use chrono::{DateTime, TimeZone};
use std::fmt;
use taglog_core::{constants::TIMESTAMP_FORMAT, Identity};

/// Name of a log file for `tag` started at `t`, and the name of the symlink
/// that tracks the newest file for that tag.
///
/// The file name is `<program>.<host>.<user>.log.<tag>.<YYYYMMDD-HHMMSS>.<pid>`
/// with the timestamp rendered in `t`'s own time zone. The link name is
/// `<program>.<tag>`. `tag` is used as given. Years past 9999 render with a
/// leading `+` (chrono's `%Y`), which breaks lexical ordering of names.
pub fn log_name<Tz>(identity: &Identity, tag: &str, t: &DateTime<Tz>) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let name = format!(
        "{}.{}.{}.log.{}.{}.{}",
        identity.program(),
        identity.host(),
        identity.user(),
        tag,
        t.format(TIMESTAMP_FORMAT),
        identity.pid()
    );
    (name, link_name(identity, tag))
}

/// Symlink name for `tag`
pub fn link_name(identity: &Identity, tag: &str) -> String {
    format!("{}.{}", identity.program(), tag)
}
