//! Constants and default values for taglog

/// Default log directory, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "./log";

/// Default max log size in bytes (100MB)
pub const DEFAULT_LOG_MAX_SIZE: u64 = 100 * 1024 * 1024;

/// Placeholder used when the program name cannot be determined
pub const UNKNOWN_PROGRAM: &str = "unknownprogram";

/// Placeholder used when the hostname lookup fails
pub const UNKNOWN_HOST: &str = "unknownhost";

/// Placeholder used when the user lookup fails
pub const UNKNOWN_USER: &str = "unknownuser";

/// Timestamp layout embedded in log file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &["taglog.toml", "taglog.yaml", "taglog.yml", "taglog.json"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_size() {
        assert_eq!(DEFAULT_LOG_MAX_SIZE, 104_857_600);
    }

    #[test]
    fn test_config_files_prefer_toml() {
        assert_eq!(CONFIG_FILES[0], "taglog.toml");
    }
}
