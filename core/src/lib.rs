pub mod catalog;
pub mod config;
pub mod errors;
pub mod logger;

use std::path::PathBuf;
use std::time::Duration;

use errors::DirectoryError;

/// Formats a [`Duration`] as `HH:MM:SS.ss`.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    // truncated, rounding could carry into a 60th second
    let centiseconds = duration.subsec_millis() / 10;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{centiseconds:02}")
}

/// Get the directory the config file lives in.
///
/// This is `$XDG_CONFIG_HOME/melodeon` (or `~/.config/melodeon`) on linux, and the platform equivalent elsewhere.
///
/// # Errors
///
/// Returns [`DirectoryError::Config`] if no home directory could be found for the current user.
pub fn get_config_dir() -> Result<PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "melodeon")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::ZERO, "00:00:00.00")]
    #[case(Duration::from_millis(1_500), "00:00:01.50")]
    #[case(Duration::from_secs(59), "00:00:59.00")]
    #[case(Duration::from_millis(59_999), "00:00:59.99")]
    #[case(Duration::from_millis(3_599_999), "00:59:59.99")]
    #[case(Duration::from_secs(61), "00:01:01.00")]
    #[case(Duration::from_millis(3_661_250), "01:01:01.25")]
    #[case(Duration::from_secs(100 * 3600), "100:00:00.00")]
    fn test_format_duration(#[case] duration: Duration, #[case] expected: &str) {
        assert_str_eq!(format_duration(&duration), expected);
    }
}
