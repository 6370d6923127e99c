//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::{AnsiColor, Style};
use log::info;
use once_cell::sync::Lazy;
//----------------------------------------------------------------------------------- local modules
use crate::format_duration;

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

/// The filter used when `RUST_LOG` isn't set: everything outside of melodeon is silenced.
#[must_use]
pub fn default_filter(level: log::LevelFilter) -> String {
    format!("off,melodeon={level}")
}

/// The single letter shown for a log level, and the color it's shown in.
const fn level_marker(level: log::Level) -> (&'static str, AnsiColor) {
    match level {
        log::Level::Error => ("E", AnsiColor::Red),
        log::Level::Warn => ("W", AnsiColor::Yellow),
        log::Level::Info => ("I", AnsiColor::White),
        log::Level::Debug => ("D", AnsiColor::Blue),
        log::Level::Trace => ("T", AnsiColor::Magenta),
    }
}

//---------------------------------------------------------------------------------------------------- Logger init function
#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables console logging on all the internals of `Melodeon`.
///
/// Functionality is provided by [`log`].
///
/// The levels are:
/// - ERROR
/// - WARN
/// - INFO
/// - DEBUG
/// - TRACE
///
/// If `RUST_LOG` is set it takes precedence over `filter`.
///
/// # Panics
/// This must only be called _once_.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(filter: log::LevelFilter) {
    // Initialize timer.
    let now = Lazy::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").unwrap_or_default();

    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            let (level, color) = level_marker(record.level());
            let level_style = Style::new().fg_color(Some(color.into())).bold();
            let dimmed = Style::new().dimmed();
            writeln!(
                buf,
                // Longest PATH in the repo: `library/src/library.rs` - `22` characters
                // Longest file in the repo: `library/src/artist.rs`  - `3` digits
                //
                //      Longest PATH ---|        |--- Longest file
                //                      |        |
                //                      v        v
                "| {level_style}{level}{level_style:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >22} @ {: <3}{dimmed:#} | {}",
                format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .write_style(env_logger::WriteStyle::Always);

    if env.is_empty() {
        builder.parse_filters(&default_filter(filter));
    } else {
        builder.parse_filters(&env);
    }

    builder.init();

    if env.is_empty() {
        info!("Log Level (Flag) ... {}", filter);
    } else {
        info!("Log Level (RUST_LOG) ... {}", env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(log::LevelFilter::Info, "off,melodeon=INFO")]
    #[case(log::LevelFilter::Trace, "off,melodeon=TRACE")]
    #[case(log::LevelFilter::Off, "off,melodeon=OFF")]
    fn test_default_filter(#[case] level: log::LevelFilter, #[case] expected: &str) {
        assert_str_eq!(default_filter(level), expected);
    }

    #[rstest]
    #[case(log::Level::Error, "E")]
    #[case(log::Level::Warn, "W")]
    #[case(log::Level::Info, "I")]
    #[case(log::Level::Debug, "D")]
    #[case(log::Level::Trace, "T")]
    fn test_level_marker(#[case] level: log::Level, #[case] expected: &str) {
        assert_str_eq!(level_marker(level).0, expected);
    }
}
