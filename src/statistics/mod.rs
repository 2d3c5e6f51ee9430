//! Responsible for behaviour related to logging statistics with a specific prefix and closing
//! lines.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

#[derive(Debug)]
struct StatisticOptions {
    log_statistics: bool,
    // Statistics are printed in the form `{PREFIX} {NAME}={VALUE}`.
    prefix: &'static str,
    // Printed once after a block of statistics.
    after: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceLock<StatisticOptions> = OnceLock::new();

/// Configures the statistic logger to use a certain prefix and (an optional) closing line which
/// can be printed after all of the statistics have been logged. Statistics are only written if
/// `log_statistics` is true.
///
/// Only the first call has an effect.
pub fn configure(log_statistics: bool, prefix: &'static str, after: Option<&'static str>) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| StatisticOptions {
        log_statistics,
        prefix,
        after,
    });
}

/// Logs the provided statistic with name `name` and value `value`. At the moment it will log in
/// the format `STATISTIC_PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            let _ = writeln!(stdout(), "{} {name}={value}", options.prefix);
        }
    }
}

/// Some output formats require that a block of statistics is followed by a closing line; this
/// function outputs this closing line **if** it is configured.
pub fn log_statistic_postfix() {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if let (true, Some(after)) = (options.log_statistics, options.after) {
            let _ = writeln!(stdout(), "{after}");
        }
    }
}
