// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock-time and uptime formatting.

use chrono::Timelike;
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format the time of day as zero-padded `HH:MM:SS` (24-hour clock).
pub fn format_time<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Current local time as `HH:MM:SS`.
pub fn format_time_now() -> String {
    format_time(&chrono::Local::now())
}

/// Format seconds of uptime using the two coarsest units: `"2d 3h"`,
/// `"4h 0m"`, `"12m"`.
///
/// Anything under a minute is `"0m"`; seconds are never shown.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / DAY;
    let hours = (secs % DAY) / HOUR;
    let minutes = (secs % HOUR) / MINUTE;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Convenience wrapper around [`format_uptime`].
pub fn format_uptime_duration(uptime: Duration) -> String {
    format_uptime(uptime.as_secs())
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
