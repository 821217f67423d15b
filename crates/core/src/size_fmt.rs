// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable byte sizes.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Format a byte count with 1024-based units, rounded to two decimals.
///
/// Trailing zeros are dropped (`"1.5 KB"`, `"2 KB"`). Sizes of a terabyte
/// and up stay in `GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes / scale >= STEP {
        scale *= STEP;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[unit])
}

#[cfg(test)]
#[path = "size_fmt_tests.rs"]
mod tests;
