// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Filter used when `POS_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax) from `POS_LOG`.
pub fn log_filter() -> Option<String> {
    std::env::var("POS_LOG").ok().filter(|s| !s.is_empty())
}

/// Default prefix for `pos id` from `POS_ID_PREFIX`.
pub fn id_prefix() -> Option<String> {
    std::env::var("POS_ID_PREFIX")
        .ok()
        .filter(|s| !s.is_empty())
}
