// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Formatting commands: uptime, size, escape, id, time

use anyhow::Result;
use pos_core::{IdGen, UuidIdGen};
use serde_json::json;

use crate::output::{print_value, OutputFormat};

pub fn uptime(seconds: u64, format: OutputFormat) -> Result<()> {
    let text = pos_core::format_uptime(seconds);
    let json = json!({ "seconds": seconds, "uptime": text });
    print_value(format, &text, &json)
}

pub fn size(bytes: u64, format: OutputFormat) -> Result<()> {
    let text = pos_core::format_file_size(bytes);
    let json = json!({ "bytes": bytes, "size": text });
    print_value(format, &text, &json)
}

pub fn escape(text: &str, attr: bool, format: OutputFormat) -> Result<()> {
    let escaped = if attr {
        pos_core::escape_attr(text)
    } else {
        pos_core::escape_html(text)
    };
    print_value(format, &escaped, &escaped)
}

pub fn id(prefix: Option<String>, uuid: bool, format: OutputFormat) -> Result<()> {
    let id = if uuid {
        UuidIdGen.next()
    } else {
        let prefix = prefix
            .or_else(crate::env::id_prefix)
            .unwrap_or_else(|| pos_core::id::DEFAULT_PREFIX.to_string());
        pos_core::generate_id(&prefix)
    };
    print_value(format, &id, &id)
}

pub fn time(format: OutputFormat) -> Result<()> {
    let now = pos_core::format_time_now();
    print_value(format, &now, &now)
}
