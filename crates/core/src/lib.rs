// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pos-core: Stateless helpers shared by the pos desktop shell

pub mod clock;
pub mod html;
pub mod id;
pub mod random;
pub mod size_fmt;
pub mod time_fmt;
pub mod value;

pub use clock::{Clock, FakeClock, SystemClock};
pub use html::{escape_attr, escape_html, highlight};
pub use id::{generate_id, IdGen, PrefixedIdGen, UuidIdGen};
pub use random::random_between;
pub use size_fmt::format_file_size;
pub use time_fmt::{format_time, format_time_now, format_uptime, format_uptime_duration};
pub use value::{deep_copy, merge, merge_maps, ValueError};
