/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! Wall clock used for the `HH:MM:SS ` timestamp on log lines.

use chrono::{Local, NaiveTime};

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S ";

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local time, in whatever time zone the host environment is configured with.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime { Local::now().time() }
}

/// Always returns the same time. Useful for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime { self.0 }
}

/// 24-hour, zero padded, with a trailing space, eg: `"09:05:03 "`.
#[must_use]
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
