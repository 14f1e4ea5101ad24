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


//! Formatting for the timestamped log lines written by [`crate::Terminal::log`] and
//! friends. Every line has the same shape:
//!
//! ```text
//! "\r\x1b[K" + violet + "HH:MM:SS " + style + msg + suffix
//! ```
//!
//! | kind      | style          | suffix                      |
//! |-----------|----------------|-----------------------------|
//! | `Plain`   | reset          | reset, newline              |
//! | `Info`    | green          | reset, newline              |
//! | `Error`   | red, bold      | reset, newline              |
//! | `Process` | gray, bold     | reset (no newline)          |
//! | `Fatal`   | red, bold      | cyan `" DIE"`, reset, newline |

use chrono::NaiveTime;

use crate::{AttributeCode, ColorCode, LOG_LINE_PREFIX, format_timestamp};

pub const FATAL_MARKER: &str = " DIE";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogKind {
    Plain,
    Info,
    Error,
    /// Progress update without a trailing newline, so the next log line overwrites it.
    Process,
    Fatal,
}

impl LogKind {
    #[must_use]
    pub fn style(self) -> String {
        match self {
            LogKind::Plain => AttributeCode::Reset.to_string(),
            LogKind::Info => ColorCode::Green.to_string(),
            LogKind::Error | LogKind::Fatal => {
                format!("{}{}", ColorCode::Red, AttributeCode::Bold)
            }
            LogKind::Process => format!("{}{}", ColorCode::Gray, AttributeCode::Bold),
        }
    }

    #[must_use]
    pub fn ends_with_newline(self) -> bool { !matches!(self, LogKind::Process) }
}

/// Compose a full log line. `line_terminator` is only appended when
/// [`LogKind::ends_with_newline`] is `true`.
#[must_use]
pub fn format_log_line(
    kind: LogKind,
    time: NaiveTime,
    msg: &str,
    line_terminator: &str,
) -> String {
    let mut acc = String::with_capacity(msg.len() + 48);
    acc.push_str(LOG_LINE_PREFIX);
    acc.push_str(&ColorCode::Violet.to_string());
    acc.push_str(&format_timestamp(time));
    acc.push_str(&kind.style());
    acc.push_str(msg);
    if kind == LogKind::Fatal {
        acc.push_str(&ColorCode::Cyan.to_string());
        acc.push_str(FATAL_MARKER);
    }
    acc.push_str(&AttributeCode::Reset.to_string());
    if kind.ends_with_newline() {
        acc.push_str(line_terminator);
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn noon() -> NaiveTime { NaiveTime::from_hms_opt(12, 0, 7).unwrap() }

    #[test]
    fn plain() {
        assert_eq!(
            format_log_line(LogKind::Plain, noon(), "hi", "\n"),
            "\r\x1b[K\x1b[35m12:00:07 \x1b[0mhi\x1b[0m\n"
        );
    }

    #[test]
    fn info() {
        assert_eq!(
            format_log_line(LogKind::Info, noon(), "hi", "\n"),
            "\r\x1b[K\x1b[35m12:00:07 \x1b[32mhi\x1b[0m\n"
        );
    }

    #[test]
    fn error() {
        assert_eq!(
            format_log_line(LogKind::Error, noon(), "hi", "\r\n"),
            "\r\x1b[K\x1b[35m12:00:07 \x1b[31m\x1b[1mhi\x1b[0m\r\n"
        );
    }

    #[test]
    fn process_has_no_newline() {
        let it = format_log_line(LogKind::Process, noon(), "50%", "\n");
        assert_eq!(it, "\r\x1b[K\x1b[35m12:00:07 \x1b[37m\x1b[1m50%\x1b[0m");
        assert!(it.starts_with(LOG_LINE_PREFIX));
    }

    #[test]
    fn fatal_appends_cyan_die() {
        assert_eq!(
            format_log_line(LogKind::Fatal, noon(), "boom", "\n"),
            "\r\x1b[K\x1b[35m12:00:07 \x1b[31m\x1b[1mboom\x1b[36m DIE\x1b[0m\n"
        );
    }
}
