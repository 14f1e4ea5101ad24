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


//! Fixed screen, line, title and bell control sequences. These literals are part of the
//! public contract and are reproduced byte for byte.
//!
//! More info:
//! - <https://ascii-table.com/ansi-escape-sequences-vt-100.php>
//! - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h3-Operating-System-Commands>

use std::fmt::{Display, Formatter, Result};

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const CLEAR_SCROLLBACK: &str = "\x1b[3J";
pub const CLEAR_SCREEN_AND_SCROLLBACK: &str = "\x1b[2J\x1b[H\x1b[3J";
pub const CLEAR_LINE: &str = "\x1b[2K";
pub const BELL: &str = "\x07";
pub const OSC_SET_TITLE: &str = "\x1b]0;";

/// Carriage return, then erase to the end of the line. Every timestamped log line starts
/// with this so that the cursor is back in column 0 and any leftover text (eg: from a
/// previous [`crate::Terminal::log_process`]) is gone.
pub const LOG_LINE_PREFIX: &str = "\r\x1b[K";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlSequence {
    /// Clear the visible screen, home the cursor, and drop the scrollback.
    ClearScreenAndScrollback,
    /// Clear the visible screen and home the cursor. Scrollback is kept.
    ClearScreen,
    /// Drop the scrollback only. Visible content stays.
    ClearScrollback,
    ClearLine,
    Beep,
    /// Set the window / tab title. The title is interpolated as is, apply a
    /// [`TitlePolicy`] first if it comes from an untrusted source.
    SetTitle(String),
}

/// What to do with control characters inside a window title.
///
/// A title that contains `BEL` (or `ESC \`) ends the OSC sequence early, and whatever
/// follows is interpreted by the terminal as more escape sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Remove every control character (`ESC`, `BEL`, `CR`, `LF`, ...) from the title.
    #[default]
    StripControlChars,
    /// Interpolate the title without any changes.
    Verbatim,
}

impl TitlePolicy {
    #[must_use]
    pub fn apply(self, title: &str) -> String {
        match self {
            TitlePolicy::StripControlChars => {
                title.chars().filter(|it| !it.is_control()).collect()
            }
            TitlePolicy::Verbatim => title.to_string(),
        }
    }
}

impl ControlSequence {
    #[must_use]
    pub fn set_title(title: &str, policy: TitlePolicy) -> Self {
        ControlSequence::SetTitle(policy.apply(title))
    }
}

impl Display for ControlSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ControlSequence::ClearScreenAndScrollback => f.write_str(CLEAR_SCREEN_AND_SCROLLBACK),
            ControlSequence::ClearScreen              => f.write_str(CLEAR_SCREEN),
            ControlSequence::ClearScrollback          => f.write_str(CLEAR_SCROLLBACK),
            ControlSequence::ClearLine                => f.write_str(CLEAR_LINE),
            ControlSequence::Beep                     => f.write_str(BELL),
            ControlSequence::SetTitle(title)          => write!(f, "{OSC_SET_TITLE}{title}{BELL}"),
        }
    }
}
