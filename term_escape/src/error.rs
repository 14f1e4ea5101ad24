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


//! Errors produced by [`crate::Terminal`] and the code conversions in
//! [`crate::sgr_code`].
//!
//! Skipping a write because the process isn't interactive is **not** an error, see
//! [`crate::WriteOutcome::Skipped`]. Only genuine failures end up here.

use miette::Diagnostic;

pub type TerminalResult<T> = Result<T, TerminalError>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TerminalError {
    /// The OS rejected the write (or flush) to the output device.
    #[error("Failed to write escape sequence to the output device")]
    #[diagnostic(
        code(r3bl_term_escape::io),
        help("Is the output stream closed, eg: a broken pipe?")
    )]
    Io(#[from] std::io::Error),

    /// Another thread panicked while it held the output device lock.
    #[error("Output device lock is poisoned")]
    #[diagnostic(code(r3bl_term_escape::device_lock_poisoned))]
    DeviceLockPoisoned,

    #[error("{0} is not a foreground color code (expected 30..=37)")]
    #[diagnostic(code(r3bl_term_escape::invalid_color_code))]
    InvalidColorCode(i32),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn io_error_converts() {
        let it: TerminalError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(it, TerminalError::Io(_)));
    }

    #[test]
    fn invalid_color_code_message() {
        let it = TerminalError::InvalidColorCode(38);
        assert_eq!(
            it.to_string(),
            "38 is not a foreground color code (expected 30..=37)"
        );
    }
}
