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


//! [`Terminal`] writes escape sequences and timestamped log lines to an
//! [`OutputDevice`], but only when the configured [`crate::Interactivity`] says the
//! process is attached to a terminal.
//!
//! Every write-family method returns [`TerminalResult<WriteOutcome>`]:
//! - `Ok(WriteOutcome::Written)`: the full string was written and flushed.
//! - `Ok(WriteOutcome::Skipped)`: not interactive, zero bytes were written.
//! - `Err(TerminalError::Io(..))`: the OS rejected the write.

use std::sync::Arc;

use crate::{Clock, ControlSequence, LocalClock, LogKind, OutputDevice, TerminalConfig,
            TerminalResult, color, format_log_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

impl WriteOutcome {
    #[must_use]
    pub fn is_written(self) -> bool { matches!(self, WriteOutcome::Written) }
}

#[derive(Clone)]
pub struct Terminal {
    output_device: OutputDevice,
    config: TerminalConfig,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("output_device", &self.output_device)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Terminal {
    fn default() -> Self { Self::new(TerminalConfig::default()) }
}

impl Terminal {
    /// Writes to `stdout` and stamps log lines with local time.
    #[must_use]
    pub fn new(config: TerminalConfig) -> Self {
        Self::new_with(OutputDevice::new_stdout(), config, Arc::new(LocalClock))
    }

    #[must_use]
    pub fn new_with(
        output_device: OutputDevice,
        config: TerminalConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            output_device,
            config,
            clock,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TerminalConfig { &self.config }
}

/// Output primitives.
impl Terminal {
    /// Emit `text` verbatim.
    ///
    /// # Errors
    ///
    /// [`crate::TerminalError::Io`] if the write or flush fails.
    pub fn write(&self, text: &str) -> TerminalResult<WriteOutcome> {
        if !self.config.interactivity.is_interactive() {
            tracing::trace!(bytes = text.len(), "write skipped, not interactive");
            return Ok(WriteOutcome::Skipped);
        }
        self.output_device.write_and_flush(text)?;
        Ok(WriteOutcome::Written)
    }

    /// Emit `text` followed by the configured line terminator. Pass `""` for an empty
    /// line.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn write_line(&self, text: &str) -> TerminalResult<WriteOutcome> {
        self.write(&format!("{text}{}", self.config.line_terminator))
    }

    /// Emit `text` and **then** the color escape sequence. The color applies to
    /// whatever is written next, `text` itself is not wrapped.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn write_colored(
        &self,
        text: &str,
        color_code: impl Into<i32>,
    ) -> TerminalResult<WriteOutcome> {
        self.write(&format!("{text}{}", color(color_code.into())))
    }

    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn write_control(&self, sequence: &ControlSequence) -> TerminalResult<WriteOutcome> {
        self.write(&sequence.to_string())
    }
}

/// Screen, line, title and bell.
impl Terminal {
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn clear_screen_and_scrollback(&self) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::ClearScreenAndScrollback)
    }

    /// The cleared content can still be reached by scrolling up.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn clear_screen(&self) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::ClearScreen)
    }

    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn clear_scrollback(&self) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::ClearScrollback)
    }

    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn clear_line(&self) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::ClearLine)
    }

    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn beep(&self) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::Beep)
    }

    /// Most shells restore the previous title once the process exits. Control
    /// characters in `title` are handled per [`TerminalConfig::title_policy`].
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn set_title(&self, title: &str) -> TerminalResult<WriteOutcome> {
        self.write_control(&ControlSequence::set_title(title, self.config.title_policy))
    }
}

/// Timestamped log lines, see [`crate::log_line`] for the exact format.
impl Terminal {
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn log_line(&self, kind: LogKind, msg: &str) -> TerminalResult<WriteOutcome> {
        let line = format_log_line(kind, self.clock.now(), msg, self.config.line_terminator);
        self.write(&line)
    }

    /// Violet time, plain message.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn log(&self, msg: &str) -> TerminalResult<WriteOutcome> {
        self.log_line(LogKind::Plain, msg)
    }

    /// Violet time, green message.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn log_info(&self, msg: &str) -> TerminalResult<WriteOutcome> {
        self.log_line(LogKind::Info, msg)
    }

    /// Violet time, red bold message.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn log_error(&self, msg: &str) -> TerminalResult<WriteOutcome> {
        self.log_line(LogKind::Error, msg)
    }

    /// Violet time, gray bold message, no newline. The next log line (of any kind)
    /// overwrites it in place, which is what makes it useful for progress updates.
    ///
    /// # Errors
    ///
    /// See [`Self::write`].
    pub fn log_process(&self, msg: &str) -> TerminalResult<WriteOutcome> {
        self.log_line(LogKind::Process, msg)
    }

    /// Violet time, red bold message, cyan `" DIE"`. Nothing is terminated here, the
    /// caller decides what to do with the returned [`FatalLogged`].
    pub fn log_fatal(&self, msg: &str) -> FatalLogged {
        let write_result = self.log_line(LogKind::Fatal, msg);
        if let Err(error) = &write_result {
            tracing::warn!(%error, "fatal log line could not be written");
        }
        FatalLogged {
            write_result,
            exit_code: self.config.fatal_exit_code,
        }
    }

    /// Write the fatal line and terminate the process right away, whether or not the
    /// write worked.
    pub fn log_fatal_and_exit(&self, msg: &str) -> ! { self.log_fatal(msg).exit() }
}

/// Returned by [`Terminal::log_fatal`]. Holds the result of writing the fatal line and
/// the exit code the process should terminate with.
#[must_use = "a fatal log line expects the process to terminate, call `exit()`"]
#[derive(Debug)]
pub struct FatalLogged {
    pub write_result: TerminalResult<WriteOutcome>,
    pub exit_code: i32,
}

impl FatalLogged {
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn exit(self) -> ! {
        tracing::debug!(exit_code = self.exit_code, "terminating after fatal log line");
        std::process::exit(self.exit_code)
    }
}
