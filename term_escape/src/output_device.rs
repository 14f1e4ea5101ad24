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


use std::{io::Write,
          sync::{Arc, MutexGuard}};

use crate::{TerminalError, TerminalResult};

pub type StdMutex<T> = std::sync::Mutex<T>;
pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// This struct represents an output device that escape sequences are written to.
/// - It is safe to clone, clones share the same underlying writer.
/// - To write to it, call [`Self::lock()`].
///
/// Tests use [`Self::new_mock()`] with an in-memory writer (eg: `StdoutMock` from the
/// `r3bl_term_escape_test_fixtures` crate) to capture exactly what would have been sent
/// to the terminal.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_mock(writer: impl Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: true,
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. Don't call this again while the returned
    /// guard is alive in the same scope, it will deadlock.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::DeviceLockPoisoned`] if a thread panicked while holding
    /// the lock.
    pub fn lock(&self) -> TerminalResult<MutexGuard<'_, SendRawTerminal>> {
        self.resource
            .lock()
            .map_err(|_| TerminalError::DeviceLockPoisoned)
    }

    /// Write all of `payload` and flush, so nothing is left sitting in a buffer (eg: a
    /// progress line without a trailing newline).
    ///
    /// # Errors
    ///
    /// Any [`std::io::Error`] from the writer, or a poisoned lock.
    pub fn write_and_flush(&self, payload: &str) -> TerminalResult<()> {
        let mut guard = self.lock()?;
        let mut_ref: LockedOutputDevice<'_> = &mut *guard;
        mut_ref.write_all(payload.as_bytes())?;
        mut_ref.flush()?;
        Ok(())
    }
}
