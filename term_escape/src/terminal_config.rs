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


use crate::{Interactivity, TitlePolicy, global_interactivity};

/// Same as the platform line terminator used by `writeln!`-style output on the host.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Exit code used by [`crate::FatalLogged::exit`] unless overridden.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Everything a [`crate::Terminal`] needs to know about its environment. It is read
/// only once the terminal is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    pub interactivity: Interactivity,
    pub title_policy: TitlePolicy,
    pub line_terminator: &'static str,
    pub fatal_exit_code: i32,
}

impl Default for TerminalConfig {
    fn default() -> Self { Self::from_env() }
}

impl TerminalConfig {
    /// Interactivity comes from [`global_interactivity::detect`], which looks at
    /// `stdout`, `TERM` and `IGNORE_IS_TERMINAL` once per process.
    #[must_use]
    pub fn from_env() -> Self { Self::new(global_interactivity::detect()) }

    #[must_use]
    pub fn new(interactivity: Interactivity) -> Self {
        Self {
            interactivity,
            title_policy: TitlePolicy::default(),
            line_terminator: LINE_TERMINATOR,
            fatal_exit_code: FATAL_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn interactive() -> Self { Self::new(Interactivity::Interactive) }

    #[must_use]
    pub fn non_interactive() -> Self { Self::new(Interactivity::NonInteractive) }

    #[must_use]
    pub fn with_interactivity(mut self, interactivity: Interactivity) -> Self {
        self.interactivity = interactivity;
        self
    }

    #[must_use]
    pub fn with_title_policy(mut self, title_policy: TitlePolicy) -> Self {
        self.title_policy = title_policy;
        self
    }

    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: &'static str) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    #[must_use]
    pub fn with_fatal_exit_code(mut self, fatal_exit_code: i32) -> Self {
        self.fatal_exit_code = fatal_exit_code;
        self
    }
}
