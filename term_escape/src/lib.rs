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


//! # r3bl_term_escape
//!
//! Emit raw ANSI / VT100 escape sequences to an interactive terminal: foreground and
//! background colors, text attributes, screen and scrollback clearing, the window title,
//! the bell, and a handful of timestamped log line helpers.
//!
//! There is no capability negotiation here. The only question that is asked of the
//! environment is "is this process attached to an interactive terminal?" (see
//! [`global_interactivity`]). When the answer is no, every write is skipped and reported
//! as [`WriteOutcome::Skipped`].
//!
//! # Example
//!
//! ```no_run
//! use r3bl_term_escape::{ColorCode, Terminal, TerminalConfig, background};
//!
//! let terminal = Terminal::new(TerminalConfig::from_env());
//! terminal.clear_screen()?;
//! terminal.write_colored("prompt> ", ColorCode::Green)?;
//! terminal.write_line(&background(ColorCode::Blue.code()))?;
//! terminal.log_info("ready")?;
//! # Ok::<(), r3bl_term_escape::TerminalError>(())
//! ```
//!
//! More info:
//! - <https://manpages.ubuntu.com/manpages/trusty/man4/console_codes.4.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clock;
pub mod control_sequence;
pub mod detect_interactivity;
pub mod error;
pub mod log_line;
pub mod output_device;
pub mod sgr_code;
pub mod terminal;
pub mod terminal_config;

// Re-export.
pub use clock::*;
pub use control_sequence::*;
pub use detect_interactivity::*;
pub use error::*;
pub use log_line::*;
pub use output_device::*;
pub use sgr_code::*;
pub use terminal::*;
pub use terminal_config::*;
