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


use r3bl_term_escape::{Terminal, TerminalConfig};

/// This is the binary under test, which is tested by `tests/test_log_fatal_bin.rs`.
/// There is no way to observe a process terminating from inside that process, so the
/// test spawns this binary using the `assert_cmd` crate and checks its exit code and
/// `stdout`.
///
/// Arguments: `<message> [exit_code]`.
///
/// `stdout` is a pipe when spawned by the test, so interactivity is forced on here.
///
/// See:
/// 1. Test: `tests/test_log_fatal_bin.rs`
/// 2. Binary under test: `log_fatal_test_bin.rs` <- you are here
/// 3. `assert_cmd` : <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>
fn main() {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let msg = args.next().unwrap_or_default();
    let mut config = TerminalConfig::interactive();
    if let Some(exit_code) = args.next().and_then(|it| it.parse::<i32>().ok()) {
        config = config.with_fatal_exit_code(exit_code);
    }

    let terminal = Terminal::new(config);
    terminal.log("before fatal").ok();
    terminal.log_fatal_and_exit(&msg);
}
