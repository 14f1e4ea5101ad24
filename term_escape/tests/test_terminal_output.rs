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


use std::sync::Arc;

use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use r3bl_term_escape::{AttributeCode, ColorCode, FixedClock, Interactivity, OutputDevice,
                       Terminal, TerminalConfig, TitlePolicy, WriteOutcome, background,
                       escape_sequence};
use r3bl_term_escape_test_fixtures::StdoutMock;

fn terminal_with_mock(interactivity: Interactivity) -> (Terminal, StdoutMock) {
    let stdout_mock = StdoutMock::new();
    let terminal = Terminal::new_with(
        OutputDevice::new_mock(stdout_mock.clone()),
        TerminalConfig::new(interactivity)
            .with_line_terminator("\n")
            .with_title_policy(TitlePolicy::Verbatim),
        Arc::new(FixedClock(NaiveTime::from_hms_opt(21, 30, 0).unwrap())),
    );
    (terminal, stdout_mock)
}

#[test]
fn progress_session_renders_on_one_line() {
    let (terminal, stdout_mock) = terminal_with_mock(Interactivity::Interactive);

    terminal.clear_screen().unwrap();
    terminal.set_title("build").unwrap();
    for step in ["1/3", "2/3", "3/3"] {
        terminal.log_process(step).unwrap();
    }
    terminal.log_info("done").unwrap();

    let raw = stdout_mock.get_copy_of_buffer_as_string();
    assert!(raw.starts_with("\x1b[2J\x1b[H\x1b]0;build\x07"));
    // The progress lines and the final line share one line of output.
    assert_eq!(raw.matches('\n').count(), 1);
    assert_eq!(raw.matches("\r\x1b[K").count(), 4);
    assert!(raw.ends_with("\x1b[35m21:30:00 \x1b[32mdone\x1b[0m\n"));
}

#[test]
fn styled_prompt() {
    let (terminal, stdout_mock) = terminal_with_mock(Interactivity::Interactive);

    terminal
        .write(&format!(
            "{}{}",
            background(ColorCode::Blue.code()),
            AttributeCode::Bold
        ))
        .unwrap();
    terminal.write_colored("prompt", ColorCode::Brown).unwrap();
    terminal.write_line(&escape_sequence(0)).unwrap();

    assert_eq!(
        stdout_mock.get_copy_of_buffer_as_string(),
        "\x1b[44m\x1b[1mprompt\x1b[33m\x1b[0m\n"
    );
}

#[test]
fn redirected_output_is_silent() {
    let (terminal, stdout_mock) = terminal_with_mock(Interactivity::NonInteractive);

    assert_eq!(terminal.log_error("nobody sees this").unwrap(), WriteOutcome::Skipped);
    assert!(!terminal.beep().unwrap().is_written());
    let fatal = terminal.log_fatal("nor this");
    assert_eq!(fatal.write_result.unwrap(), WriteOutcome::Skipped);
    assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
}
