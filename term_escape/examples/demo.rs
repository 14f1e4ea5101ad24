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


use std::{thread::sleep, time::Duration};

use r3bl_term_escape::{AttributeCode, ColorCode, Terminal, TerminalConfig, background};
use strum::IntoEnumIterator;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let terminal = Terminal::new(TerminalConfig::from_env());

    terminal.set_title("r3bl_term_escape demo")?;
    terminal.clear_screen()?;

    // Foreground and background for every color.
    for color in ColorCode::iter() {
        terminal.write_colored("", color)?;
        terminal.write(&format!("{color:?} "))?;
        terminal.write(&background(color.code()))?;
        terminal.write(&format!(" {color:?} "))?;
        terminal.write_line(&AttributeCode::Reset.to_string())?;
    }

    // Attributes.
    for attribute in [
        AttributeCode::Bold,
        AttributeCode::SemiBold,
        AttributeCode::LightOrUnderline,
        AttributeCode::Flash,
        AttributeCode::Inverse,
    ] {
        terminal.write(&attribute.to_string())?;
        terminal.write(&format!("{attribute:?}"))?;
        terminal.write_line(&AttributeCode::Reset.to_string())?;
    }

    // Progress that overwrites itself in place.
    terminal.log("starting")?;
    for percent in (0..=100).step_by(10) {
        terminal.log_process(&format!("working {percent}%"))?;
        sleep(Duration::from_millis(100));
    }
    terminal.log_info("finished")?;
    terminal.log_error("this is what an error looks like")?;
    terminal.beep()?;

    Ok(())
}
