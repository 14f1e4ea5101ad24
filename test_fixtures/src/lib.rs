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


//! Test fixtures for [`r3bl_term_escape`](https://docs.rs/r3bl_term_escape). Pass a
//! [`StdoutMock`] to `OutputDevice::new_mock()` and then inspect exactly which bytes
//! would have reached the terminal.

// Attach sources.
pub mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
