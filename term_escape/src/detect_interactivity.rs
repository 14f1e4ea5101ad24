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


use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

use once_cell::sync::OnceCell;

pub const ENV_TERM: &str = "TERM";
pub const ENV_IGNORE_IS_TERMINAL: &str = "IGNORE_IS_TERMINAL";

/// Is the process attached to a terminal that interprets escape sequences, as opposed to
/// eg: being redirected to a file or piped into another program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    Interactive,
    NonInteractive,
}

impl Interactivity {
    #[must_use]
    pub fn is_interactive(self) -> bool { matches!(self, Interactivity::Interactive) }
}

impl From<bool> for Interactivity {
    fn from(value: bool) -> Self {
        if value {
            Interactivity::Interactive
        } else {
            Interactivity::NonInteractive
        }
    }
}

/// Global variable which can be used to:
/// 1. Override the interactivity of the process.
/// 2. Memoize the result of [`examine_env_vars_to_determine_interactivity`], which is
///    computed once and then never changes for the lifetime of the process.
///
/// Prefer passing an [`Interactivity`] into [`crate::TerminalConfig`] directly. This
/// global only supplies the default.
pub mod global_interactivity {
    use super::{AtomicI8, Interactivity, OnceCell, Ordering, Stream,
                examine_env_vars_to_determine_interactivity};

    static OVERRIDE_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static DETECTED_GLOBAL: OnceCell<Interactivity> = OnceCell::new();
    const NOT_SET_VALUE: i8 = -1;

    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, the memoized result of examining `stdout` and the environment is
    ///   returned. This is only computed on the first call.
    #[must_use]
    pub fn detect() -> Interactivity {
        match try_get_override() {
            Ok(it) => it,
            Err(()) => *DETECTED_GLOBAL.get_or_init(|| {
                let it = examine_env_vars_to_determine_interactivity(Stream::Stdout);
                tracing::debug!(interactivity = ?it, "detected terminal interactivity");
                it
            }),
        }
    }

    /// Override the interactivity. Regardless of the environment, the value you set here
    /// will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// The [serial_test](https://crates.io/crates/serial_test) crate is used to test this
    /// function. In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: Interactivity) {
        tracing::debug!(interactivity = ?value, "interactivity override set");
        OVERRIDE_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() { OVERRIDE_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst); }

    /// Get the interactivity override value.
    /// - If the value has been set using [`set_override`], then that value will be
    ///   returned.
    /// - Otherwise, an error will be returned.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` when no override is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<Interactivity, ()> {
        Interactivity::try_from(OVERRIDE_GLOBAL.load(Ordering::SeqCst))
    }
}

/// Determine interactivity by looking at `stream` and the process environment.
#[must_use]
pub fn examine_env_vars_to_determine_interactivity(stream: Stream) -> Interactivity {
    examine_env_to_determine_interactivity(is_a_tty(stream), |key| env::var(key).ok())
}

/// Same as [`examine_env_vars_to_determine_interactivity`], but the tty check and the
/// environment lookup are provided by the caller.
///
/// 1. `TERM=dumb` can't interpret escape sequences, so it is never interactive.
/// 2. `IGNORE_IS_TERMINAL` set to anything but `0` forces interactive (eg: for CI logs
///    that render ANSI).
/// 3. Otherwise the stream has to be a tty.
pub fn examine_env_to_determine_interactivity(
    stream_is_tty: bool,
    env_var: impl Fn(&str) -> Option<String>,
) -> Interactivity {
    if env_var(ENV_TERM).as_deref() == Some("dumb") {
        return Interactivity::NonInteractive;
    }

    if env_var(ENV_IGNORE_IS_TERMINAL).is_some_and(|it| it != "0") {
        return Interactivity::Interactive;
    }

    Interactivity::from(stream_is_tty)
}

/// The stream to check for interactivity.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// These trait implementations allow us to use `Interactivity` and `i8`
/// interchangeably, so it fits in an atomic.
mod convert_between_interactivity_and_i8 {
    impl TryFrom<i8> for super::Interactivity {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::Interactivity::Interactive),
                2 => Ok(super::Interactivity::NonInteractive),
                _ => Err(()),
            }
        }
    }

    impl From<super::Interactivity> for i8 {
        #[rustfmt::skip]
        fn from(value: super::Interactivity) -> Self {
            match value {
                super::Interactivity::Interactive    => 1,
                super::Interactivity::NonInteractive => 2,
            }
        }
    }
}

#[must_use]
pub fn is_a_tty(stream: Stream) -> bool {
    use is_terminal::IsTerminal;
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn tty_is_interactive() {
        assert_eq!(
            examine_env_to_determine_interactivity(true, env_of(&[("TERM", "xterm")])),
            Interactivity::Interactive
        );
    }

    #[test]
    fn redirected_is_not_interactive() {
        assert_eq!(
            examine_env_to_determine_interactivity(false, env_of(&[])),
            Interactivity::NonInteractive
        );
    }

    #[test]
    fn dumb_term_wins_over_tty() {
        assert_eq!(
            examine_env_to_determine_interactivity(
                true,
                env_of(&[("TERM", "dumb"), ("IGNORE_IS_TERMINAL", "1")])
            ),
            Interactivity::NonInteractive
        );
    }

    #[test]
    fn ignore_is_terminal() {
        assert_eq!(
            examine_env_to_determine_interactivity(
                false,
                env_of(&[("IGNORE_IS_TERMINAL", "1")])
            ),
            Interactivity::Interactive
        );
        assert_eq!(
            examine_env_to_determine_interactivity(
                false,
                env_of(&[("IGNORE_IS_TERMINAL", "0")])
            ),
            Interactivity::NonInteractive
        );
    }

    #[test]
    #[serial]
    fn cycle_1() {
        global_interactivity::set_override(Interactivity::Interactive);
        assert_eq!(
            global_interactivity::try_get_override(),
            Ok(Interactivity::Interactive)
        );
        assert_eq!(global_interactivity::detect(), Interactivity::Interactive);
        global_interactivity::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_2() {
        global_interactivity::set_override(Interactivity::NonInteractive);
        assert_eq!(
            global_interactivity::try_get_override(),
            Ok(Interactivity::NonInteractive)
        );
        assert_eq!(global_interactivity::detect(), Interactivity::NonInteractive);
        global_interactivity::clear_override();
    }

    #[test]
    #[serial]
    fn cycle_3() {
        global_interactivity::clear_override();
        assert_eq!(global_interactivity::try_get_override(), Err(()));
        // Memoized, so repeated calls agree.
        assert_eq!(global_interactivity::detect(), global_interactivity::detect());
    }
}
