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


//! SGR (select graphic rendition) codes for text attributes and the eight standard
//! foreground colors.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://wiki.bash-hackers.org/scripting/terminalcodes>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

use crate::TerminalError;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Offset from a foreground color code to the matching background color code.
pub const BACKGROUND_OFFSET: i32 = 10;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum AttributeCode {
    #[default]
    Reset,
    Bold,
    SemiBold,
    LightOrUnderline,
    Flash,
    Inverse,
    IntensityNormal,
    UnderlineCancel,
    FlashCancel,
    InverseCancel,
}

/// The eight standard foreground colors. Names follow the classic Linux console
/// vocabulary, so `Brown` is usually rendered as yellow, `Violet` as magenta and `Gray`
/// as white.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum ColorCode {
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Violet,
    Cyan,
    Gray,
}

mod attribute_code_impl {
    use super::AttributeCode;

    impl AttributeCode {
        #[rustfmt::skip]
        #[must_use]
        pub fn code(self) -> i32 {
            match self {
                AttributeCode::Reset            => 0,
                AttributeCode::Bold             => 1,
                AttributeCode::SemiBold         => 2,
                AttributeCode::LightOrUnderline => 4,
                AttributeCode::Flash            => 5,
                AttributeCode::Inverse          => 7,
                AttributeCode::IntensityNormal  => 22,
                AttributeCode::UnderlineCancel  => 24,
                AttributeCode::FlashCancel      => 25,
                AttributeCode::InverseCancel    => 27,
            }
        }
    }
}

mod color_code_impl {
    use super::{BACKGROUND_OFFSET, ColorCode, TerminalError};

    impl ColorCode {
        pub const MIN: i32 = 30;
        pub const MAX: i32 = 37;

        #[rustfmt::skip]
        #[must_use]
        pub fn code(self) -> i32 {
            match self {
                ColorCode::Black  => 30,
                ColorCode::Red    => 31,
                ColorCode::Green  => 32,
                ColorCode::Brown  => 33,
                ColorCode::Blue   => 34,
                ColorCode::Violet => 35,
                ColorCode::Cyan   => 36,
                ColorCode::Gray   => 37,
            }
        }

        #[must_use]
        pub fn background_code(self) -> i32 { self.code() + BACKGROUND_OFFSET }

        /// Returns `true` if `code` lies in the closed foreground range
        /// `[Black, Gray]`.
        #[must_use]
        pub fn is_foreground_code(code: i32) -> bool {
            (ColorCode::MIN..=ColorCode::MAX).contains(&code)
        }
    }

    impl TryFrom<i32> for ColorCode {
        type Error = TerminalError;

        #[rustfmt::skip]
        fn try_from(value: i32) -> Result<Self, Self::Error> {
            match value {
                30 => Ok(ColorCode::Black),
                31 => Ok(ColorCode::Red),
                32 => Ok(ColorCode::Green),
                33 => Ok(ColorCode::Brown),
                34 => Ok(ColorCode::Blue),
                35 => Ok(ColorCode::Violet),
                36 => Ok(ColorCode::Cyan),
                37 => Ok(ColorCode::Gray),
                _ => Err(TerminalError::InvalidColorCode(value)),
            }
        }
    }

    impl From<ColorCode> for i32 {
        fn from(value: ColorCode) -> Self { value.code() }
    }
}

/// Returns the SGR escape sequence `ESC [ <code> m`.
///
/// Any integer is accepted. Terminals silently ignore codes they don't understand, so
/// there is nothing to validate here.
#[must_use]
pub fn escape_sequence(code: i32) -> String { format!("{CSI}{code}{SGR}") }

/// Escape sequence that sets the foreground color. Same as [`escape_sequence`].
#[must_use]
pub fn color(code: i32) -> String { escape_sequence(code) }

/// Escape sequence that sets the background color matching the foreground color `code`,
/// ie: `code + 10`.
///
/// Returns an empty string (a no-op when written) if `code` is outside
/// `[ColorCode::MIN, ColorCode::MAX]`.
#[must_use]
pub fn background(code: i32) -> String {
    if ColorCode::is_foreground_code(code) {
        escape_sequence(code + BACKGROUND_OFFSET)
    } else {
        String::new()
    }
}

impl Display for AttributeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}{}{SGR}", self.code())
    }
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}{}{SGR}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test]
    fn reset() {
        assert_eq!(AttributeCode::Reset.to_string(), "\x1b[0m");
        assert_eq!(AttributeCode::default(), AttributeCode::Reset);
    }

    #[test]
    fn bold() {
        assert_eq!(AttributeCode::Bold.to_string(), "\x1b[1m");
    }

    #[test]
    fn inverse_cancel() {
        assert_eq!(AttributeCode::InverseCancel.to_string(), "\x1b[27m");
    }

    #[test]
    fn attribute_display_matches_escape_sequence() {
        for it in AttributeCode::iter() {
            assert_eq!(it.to_string(), escape_sequence(it.code()));
        }
    }

    #[test]
    fn color_codes_are_contiguous() {
        assert_eq!(ColorCode::COUNT, 8);
        for (offset, it) in ColorCode::iter().enumerate() {
            assert_eq!(it.code(), ColorCode::MIN + i32::try_from(offset).unwrap());
            assert_eq!(ColorCode::try_from(it.code()).unwrap(), it);
        }
    }

    #[test_case(0, "\x1b[0m")]
    #[test_case(42, "\x1b[42m")]
    #[test_case(-1, "\x1b[-1m")]
    #[test_case(1000, "\x1b[1000m")]
    fn escape_sequence_accepts_any_integer(code: i32, expected: &str) {
        assert_eq!(escape_sequence(code), expected);
    }

    #[test]
    fn color_is_escape_sequence() {
        assert_eq!(color(ColorCode::Green.code()), "\x1b[32m");
        assert_eq!(color(ColorCode::Red.code()), ColorCode::Red.to_string());
    }

    #[test_case(29, "")]
    #[test_case(30, "\x1b[40m")]
    #[test_case(33, "\x1b[43m")]
    #[test_case(37, "\x1b[47m")]
    #[test_case(38, "")]
    #[test_case(0, "")]
    #[test_case(i32::MAX, "")]
    fn background_boundaries(code: i32, expected: &str) {
        assert_eq!(background(code), expected);
    }

    #[test]
    fn background_code_offset() {
        assert_eq!(ColorCode::Black.background_code(), 40);
        assert_eq!(ColorCode::Gray.background_code(), 47);
    }

    #[test]
    fn try_from_out_of_range() {
        assert!(matches!(
            ColorCode::try_from(29),
            Err(TerminalError::InvalidColorCode(29))
        ));
    }
}
