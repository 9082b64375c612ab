//! # Command Classification
//!
//! Turns a tokenized [`Line`] into one variant of the closed [`Command`] set.
//!
//! ## Command Reference
//!
//! | Line | Command | Effect |
//! |------|---------|--------|
//! | `LF` | [`Command::LineFeed`] | Empty text run |
//! | `ESC @` | [`Command::Init`] | Reset style, log |
//! | `ESC ! n` | [`Command::PrintMode`] | Bold / size bits |
//! | `ESC E x` | [`Command::Emphasis`] | Bold on/off |
//! | `ESC a x` | [`Command::Align`] | Left / center / right |
//! | `ESC - x` | [`Command::Underline`] | Underline on/off |
//! | `ESC G x` | [`Command::DoubleStrike`] | Strike on/off |
//! | `ESC V x` | [`Command::Rotate`] | 90° rotation on/off |
//! | `ESC p ...` | [`Command::DrawerKick`] | Log only |
//! | `GS ! n` | [`Command::CharSize`] | Font scale n/2+1 |
//! | `GS V ...` | [`Command::Cut`] | Cut marker, log |
//! | `GS ( k _ s` | [`Command::QrCode`] | QR placeholder, log |
//!
//! Anything else under `ESC` or `GS` is [`Command::Ignored`]. Lines that do
//! not start with a keyword are [`Command::Text`] or [`Command::Blank`].
//!
//! Toggle arguments are compared as strings: only `"1"` switches a flag on,
//! so `ESC - 01` turns underline off.

use super::tokenize::{Keyword, Line};
use crate::ir::Alignment;

/// Text emitted for a paper cut.
pub const CUT_MARKER: &str = "--- Cut Paper ---\n";

/// QR placeholder size (pixels) for `GS ( k _ 3`.
pub const QR_SIZE_SMALL: u32 = 100;

/// QR placeholder size (pixels) for every other `GS ( k` size argument.
pub const QR_SIZE_LARGE: u32 = 200;

/// A classified script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `LF`
    LineFeed,
    /// `ESC @`
    Init,
    /// `ESC ! n` with the parsed mode value.
    PrintMode(i64),
    /// `ESC E x`
    Emphasis(bool),
    /// `ESC a x`
    Align(Alignment),
    /// `ESC - x`
    Underline(bool),
    /// `ESC G x`
    DoubleStrike(bool),
    /// `ESC V x`
    Rotate(bool),
    /// `ESC p`
    DrawerKick,
    /// `GS ! n` with the parsed size value.
    CharSize(i64),
    /// `GS V`
    Cut,
    /// `GS ( k`, with the placeholder size in pixels.
    QrCode { size: u32 },
    /// Non-blank line without a keyword.
    Text(&'a str),
    /// Blank line without a keyword.
    Blank,
    /// Unknown or incomplete `ESC`/`GS` sub-command.
    Ignored,
}

impl<'a> Command<'a> {
    /// Classify a tokenized line.
    pub fn from_line(line: &Line<'a>) -> Self {
        match line.keyword {
            Some(Keyword::Lf) => Self::LineFeed,
            Some(Keyword::Esc) => Self::esc(line),
            Some(Keyword::Gs) => Self::gs(line),
            None if line.is_blank() => Self::Blank,
            None => Self::Text(line.raw),
        }
    }

    fn esc(line: &Line<'a>) -> Self {
        let value = line.arg(1);
        match line.arg(0) {
            Some("@") => Self::Init,
            Some("!") => Self::PrintMode(parse_int(value)),
            Some("E") => Self::Emphasis(is_on(value)),
            Some("a") => Self::Align(match value {
                Some("0") => Alignment::Left,
                Some("1") => Alignment::Center,
                _ => Alignment::Right,
            }),
            Some("-") => Self::Underline(is_on(value)),
            Some("G") => Self::DoubleStrike(is_on(value)),
            Some("V") => Self::Rotate(is_on(value)),
            Some("p") => Self::DrawerKick,
            _ => Self::Ignored,
        }
    }

    fn gs(line: &Line<'a>) -> Self {
        match line.arg(0) {
            Some("!") => Self::CharSize(parse_int(line.arg(1))),
            Some("V") => Self::Cut,
            // GS ( k <model> <size>
            Some("(") if line.arg(1) == Some("k") => Self::QrCode {
                size: if line.arg(3) == Some("3") {
                    QR_SIZE_SMALL
                } else {
                    QR_SIZE_LARGE
                },
            },
            _ => Self::Ignored,
        }
    }
}

#[inline]
fn is_on(value: Option<&str>) -> bool {
    value == Some("1")
}

/// Parse a decimal integer argument leniently.
///
/// Accepts an optional sign followed by digits and stops at the first
/// non-digit, so `"24"`, `"024"` and `"24px"` all give 24. A missing
/// argument or one without leading digits gives 0. Values out of range
/// saturate.
///
/// ```
/// use tillroll::protocol::commands::parse_int;
///
/// assert_eq!(parse_int(Some("24")), 24);
/// assert_eq!(parse_int(Some("-8")), -8);
/// assert_eq!(parse_int(Some("bold")), 0);
/// assert_eq!(parse_int(None), 0);
/// ```
pub fn parse_int(value: Option<&str>) -> i64 {
    let Some(s) = value else {
        return 0;
    };

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}
