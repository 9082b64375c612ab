//! # Paper Configuration
//!
//! Paper roll widths the emulator can lay receipts out on. The interpreter
//! never reads these; they only size the rendered preview.
//!
//! ## Supported Rolls
//!
//! | Paper | Printable | Dots (203 DPI) | Font A columns |
//! |-------|-----------|----------------|----------------|
//! | 58mm  | 48mm      | 384            | 32             |
//! | 80mm  | 72mm      | 576            | 48             |
//! | 112mm | 104mm     | 832            | 69             |
//!
//! ## Usage
//!
//! ```
//! use tillroll::printer::PaperSize;
//!
//! let paper: PaperSize = "58mm".parse()?;
//! assert_eq!(paper.columns(), 32);
//! # Ok::<(), tillroll::TillrollError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TillrollError;

/// Font A character cell width in dots.
pub const FONT_A_WIDTH_DOTS: u16 = 12;

/// Paper roll width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum PaperSize {
    #[serde(rename = "58mm")]
    #[value(name = "58mm")]
    Mm58,
    #[default]
    #[serde(rename = "80mm")]
    #[value(name = "80mm")]
    Mm80,
    #[serde(rename = "112mm")]
    #[value(name = "112mm")]
    Mm112,
}

impl PaperSize {
    /// Every supported size, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mm58, Self::Mm80, Self::Mm112];

    /// Display name (`"80mm"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Mm58 => "58mm",
            Self::Mm80 => "80mm",
            Self::Mm112 => "112mm",
        }
    }

    /// Roll width in millimeters.
    pub fn width_mm(self) -> u16 {
        match self {
            Self::Mm58 => 58,
            Self::Mm80 => 80,
            Self::Mm112 => 112,
        }
    }

    /// Printable width in dots.
    ///
    /// ```text
    /// ├── 4-5mm ──┼────── printable ──────┼── 4-5mm ──┤
    /// │  margin   │    width_dots() dots  │  margin   │
    /// ```
    pub fn width_dots(self) -> u16 {
        match self {
            Self::Mm58 => 384,
            Self::Mm80 => 576,
            Self::Mm112 => 832,
        }
    }

    /// Characters per line in Font A.
    #[inline]
    pub fn columns(self) -> usize {
        (self.width_dots() / FONT_A_WIDTH_DOTS) as usize
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = TillrollError;

    /// Parse `"58mm"`, `"80mm"` or `"112mm"`. The `mm` suffix is optional
    /// and case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let digits = trimmed.strip_suffix("mm").unwrap_or(&trimmed);
        match digits {
            "58" => Ok(Self::Mm58),
            "80" => Ok(Self::Mm80),
            "112" => Ok(Self::Mm112),
            _ => Err(TillrollError::PaperSize(s.to_string())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
