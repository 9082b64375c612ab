//! # Text Preview
//!
//! Lays an [`Output`] out as plain text on a fixed-width paper roll, for
//! terminals and logs.
//!
//! - Lines are aligned within the paper's Font A columns.
//! - Double-width text gets half the columns.
//! - QR placeholders become a square of `#` cells, one row per 25 pixels
//!   and two characters per cell so the block looks square.
//! - Bold, underline, strike, rotation and font scale have no plain-text
//!   form and are dropped.

use crate::ir::{Alignment, Output, StyleState, Token};
use crate::printer::PaperSize;

/// Placeholder pixels per preview row.
const QR_PIXELS_PER_ROW: u32 = 25;

/// Render an interpreted script as plain text.
///
/// ```
/// use tillroll::ir::interpret;
/// use tillroll::printer::PaperSize;
/// use tillroll::render::preview::render_text;
///
/// let output = interpret("ESC a 2\nTotal: 9.00");
/// let text = render_text(&output, PaperSize::Mm58);
/// assert_eq!(text, format!("{}Total: 9.00\n", " ".repeat(21)));
/// ```
pub fn render_text(output: &Output, paper: PaperSize) -> String {
    let mut out = String::new();
    let mut pending = String::new();
    let mut pending_style = StyleState::default();

    for token in &output.tokens {
        match token {
            Token::TextRun { content, style } => {
                for piece in content.split_inclusive('\n') {
                    match piece.strip_suffix('\n') {
                        Some(text) => {
                            pending.push_str(text);
                            push_line(&mut out, &pending, style, paper);
                            pending.clear();
                        }
                        None => {
                            pending.push_str(piece);
                            pending_style = *style;
                        }
                    }
                }
            }
            Token::QrPlaceholder { size, style } => {
                if !pending.is_empty() {
                    push_line(&mut out, &pending, &pending_style, paper);
                    pending.clear();
                }
                let side = (size / QR_PIXELS_PER_ROW).max(1) as usize;
                let row = "#".repeat(side * 2);
                for _ in 0..side {
                    push_line(&mut out, &row, style, paper);
                }
            }
        }
    }

    if !pending.is_empty() {
        push_line(&mut out, &pending, &pending_style, paper);
    }

    out
}

/// Append one aligned line, trailing whitespace removed.
fn push_line(out: &mut String, text: &str, style: &StyleState, paper: PaperSize) {
    let columns = if style.is_double_width() {
        paper.columns() / 2
    } else {
        paper.columns()
    };

    let text = text.trim_end();
    if !text.is_empty() {
        let pad = columns.saturating_sub(text.chars().count());
        let indent = match style.alignment {
            Alignment::Left => 0,
            Alignment::Center => pad / 2,
            Alignment::Right => pad,
        };
        out.push_str(&" ".repeat(indent));
        out.push_str(text);
    }
    out.push('\n');
}
