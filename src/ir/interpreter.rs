//! # Interpreter
//!
//! Walks a script line by line, threading one [`StyleState`] value through
//! [`step`] and collecting tokens and actions into an [`Output`].
//!
//! Interpretation is total: unknown commands are skipped, malformed numbers
//! read as zero, and no line stops the lines after it.

use tracing::{debug, trace};

use super::ops::{Action, Output, Token};
use super::style::StyleState;
use crate::protocol::commands::{CUT_MARKER, Command};
use crate::protocol::tokenize;

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Style for the following lines.
    pub style: StyleState,
    /// Token emitted by this command.
    pub token: Option<Token>,
    /// Action logged by this command.
    pub action: Option<Action>,
}

impl Step {
    fn style(style: StyleState) -> Self {
        Self {
            style,
            token: None,
            action: None,
        }
    }

    fn token(style: StyleState, token: Token) -> Self {
        Self {
            token: Some(token),
            ..Self::style(style)
        }
    }

    fn action(style: StyleState, action: Action) -> Self {
        Self {
            action: Some(action),
            ..Self::style(style)
        }
    }
}

/// Apply one command to the current style.
///
/// Emitted tokens carry a copy of the style in effect before the command.
pub fn step(style: StyleState, command: &Command<'_>) -> Step {
    match *command {
        Command::LineFeed => Step::token(style, Token::text("\n", style)),
        Command::Text(line) => Step::token(style, Token::text(format!("{line}\n"), style)),
        Command::Blank | Command::Ignored => Step::style(style),

        Command::Init => Step::action(StyleState::default(), Action::Initialized),
        Command::PrintMode(mode) => Step::style(style.with_print_mode(mode)),
        Command::Emphasis(on) => Step::style(style.with_emphasis(on)),
        Command::Align(alignment) => Step::style(StyleState { alignment, ..style }),
        Command::Underline(underline) => Step::style(StyleState { underline, ..style }),
        Command::DoubleStrike(strike) => Step::style(StyleState { strike, ..style }),
        Command::Rotate(rotated90) => Step::style(StyleState { rotated90, ..style }),
        Command::DrawerKick => Step::action(style, Action::DrawerOpened),

        Command::CharSize(n) => Step::style(style.with_char_size(n)),
        Command::Cut => Step {
            style,
            token: Some(Token::text(CUT_MARKER, style)),
            action: Some(Action::PaperCut),
        },
        Command::QrCode { size } => Step {
            style,
            token: Some(Token::QrPlaceholder { size, style }),
            action: Some(Action::QrGenerated),
        },
    }
}

/// Interpret a whole script.
///
/// Each call starts from the default style; nothing is shared between
/// calls.
///
/// ```
/// use tillroll::ir::{interpret, Action, SizeScale};
///
/// let output = interpret("ESC @\nESC ! 24\nHi\nGS V");
/// assert_eq!(output.log, vec![Action::Initialized, Action::PaperCut]);
///
/// let style = output.tokens[0].style();
/// assert!(style.bold);
/// assert_eq!(style.size_scale, SizeScale::DoubleHeight);
/// ```
pub fn interpret(script: &str) -> Output {
    let mut output = Output::new();
    let mut style = StyleState::default();

    for (index, line) in tokenize::lines(script).enumerate() {
        let command = Command::from_line(&line);
        if command == Command::Ignored {
            trace!(line = index + 1, text = line.raw, "ignoring unknown command");
        }

        let step = step(style, &command);
        if let Some(token) = step.token {
            output.tokens.push(token);
        }
        if let Some(action) = step.action {
            trace!(line = index + 1, %action, "action");
            output.log.push(action);
        }
        style = step.style;
    }

    debug!(
        tokens = output.tokens.len(),
        actions = output.log.len(),
        "interpreted script"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Alignment, SizeScale, WidthMode};
    use pretty_assertions::assert_eq;

    fn text_styles(output: &Output) -> Vec<StyleState> {
        output.tokens.iter().map(|t| *t.style()).collect()
    }

    #[test]
    fn test_step_text_snapshots_current_style() {
        let style = StyleState {
            bold: true,
            ..Default::default()
        };
        let step = step(style, &Command::Text("Hi"));
        assert_eq!(step.token, Some(Token::text("Hi\n", style)));
        assert_eq!(step.style, style);
        assert_eq!(step.action, None);
    }

    #[test]
    fn test_step_init_returns_default_style() {
        let style = StyleState::default().with_print_mode(0x38);
        let step = step(style, &Command::Init);
        assert_eq!(step.style, StyleState::default());
        assert_eq!(step.action, Some(Action::Initialized));
        assert_eq!(step.token, None);
    }

    #[test]
    fn test_step_ignored_is_noop() {
        let style = StyleState::default().with_emphasis(true);
        assert_eq!(step(style, &Command::Ignored), Step::style(style));
        assert_eq!(step(style, &Command::Blank), Step::style(style));
    }

    #[test]
    fn test_line_feed() {
        let output = interpret("LF");
        assert_eq!(output.tokens, vec![Token::text("\n", StyleState::default())]);
        assert!(output.log.is_empty());
    }

    #[test]
    fn test_literal_text_gets_terminator() {
        let output = interpret("  Coffee   2  ");
        assert_eq!(output.text(), "  Coffee   2  \n");
    }

    #[test]
    fn test_indented_keyword_lines_print_as_text() {
        let output = interpret("   Gs Pro Coffee   4.00\n  lf is short for line feed");
        assert_eq!(
            output.text(),
            "   Gs Pro Coffee   4.00\n  lf is short for line feed\n"
        );
        assert_eq!(output.tokens.len(), 2);
        assert!(output.log.is_empty());
    }

    #[test]
    fn test_print_mode_24() {
        let output = interpret("ESC ! 24\nHi");
        let style = output.tokens[0].style();
        assert!(style.bold);
        assert_eq!(style.size_scale, SizeScale::DoubleHeight);
        assert_eq!(style.width_mode, WidthMode::Normal);
    }

    #[test]
    fn test_cut() {
        let output = interpret("Total\nGS V");
        assert_eq!(output.log, vec![Action::PaperCut]);
        assert_eq!(output.tokens[1].content(), Some("--- Cut Paper ---\n"));
    }

    #[test]
    fn test_qr_sizes() {
        let output = interpret("GS ( k 1 3\nGS ( k 1 4");
        assert_eq!(output.log, vec![Action::QrGenerated, Action::QrGenerated]);
        assert_eq!(
            output.tokens,
            vec![
                Token::QrPlaceholder {
                    size: 100,
                    style: StyleState::default()
                },
                Token::QrPlaceholder {
                    size: 200,
                    style: StyleState::default()
                },
            ]
        );
    }

    #[test]
    fn test_qr_uses_current_style() {
        let output = interpret("ESC a 1\nGS ( k 1 3");
        assert_eq!(output.tokens[0].style().alignment, Alignment::Center);
    }

    #[test]
    fn test_drawer_kick_logs_only() {
        let output = interpret("ESC p 0 25 250");
        assert!(output.tokens.is_empty());
        assert_eq!(output.messages(), vec!["Cash Drawer Opened"]);
    }

    #[test]
    fn test_style_isolation() {
        let output = interpret("before\nESC - 1\nafter\nESC - 0\nlast");
        let styles = text_styles(&output);
        assert!(!styles[0].underline);
        assert!(styles[1].underline);
        assert!(!styles[2].underline);
    }

    #[test]
    fn test_init_reset_takes_effect() {
        let output = interpret("ESC ! 56\nESC a 1\nESC - 1\nbig\nESC @\nplain");
        assert_eq!(output.log, vec![Action::Initialized]);
        assert!(output.tokens[0].style().bold);
        assert_eq!(*output.tokens[1].style(), StyleState::default());
    }

    #[test]
    fn test_bold_last_write_wins() {
        let output = interpret("ESC ! 8\nESC E 0\na\nESC E 1\nESC ! 0\nb\nESC E 1\nc");
        let bold: Vec<bool> = text_styles(&output).iter().map(|s| s.bold).collect();
        assert_eq!(bold, vec![false, false, true]);
    }

    #[test]
    fn test_underline_and_strike_are_independent() {
        let output = interpret("ESC - 1\nESC G 1\nboth\nESC - 0\nstrike");
        let styles = text_styles(&output);
        assert!(styles[0].underline && styles[0].strike);
        assert!(!styles[1].underline && styles[1].strike);
    }

    #[test]
    fn test_rotation_and_char_size() {
        let output = interpret("ESC V 1\nGS ! 2\nup\nESC V 0\ndown");
        let styles = text_styles(&output);
        assert!(styles[0].rotated90);
        assert_eq!(styles[0].font_scale, Some(2.0));
        assert!(!styles[1].rotated90);
        assert_eq!(styles[1].font_scale, Some(2.0));
    }

    #[test]
    fn test_blank_scripts() {
        for script in ["", "\n\n", "   \n\t\n  ", "\r\n"] {
            let output = interpret(script);
            assert!(output.is_empty(), "script {script:?} produced {output:?}");
        }
    }

    #[test]
    fn test_anomalies_do_not_stop_interpretation() {
        let output = interpret("ESC\nGS\nESC ! nonsense\nGS ! ?\nESC Z 9\nGS ( L\nstill here");
        assert_eq!(output.text(), "still here\n");
        assert!(output.log.is_empty());
        assert_eq!(output.tokens[0].style().font_scale, Some(1.0));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let output = interpret("esc @\nlf\ngs V");
        assert_eq!(output.log, vec![Action::Initialized, Action::PaperCut]);
        assert_eq!(output.tokens.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let script = "ESC @\nESC ! 24\nHello\nLF\nGS ( k 1 3\nGS V";
        assert_eq!(interpret(script), interpret(script));
    }
}
