//! CSS declarations for styled tokens.
//!
//! Web consumers render each text run as an inline element with these
//! declarations. Rotated text becomes an inline block turned -90° around its
//! bottom-left corner.

use crate::ir::{Alignment, StyleState};

/// Inline CSS for a style snapshot.
///
/// ```
/// use tillroll::ir::StyleState;
/// use tillroll::render::css;
///
/// let style = StyleState::default().with_print_mode(0x18);
/// assert_eq!(
///     css::declarations(&style),
///     "font-weight: bold; font-size: 2em; text-align: left; text-decoration: none;"
/// );
/// ```
pub fn declarations(style: &StyleState) -> String {
    let weight = if style.bold { "bold" } else { "normal" };
    let mut decls = vec![
        format!("font-weight: {weight};"),
        format!("font-size: {}em;", style.font_size_em()),
    ];
    if style.is_double_width() {
        decls.push("width: 200%;".to_string());
    }
    decls.push(format!("text-align: {};", text_align(style.alignment)));
    decls.push(format!("text-decoration: {};", text_decoration(style)));
    if style.rotated90 {
        decls.push(
            "transform: rotate(-90deg); display: inline-block; transform-origin: left bottom;"
                .to_string(),
        );
    }

    decls.join(" ")
}

fn text_align(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

fn text_decoration(style: &StyleState) -> &'static str {
    match (style.underline, style.strike) {
        (true, true) => "underline line-through",
        (true, false) => "underline",
        (false, true) => "line-through",
        (false, false) => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        assert_eq!(
            declarations(&StyleState::default()),
            "font-weight: normal; font-size: 1em; text-align: left; text-decoration: none;"
        );
    }

    #[test]
    fn test_double_width() {
        let css = declarations(&StyleState::default().with_print_mode(0x20));
        assert!(css.contains("font-size: 1.5em;"));
        assert!(css.contains("width: 200%;"));
    }

    #[test]
    fn test_char_size_scale() {
        let css = declarations(&StyleState::default().with_char_size(3));
        assert!(css.contains("font-size: 2.5em;"));
    }

    #[test]
    fn test_decorations_combine() {
        let style = StyleState {
            underline: true,
            strike: true,
            alignment: Alignment::Right,
            ..Default::default()
        };
        let css = declarations(&style);
        assert!(css.contains("text-decoration: underline line-through;"));
        assert!(css.contains("text-align: right;"));
    }

    #[test]
    fn test_rotated() {
        let style = StyleState {
            rotated90: true,
            ..Default::default()
        };
        assert!(declarations(&style).ends_with(
            "transform: rotate(-90deg); display: inline-block; transform-origin: left bottom;"
        ));
    }

    #[test]
    fn test_declaration_order() {
        let style = StyleState {
            rotated90: true,
            ..StyleState::default().with_print_mode(0x28)
        };
        assert_eq!(
            declarations(&style),
            "font-weight: bold; font-size: 1.5em; width: 200%; text-align: left; \
             text-decoration: none; transform: rotate(-90deg); display: inline-block; \
             transform-origin: left bottom;"
        );
    }
}
