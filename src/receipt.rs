//! # Sample Scripts
//!
//! Built-in command scripts. `cafe` is the default script loaded when no
//! script is supplied.

// ============================================================================
// SAMPLE SCRIPTS
// ============================================================================

/// Name of the default sample.
pub const DEFAULT: &str = "cafe";

/// Cafe receipt: header, item table, totals, drawer kick and cut.
pub const CAFE: &str = r#"ESC @
ESC ! 24
ESC a 1
The Cozy Corner Cafe
ESC ! 0
LF
123 Main Street, Anytown
LF
Tel: (555) 123-4567
LF
LF
ESC a 0
------------------------------------------
Item            Qty    Price     Total
------------------------------------------
Coffee          2      2.50      5.00
Sandwich        1      5.00      5.00
Cake            3      3.00      9.00
------------------------------------------
Subtotal:                         19.00
Tax (10%):                        1.90
------------------------------------------
ESC E 1
Total:                           20.90
ESC E 0
------------------------------------------
ESC p 0 25 250
ESC a 1
Thank you for visiting The Cozy Corner Cafe!
LF
LF
ESC d 3
GS V 1"#;

/// One line per style command.
///
/// Features demonstrated:
/// - Print mode bits (bold, double height, double width)
/// - Emphasis, underline, double strike
/// - Character size scale
/// - Alignment and rotation
pub const STYLES: &str = r#"ESC @
ESC a 1
ESC ! 56
STYLE SHOWCASE
ESC ! 0
LF
ESC a 0
ESC E 1
Emphasized text
ESC E 0
ESC - 1
Underlined text
ESC - 0
ESC G 1
Double-strike text
ESC G 0
ESC ! 16
Double height
ESC ! 32
Double width
ESC ! 0
GS ! 2
Character size 2
ESC ! 0
ESC a 2
Right aligned
ESC a 0
ESC V 1
Rotated
ESC V 0
LF
GS V 0"#;

/// Event ticket with a large QR code.
pub const TICKET: &str = r#"ESC @
ESC a 1
ESC ! 8
ADMIT ONE
ESC ! 0
Gallery Night - Hall B
LF
GS ( k 1 4
LF
Scan at the door
GS V 1"#;

// ============================================================================
// LOOKUP
// ============================================================================

/// List all available sample names.
pub fn list_receipts() -> &'static [&'static str] {
    &["cafe", "styles", "ticket"]
}

/// Get a sample script by name.
pub fn by_name(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "cafe" => Some(CAFE),
        "styles" => Some(STYLES),
        "ticket" => Some(TICKET),
        _ => None,
    }
}

/// The script used when none is supplied.
pub fn default_script() -> &'static str {
    CAFE
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_receipts() {
        let receipts = list_receipts();
        assert!(receipts.contains(&"cafe"));
        assert!(receipts.contains(&DEFAULT));
    }

    #[test]
    fn test_every_listed_sample_resolves() {
        for name in list_receipts() {
            assert!(by_name(name).is_some(), "missing sample {name}");
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("cafe"), Some(CAFE));
        assert_eq!(by_name("TICKET"), Some(TICKET));
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn test_default_script() {
        assert_eq!(default_script(), by_name(DEFAULT).unwrap());
        assert!(default_script().starts_with("ESC @\n"));
    }
}
