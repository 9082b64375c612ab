//! # Script Tokenizer
//!
//! Splits a command script into lines, and each line into a keyword and
//! whitespace-delimited arguments.
//!
//! ```text
//! "ESC a 1\nHello\n"
//!   ├── Line { keyword: Some(Esc), args: ["a", "1"] }
//!   ├── Line { keyword: None, raw: "Hello" }
//!   └── Line { keyword: None, raw: "" }
//! ```
//!
//! There is no quoting or escaping. Tokenizing never fails: a line whose
//! first word is not a keyword is literal text. An indented line has an
//! empty first word, so it is always literal.

/// Command family selected by the first word of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `LF` - line feed
    Lf,
    /// `ESC` - formatting and printer control
    Esc,
    /// `GS` - character size, cut, QR codes
    Gs,
}

impl Keyword {
    /// Match a word against the known keywords, ignoring ASCII case.
    ///
    /// ```
    /// use tillroll::protocol::tokenize::Keyword;
    ///
    /// assert_eq!(Keyword::parse("esc"), Some(Keyword::Esc));
    /// assert_eq!(Keyword::parse("Total:"), None);
    /// ```
    pub fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("LF") {
            Some(Self::Lf)
        } else if word.eq_ignore_ascii_case("ESC") {
            Some(Self::Esc)
        } else if word.eq_ignore_ascii_case("GS") {
            Some(Self::Gs)
        } else {
            None
        }
    }
}

/// One script line, split into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line text without its terminator.
    pub raw: &'a str,
    /// Keyword, if the first word is one.
    pub keyword: Option<Keyword>,
    /// Words after the keyword. Empty for literal lines.
    pub args: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Split a single line (without terminator) into keyword and arguments.
    pub fn parse(raw: &'a str) -> Self {
        let mut words = raw.split_whitespace();
        let keyword = if raw.starts_with(char::is_whitespace) {
            None
        } else {
            words.next().and_then(Keyword::parse)
        };
        match keyword {
            Some(keyword) => Self {
                raw,
                keyword: Some(keyword),
                args: words.collect(),
            },
            None => Self {
                raw,
                keyword: None,
                args: Vec::new(),
            },
        }
    }

    /// Argument at `index`, if present.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// True if the line holds nothing but whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Split a script into lines.
///
/// Lines are separated by `\n`; one trailing `\r` per line is dropped so
/// CRLF scripts read the same as LF scripts.
pub fn lines(script: &str) -> impl Iterator<Item = Line<'_>> {
    script
        .split('\n')
        .map(|line| Line::parse(line.strip_suffix('\r').unwrap_or(line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!(Keyword::parse("LF"), Some(Keyword::Lf));
        assert_eq!(Keyword::parse("lf"), Some(Keyword::Lf));
        assert_eq!(Keyword::parse("Esc"), Some(Keyword::Esc));
        assert_eq!(Keyword::parse("gS"), Some(Keyword::Gs));
        assert_eq!(Keyword::parse("ESCAPE"), None);
        assert_eq!(Keyword::parse(""), None);
    }

    #[test]
    fn test_command_line() {
        let line = Line::parse("GS ( k 1 3");
        assert_eq!(line.keyword, Some(Keyword::Gs));
        assert_eq!(line.args, vec!["(", "k", "1", "3"]);
        assert_eq!(line.arg(2), Some("1"));
        assert_eq!(line.arg(9), None);
    }

    #[test]
    fn test_extra_whitespace_between_words() {
        let line = Line::parse("ESC\t a   1  ");
        assert_eq!(line.keyword, Some(Keyword::Esc));
        assert_eq!(line.args, vec!["a", "1"]);
    }

    #[test]
    fn test_indented_keyword_is_literal() {
        for raw in ["   Gs Pro Coffee   4.00", "  lf is short for line feed", "\tESC @"] {
            let line = Line::parse(raw);
            assert_eq!(line.keyword, None, "{raw:?} parsed as a command");
            assert!(line.args.is_empty());
            assert_eq!(line.raw, raw);
        }
    }

    #[test]
    fn test_literal_line_keeps_raw_text() {
        let line = Line::parse("  Coffee   2   2.50");
        assert_eq!(line.keyword, None);
        assert!(line.args.is_empty());
        assert_eq!(line.raw, "  Coffee   2   2.50");
        assert!(!line.is_blank());
    }

    #[test]
    fn test_blank_lines() {
        assert!(Line::parse("").is_blank());
        assert!(Line::parse("   \t").is_blank());
    }

    #[test]
    fn test_lines_split() {
        let all: Vec<_> = lines("ESC @\nHello\n").collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].keyword, Some(Keyword::Esc));
        assert_eq!(all[1].raw, "Hello");
        assert_eq!(all[2].raw, "");
    }

    #[test]
    fn test_lines_crlf() {
        let all: Vec<_> = lines("Hello\r\nLF\r\n").collect();
        assert_eq!(all[0].raw, "Hello");
        assert_eq!(all[1].keyword, Some(Keyword::Lf));
    }

    #[test]
    fn test_empty_script_is_one_blank_line() {
        let all: Vec<_> = lines("").collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_blank());
    }
}
