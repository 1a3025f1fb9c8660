//! Line index for configuration dumps.
//!
//! A [`ConfigDocument`] splits the source once and annotates every line with
//! its indent width. All extractors share this index instead of re-scanning
//! the raw text.

/// A single source line with its leading-whitespace width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedLine<'src> {
    text: &'src str,
    indent: usize,
}

impl<'src> IndentedLine<'src> {
    /// Annotates a raw line with its indent width.
    pub fn new(text: &'src str) -> Self {
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        Self { text, indent }
    }

    /// Returns the raw line, indentation included.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the line without leading and trailing whitespace.
    pub fn trimmed(&self) -> &'src str {
        self.text.trim()
    }

    /// Returns the number of leading whitespace characters.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns `true` for blank and `#` comment lines.
    ///
    /// These lines never open or close a block.
    pub fn is_transparent(&self) -> bool {
        let trimmed = self.trimmed();
        trimmed.is_empty() || trimmed.starts_with('#')
    }

    /// Returns `true` if the line is exactly the `exit` keyword.
    pub fn is_exit(&self) -> bool {
        self.trimmed() == "exit"
    }
}

/// An immutable, line-indexed configuration dump.
///
/// # Examples
///
/// ```
/// use srviz_parser::ConfigDocument;
///
/// let doc = ConfigDocument::new("configure\n    service\n    exit\nexit");
/// assert_eq!(doc.len(), 4);
/// assert_eq!(doc.line(1).map(|line| line.indent()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDocument<'src> {
    source: &'src str,
    lines: Vec<IndentedLine<'src>>,
}

impl<'src> ConfigDocument<'src> {
    /// Splits and indexes `source`. `\n` and `\r\n` line endings are accepted.
    pub fn new(source: &'src str) -> Self {
        let lines = source.lines().map(IndentedLine::new).collect();
        Self { source, lines }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns every indexed line.
    pub fn lines(&self) -> &[IndentedLine<'src>] {
        &self.lines
    }

    /// Returns the line at `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<&IndentedLine<'src>> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_width() {
        assert_eq!(IndentedLine::new("exit").indent(), 0);
        assert_eq!(IndentedLine::new("        exit").indent(), 8);
        assert_eq!(IndentedLine::new("\t\tqos 10").indent(), 2);
    }

    #[test]
    fn test_transparent_lines() {
        assert!(IndentedLine::new("").is_transparent());
        assert!(IndentedLine::new("      ").is_transparent());
        assert!(IndentedLine::new("    # comment").is_transparent());
        assert!(!IndentedLine::new("    exit").is_transparent());
    }

    #[test]
    fn test_exit_detection() {
        assert!(IndentedLine::new("    exit   ").is_exit());
        assert!(!IndentedLine::new("    exit all").is_exit());
        assert!(!IndentedLine::new("    shutdown").is_exit());
    }

    #[test]
    fn test_crlf_lines() {
        let doc = ConfigDocument::new("port 1/1/1\r\n    shutdown\r\nexit\r\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.line(1).map(|line| line.trimmed()), Some("shutdown"));
        assert_eq!(doc.line(2).map(|line| line.is_exit()), Some(true));
    }

    #[test]
    fn test_empty_document() {
        let doc = ConfigDocument::new("");
        assert!(doc.is_empty());
        assert!(doc.line(0).is_none());
    }
}
