//! Formatting configuration for generated test sources
//!
//! Defaults follow the conventional layout of the target language: 4-space indentation, Allman braces, one
//! blank line between class members and LF line endings.

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines between methods (and between the field block and the first method)
    pub blank_lines_between_members: usize,
    /// Line terminator written to the output
    pub line_ending: LineEnding,
}

/// Line terminator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_lines_between_members: 1,
            line_ending: LineEnding::Lf,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the number of blank lines between class members
    pub fn with_blank_lines_between_members(mut self, count: usize) -> Self {
        self.blank_lines_between_members = count;
        self
    }

    /// Set the line terminator
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.blank_lines_between_members, 1);
        assert_eq!(config.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FormatConfig::new(), FormatConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_indent_width(2)
            .with_blank_lines_between_members(0)
            .with_line_ending(LineEnding::CrLf);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.blank_lines_between_members, 0);
        assert_eq!(config.line_ending.as_str(), "\r\n");
    }
}
