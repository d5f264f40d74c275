//! Line-oriented output writer
//!
//! Generated sources are printed one whole line at a time: a line is either blank or prefixed by the current block
//! depth. The configured line ending is applied once, in [`FormatWriter::finish`].

use super::config::FormatConfig;

/// Builds printed output line by line, tracking brace-block depth.
pub struct FormatWriter {
    lines: Vec<String>,
    depth: usize,
    config: FormatConfig,
}

impl FormatWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            config,
        }
    }

    /// Join the lines, each terminated by the configured line ending.
    pub fn finish(self) -> String {
        let ending = self.config.line_ending.as_str();
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push_str(ending);
            out
        })
    }

    /// Emit `text` on its own line at the current depth.
    pub fn line(&mut self, text: &str) {
        let indent = " ".repeat(self.depth * self.config.indent_width);
        self.lines.push(format!("{indent}{text}"));
    }

    /// Emit `count` empty lines. Blank lines never carry indentation.
    pub fn blank_lines(&mut self, count: usize) {
        self.lines.extend(std::iter::repeat_n(String::new(), count));
    }

    /// `{` on its own line; following lines are one level deeper.
    pub fn open_block(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    /// Leave the innermost block with `}`.
    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}
