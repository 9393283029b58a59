//! Output buffer for generated dispatch code.
//!
//! `CodeWriter` owns the text being generated and knows how the chosen
//! [`Layout`] spells guards, blocks and statements. The emitter only says
//! what to write, never how it is laid out.

/// How generated code is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Single line, no whitespace between statements:
    /// `if(length > 4){if(view == "json"){ return json_factory(); }}`.
    Compact,
    /// One statement per line, braces on their own lines, `indent` spaces
    /// per nesting level.
    Pretty { indent: usize },
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Pretty { indent: 2 }
    }
}

/// Text buffer with layout-aware helpers.
pub struct CodeWriter {
    layout: Layout,
    /// Prefix written before every pretty line (column of the splice site).
    margin: String,
    /// Current nesting level.
    depth: usize,
    output: String,
}

impl CodeWriter {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            margin: String::new(),
            depth: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Prefix every pretty line with `margin`. Ignored by `Compact`.
    #[must_use]
    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Open `if (cond) {`. Must be paired with [`close_guard`](Self::close_guard).
    pub fn open_guard(&mut self, cond: &str) {
        match self.layout {
            Layout::Compact => {
                self.output.push_str("if(");
                self.output.push_str(cond);
                self.output.push_str("){");
            }
            Layout::Pretty { .. } => {
                self.writeln(&format!("if ({cond})"));
                self.writeln("{");
                self.depth += 1;
            }
        }
    }

    /// Close the innermost guard.
    pub fn close_guard(&mut self) {
        match self.layout {
            Layout::Compact => self.output.push('}'),
            Layout::Pretty { .. } => {
                debug_assert!(self.depth > 0, "close_guard without open_guard");
                self.depth = self.depth.saturating_sub(1);
                self.writeln("}");
            }
        }
    }

    /// Write a single statement at the current nesting level.
    pub fn statement(&mut self, stmt: &str) {
        match self.layout {
            Layout::Compact => self.output.push_str(stmt),
            Layout::Pretty { .. } => self.writeln(stmt),
        }
    }

    /// Write `if (cond) { stmt }` as one unit.
    ///
    /// The compact layout pads the statement with single spaces inside the
    /// braces, unlike [`open_guard`](Self::open_guard).
    pub fn branch(&mut self, cond: &str, stmt: &str) {
        match self.layout {
            Layout::Compact => {
                self.open_guard(cond);
                self.output.push(' ');
                self.output.push_str(stmt);
                self.output.push(' ');
                self.close_guard();
            }
            Layout::Pretty { .. } => {
                self.open_guard(cond);
                self.statement(stmt);
                self.close_guard();
            }
        }
    }

    /// Take the generated text, leaving the writer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn writeln(&mut self, s: &str) {
        let Layout::Pretty { indent } = self.layout else {
            self.output.push_str(s);
            return;
        };
        self.output.push_str(&self.margin);
        for _ in 0..self.depth * indent {
            self.output.push(' ');
        }
        self.output.push_str(s);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compact_guard_and_branch() {
        let mut w = CodeWriter::new(Layout::Compact);
        w.open_guard("length > 1");
        w.branch("view == \"bb\"", "return bb_factory();");
        w.close_guard();
        w.statement("return nullptr;");
        assert_eq!(
            w.take_output(),
            "if(length > 1){if(view == \"bb\"){ return bb_factory(); }}return nullptr;"
        );
    }

    #[test]
    fn pretty_nesting() {
        let mut w = CodeWriter::new(Layout::Pretty { indent: 2 });
        w.open_guard("length > 1");
        w.branch("view == \"bb\"", "return bb_factory();");
        w.close_guard();
        w.statement("return nullptr;");
        assert_eq!(
            w.take_output(),
            "if (length > 1)\n\
             {\n\
             \x20 if (view == \"bb\")\n\
             \x20 {\n\
             \x20   return bb_factory();\n\
             \x20 }\n\
             }\n\
             return nullptr;\n"
        );
    }

    #[test]
    fn pretty_margin_prefixes_every_line() {
        let mut w = CodeWriter::new(Layout::Pretty { indent: 4 }).with_margin("\t");
        w.branch("x", "y;");
        assert_eq!(w.take_output(), "\tif (x)\n\t{\n\t    y;\n\t}\n");
    }

    #[test]
    fn margin_is_ignored_when_compact() {
        let mut w = CodeWriter::new(Layout::Compact).with_margin("    ");
        w.statement("return nullptr;");
        assert_eq!(w.take_output(), "return nullptr;");
    }

    #[test]
    fn take_output_resets() {
        let mut w = CodeWriter::new(Layout::Compact);
        w.statement("a;");
        assert_eq!(w.take_output(), "a;");
        assert_eq!(w.take_output(), "");
        assert_eq!(w.layout(), Layout::Compact);
    }
}
