//! Re-indentation of `.wast` text by parenthesis depth.
//!
//! Every opening form goes on its own line, indented by the number of forms
//! still open around it. Short leaf forms such as `(i32.const 7)` or
//! `(local i32x4)` are kept together on one line.
//!
//! # Example
//!
//! ```
//! use simdgen::beautify::{beautify, Indent};
//!
//! let text = beautify("(module (func (export \"f\") (drop (i32.const 1))))", Indent::Tab);
//! assert_eq!(text, "(module\n\n\t(func\n\t\t(export \"f\")\n\t\t(drop\n\t\t\t(i32.const 1)\n\t\t)\n\t)\n)\n");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t ]+").unwrap());

/// Forms written on a single line together with their arguments.
const INLINE_FORMS: &[&str] = &[
    "(i32.const",
    "(i64.const",
    "(f32.const",
    "(f64.const",
    "(export",
    "(get_local",
    "(result",
    "(local",
    "(param",
];

/// Unit of indentation per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n),
        }
    }
}

struct Beautifier {
    unit: String,
    depth: usize,
    lines: Vec<String>,
    /// Line being assembled for an inline form, until its closing `)`.
    inline: Option<String>,
    underflows: usize,
}

impl Beautifier {
    fn new(indent: Indent) -> Self {
        Self {
            unit: indent.unit(),
            depth: 0,
            lines: Vec::new(),
            inline: None,
            underflows: 0,
        }
    }

    fn finish_inline(&mut self) {
        if let Some(line) = self.inline.take() {
            self.lines.push(line);
        }
    }

    fn push(&mut self, text: &str) {
        self.finish_inline();
        let line = format!("{}{}", self.unit.repeat(self.depth), text);
        self.lines.push(line);
    }

    fn close(&mut self) {
        if self.depth == 0 {
            self.underflows += 1;
        }
        self.depth = self.depth.saturating_sub(1);
        self.push(")");
    }

    fn separate(&mut self) {
        self.finish_inline();
        if self.lines.last().map_or(false, |l| !l.is_empty()) {
            self.lines.push(String::new());
        }
    }

    /// Comment lines are written where they occur; an open inline form stays
    /// open and is written once its closing `)` arrives.
    fn comment(&mut self, line: &str) {
        self.lines.push(line.trim_end().to_string());
    }

    fn token(&mut self, tok: &str) {
        if let Some(line) = self.inline.as_mut() {
            line.push(' ');
            line.push_str(tok);
            if tok.ends_with(')') {
                self.finish_inline();
            }
        } else if INLINE_FORMS.contains(&tok) {
            self.finish_inline();
            self.inline = Some(format!("{}{}", self.unit.repeat(self.depth), tok));
        } else if tok.starts_with('(') {
            if tok == "(func" || tok == "(func)" {
                self.separate();
            }
            self.push(tok);
            if !tok.ends_with(')') {
                self.depth += 1;
            }
        } else if tok == ")" {
            self.close();
        } else if let Some(text) = tok.strip_suffix(')') {
            self.push(text);
            self.close();
        } else {
            self.push(tok);
        }
    }

    fn finish(mut self) -> String {
        self.finish_inline();
        if self.depth > 0 || self.underflows > 0 {
            warn!(unclosed = self.depth, unmatched = self.underflows, "unbalanced parentheses in input");
        }
        if self.lines.is_empty() {
            return String::new();
        }
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

/// Re-indents `source`, one form per line.
#[must_use]
pub fn beautify(source: &str, indent: Indent) -> String {
    let mut beautifier = Beautifier::new(indent);

    for line in source.lines() {
        if line.starts_with(";;") {
            beautifier.comment(line);
            continue;
        }
        let spaced = line.replace(')', ") ");
        for tok in SEPARATOR.split(&spaced) {
            let tok = tok.trim();
            if !tok.is_empty() {
                beautifier.token(tok);
            }
        }
    }

    beautifier.finish()
}
