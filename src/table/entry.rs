//! Rows of an X-macro opcode table.
//!
//! A row looks like
//!
//! ```text
//! V(F32X4, F32, ___, 0, 0xc1, F32X4_SPLAT, "f32x4.splat")               \
//! ```
//!
//! and lists the result type, two operand types, the memory (lane) column,
//! the binary encoding, the opcode name and the text-format mnemonic.

use crate::error::{Error, Result};
use crate::simd::VOID;
use tracing::debug;

const ROW_PREFIX: &str = "V(";

/// Column positions within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Result = 0,
    Operand1 = 1,
    Operand2 = 2,
    Memory = 3,
    Encoding = 4,
    Opcode = 5,
    Text = 6,
}

impl Field {
    /// Number of columns in a well-formed row.
    pub const COUNT: usize = 7;
}

/// One parsed table row. All fields are trimmed; `text` excludes its quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub result: String,
    pub operand1: String,
    pub operand2: String,
    pub memory: String,
    pub encoding: String,
    pub opcode: String,
    pub text: String,
}

impl OpcodeEntry {
    /// Whether the instruction produces no value.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.result == VOID
    }

    /// Parses a single `V(...)` row. `line` is only used for error reporting.
    pub fn parse(row: &str, line: usize) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedEntry { line, reason };

        let body = row
            .trim()
            .strip_prefix(ROW_PREFIX)
            .ok_or_else(|| malformed(format!("row must start with '{}'", ROW_PREFIX)))?;
        let body = body.trim_end_matches('\\').trim_end();

        let fields: Vec<&str> = body.splitn(Field::COUNT, ',').collect();
        if fields.len() < Field::COUNT {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                Field::COUNT,
                fields.len()
            )));
        }

        let text_field = fields[Field::Text as usize];
        let text = match (text_field.find('"'), text_field.rfind('"')) {
            (Some(open), Some(close)) if open < close => &text_field[open + 1..close],
            _ => return Err(malformed(format!("mnemonic is not quoted: {}", text_field.trim()))),
        };

        let field = |f: Field| fields[f as usize].trim().to_string();
        Ok(OpcodeEntry {
            result: field(Field::Result),
            operand1: field(Field::Operand1),
            operand2: field(Field::Operand2),
            memory: field(Field::Memory),
            encoding: field(Field::Encoding),
            opcode: field(Field::Opcode),
            text: text.to_string(),
        })
    }
}

/// Parses every `V(...)` row in `source`, in order.
///
/// Lines that are not rows (the `#define` header, comments, blank lines) are
/// skipped.
pub fn parse_table(source: &str) -> Result<Vec<OpcodeEntry>> {
    let mut entries = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if !line.trim_start().starts_with(ROW_PREFIX) {
            if !line.trim().is_empty() {
                debug!(line = line_no, "skipping non-row line");
            }
            continue;
        }
        entries.push(OpcodeEntry::parse(line, line_no)?);
    }

    debug!(rows = entries.len(), "parsed opcode table");
    Ok(entries)
}
