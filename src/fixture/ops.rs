//! One instruction call per opcode-table row, fed with canned operands.

use crate::error::{Error, Result};
use crate::simd::VOID;
use crate::table::OpcodeEntry;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use tracing::debug;

/// Mnemonics left out of [`op_tests`] unless the caller says otherwise.
pub const DEFAULT_SKIP: &[&str] = &["f32x4.replaceLane"];

/// Operand expression to use for each table type name.
///
/// # Example
///
/// ```
/// use simdgen::fixture::OperandValues;
///
/// let values = OperandValues::from_json(r#"{"I64": "(i64.const 7)"}"#).unwrap();
/// assert_eq!(values.get("I64"), Some("(i64.const 7)"));
/// assert_eq!(values.get("I32"), Some("(i32.const 7)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct OperandValues(HashMap<String, String>);

impl Default for OperandValues {
    fn default() -> Self {
        let lane = "(f32.const -0.0)";
        let f32x4 = format!("(f32x4.const {} {} {} {})", lane, lane, lane, lane);
        let values = [
            ("F32", "(f32.const -1.0)".to_string()),
            ("I32", "(i32.const 7)".to_string()),
            ("F32X4", f32x4),
            (VOID, String::new()),
        ];
        Self(values.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl OperandValues {
    /// Reads a JSON object of `type -> expression` and layers it over the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: OperandValues = serde_json::from_str(json)?;
        let mut values = Self::default();
        values.0.extend(overrides.0);
        Ok(values)
    }

    /// The operand expression for a type name, if known.
    #[must_use]
    pub fn get(&self, ty: &str) -> Option<&str> {
        self.0.get(ty).map(String::as_str)
    }

    fn require(&self, ty: &str, entry: &OpcodeEntry) -> Result<&str> {
        self.get(ty).ok_or_else(|| Error::UnknownValueType {
            ty: ty.to_string(),
            instruction: entry.text.clone(),
        })
    }
}

/// Renders a call of every entry not named in `skip`.
///
/// Value-producing instructions are wrapped in `drop`.
pub fn op_tests<S: AsRef<str>>(entries: &[OpcodeEntry], values: &OperandValues, skip: &[S]) -> Result<String> {
    let mut output = String::new();
    let mut emitted = 0usize;

    for entry in entries {
        if skip.iter().any(|s| s.as_ref() == entry.text) {
            debug!(instruction = %entry.text, "skipped");
            continue;
        }

        let first = values.require(&entry.operand1, entry)?;
        let second = values.require(&entry.operand2, entry)?;
        let call = [entry.text.as_str(), first.trim(), second.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        if entry.is_void() {
            writeln!(&mut output, "({})", call)?;
        } else {
            writeln!(&mut output, "(drop ({}))", call)?;
        }
        emitted += 1;
    }

    debug!(emitted, total = entries.len(), "generated instruction calls");
    Ok(output)
}
