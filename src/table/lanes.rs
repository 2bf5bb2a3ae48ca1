//! Per-type rows for a lane instruction, and lexer rules for existing rows.

use super::entry::OpcodeEntry;
use super::render;
use crate::error::{Error, Result};
use crate::simd::{types_with_lanes, LaneOp, SimdType};
use std::fmt::Write as FmtWrite;
use std::str::FromStr;
use tracing::debug;

/// Encoding of the first generated row unless overridden.
pub const DEFAULT_FIRST_OPCODE: u32 = 0xf1;

/// How [`lane_table`] renders its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneFormat {
    /// `V(...)` table rows.
    #[default]
    Table,
    /// Lexer rules returning the op's token class.
    Lexer,
    /// `case WASM_TYPE_...:` blocks.
    Case,
}

impl FromStr for LaneFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(LaneFormat::Table),
            "lexer" => Ok(LaneFormat::Lexer),
            "case" => Ok(LaneFormat::Case),
            other => Err(format!("unknown format '{}' (expected table, lexer or case)", other)),
        }
    }
}

/// Parses an opcode given as `0x`-prefixed hex or as decimal.
pub fn parse_opcode(s: &str) -> Result<u32> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| Error::InvalidOpcode(s.to_string()))
}

/// One entry per SIMD type, with encodings counting up from `first_opcode`.
///
/// Fails when the last encoding would not fit in a `u32`.
pub fn lane_entries(op: LaneOp, first_opcode: u32) -> Result<Vec<OpcodeEntry>> {
    let last = SimdType::ALL.len() as u32 - 1;
    if first_opcode.checked_add(last).is_none() {
        return Err(Error::InvalidOpcode(format!(
            "{:#x} leaves no room for {} consecutive encodings",
            first_opcode,
            SimdType::ALL.len()
        )));
    }

    let entries = types_with_lanes()
        .enumerate()
        .map(|(idx, (ty, lanes))| {
            // Cannot overflow: the last encoding was checked above.
            let opcode = first_opcode + idx as u32;
            let (operand1, operand2) = op.operands(ty);
            OpcodeEntry {
                result: ty.upper(),
                operand1,
                operand2,
                memory: op.memory(lanes).to_string(),
                encoding: format!("{:#x}", opcode),
                opcode: format!("{}_{}", ty.upper(), op.suffix()),
                text: op.mnemonic(ty),
            }
        })
        .collect();
    Ok(entries)
}

/// Renders [`lane_entries`] in the requested format, one item per line.
pub fn lane_table(op: LaneOp, first_opcode: u32, format: LaneFormat) -> Result<String> {
    let entries = lane_entries(op, first_opcode)?;
    debug!(?op, ?format, rows = entries.len(), "generating lane table");

    let mut output = String::new();
    for entry in &entries {
        match format {
            LaneFormat::Table => writeln!(&mut output, "{}", render::table_row(entry))?,
            LaneFormat::Lexer => writeln!(&mut output, "{}", render::lexer_rule(entry, op.lexer_token()))?,
            LaneFormat::Case => writeln!(&mut output, "{}", render::type_case(entry))?,
        }
    }
    Ok(output)
}

/// Renders one lexer rule per entry, in table order.
pub fn lexer_rules(entries: &[OpcodeEntry], token: &str) -> Result<String> {
    let mut output = String::new();
    for entry in entries {
        writeln!(&mut output, "{}", render::lexer_rule(entry, token))?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodings_count_up() {
        let entries = lane_entries(LaneOp::Build, 0xf1).unwrap();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].encoding, "0xf1");
        assert_eq!(entries[8].encoding, "0xf9");
        for pair in entries.windows(2) {
            let a = parse_opcode(&pair[0].encoding).unwrap();
            let b = parse_opcode(&pair[1].encoding).unwrap();
            assert_eq!(b, a + 1);
        }
    }

    #[test]
    fn encoding_crosses_into_three_digits() {
        let entries = lane_entries(LaneOp::Const, 0xfe).unwrap();
        assert_eq!(entries[1].encoding, "0xff");
        assert_eq!(entries[2].encoding, "0x100");
    }

    #[test]
    fn build_memory_column_is_lane_count() {
        let memory: Vec<String> = lane_entries(LaneOp::Build, 0).unwrap().into_iter().map(|e| e.memory).collect();
        assert_eq!(memory, vec!["4", "8", "16", "4", "8", "16", "4", "8", "16"]);
    }

    #[test]
    fn last_encoding_must_fit_in_u32() {
        let entries = lane_entries(LaneOp::Build, u32::MAX - 8).unwrap();
        assert_eq!(entries[8].encoding, format!("{:#x}", u32::MAX));

        let err = lane_table(LaneOp::Build, u32::MAX - 7, LaneFormat::Table).unwrap_err();
        assert!(matches!(err, Error::InvalidOpcode(_)));
        assert!(lane_entries(LaneOp::Add, u32::MAX).is_err());
    }

    #[test]
    fn add_rows() {
        let table = lane_table(LaneOp::Add, 0x40, LaneFormat::Table).unwrap();
        let first = table.lines().next().unwrap();
        assert_eq!(first, r#"V(I32X4, I32X4, I32X4, 0,  0x40, I32X4_ADD, "i32x4.add")               \"#);
    }

    #[test]
    fn lexer_format_uses_op_token() {
        let rules = lane_table(LaneOp::Const, 0xdf, LaneFormat::Lexer).unwrap();
        assert_eq!(
            rules.lines().nth(2).unwrap(),
            r#"<i> "i8x16.const"            { OPCODE(I8X16_CONST); RETURN(SIMD_BUILD); }"#
        );
    }

    #[test]
    fn case_format() {
        let cases = lane_table(LaneOp::Const, 0xdf, LaneFormat::Case).unwrap();
        assert_eq!(cases.lines().count(), 27);
        assert!(cases.starts_with("case WASM_TYPE_I32X4:\n\topcode = WASM_OPCODE_I32X4_CONST;\n\tbreak;\n"));
    }

    #[test]
    fn opcode_parsing() {
        assert_eq!(parse_opcode("0xf0").unwrap(), 0xf0);
        assert_eq!(parse_opcode("0XF0").unwrap(), 0xf0);
        assert_eq!(parse_opcode("240").unwrap(), 240);
        assert!(matches!(parse_opcode("0xzz"), Err(Error::InvalidOpcode(s)) if s == "0xzz"));
    }

    #[test]
    fn format_from_str() {
        assert_eq!("case".parse::<LaneFormat>(), Ok(LaneFormat::Case));
        assert!("json".parse::<LaneFormat>().is_err());
    }
}
