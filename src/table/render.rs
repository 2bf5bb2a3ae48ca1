//! Text renderings of table entries for pasting into the target sources.

use super::entry::OpcodeEntry;

/// A `V(...)` table row, with the column spacing the target table uses.
#[must_use]
pub fn table_row(entry: &OpcodeEntry) -> String {
    format!(
        "V({}, {}, {}, {},  {}, {}, \"{}\")               \\",
        entry.result, entry.operand1, entry.operand2, entry.memory, entry.encoding, entry.opcode, entry.text
    )
}

/// A re2c lexer rule mapping the mnemonic to its opcode and token class.
#[must_use]
pub fn lexer_rule(entry: &OpcodeEntry, token: &str) -> String {
    format!(
        "<i> \"{}\"            {{ OPCODE({}); RETURN({}); }}",
        entry.text, entry.opcode, token
    )
}

/// A `switch` case selecting the opcode for the entry's result type.
#[must_use]
pub fn type_case(entry: &OpcodeEntry) -> String {
    format!(
        "case WASM_TYPE_{}:\n\topcode = WASM_OPCODE_{};\n\tbreak;",
        entry.result, entry.opcode
    )
}
