//! Generators for SIMD opcode tables and WAST test fixtures.
//!
//! simdgen produces the repetitive text needed when adding a family of SIMD
//! instructions to a WebAssembly implementation: opcode-table rows, lexer
//! rules and type-switch cases for every vector type, plus `.wast` fixtures
//! that exercise the new instructions. Everything is returned as a `String`
//! for the caller to print or write.
//!
//! # Modules
//!
//! - [`simd`] -- The vector types, their lane counts and the per-type lane ops.
//! - [`table`] -- Parsing and rendering `V(...)` opcode-table rows.
//! - [`fixture`] -- `.wast` module generators.
//! - [`beautify`] -- Re-indentation of `.wast` text.
//!
//! # Example
//!
//! Generate lexer rules for the rows of an existing table:
//!
//! ```
//! use simdgen::table::{lexer_rules, parse_table};
//!
//! let table = r#"V(F32X4, F32, ___, 0, 0xc1, F32X4_SPLAT, "f32x4.splat") \"#;
//! let entries = parse_table(table).unwrap();
//! let rules = lexer_rules(&entries, "UNARY").unwrap();
//! assert_eq!(rules, "<i> \"f32x4.splat\"            { OPCODE(F32X4_SPLAT); RETURN(UNARY); }\n");
//! ```

pub mod beautify;
pub mod error;
pub mod fixture;
pub mod simd;
pub mod table;

pub use error::{Error, Result};
