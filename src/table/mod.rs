//! Opcode tables: parsing `V(...)` rows and generating new ones.
//!
//! The target sources describe every instruction once, in an X-macro table.
//! This module reads such a table into [`OpcodeEntry`] values and renders
//! entries back out as table rows, lexer rules or type-switch cases.
//!
//! # Example
//!
//! ```
//! use simdgen::simd::LaneOp;
//! use simdgen::table::{lane_table, LaneFormat};
//!
//! let rows = lane_table(LaneOp::Build, 0xf1, LaneFormat::Table).unwrap();
//! assert!(rows.starts_with(r#"V(I32X4, I32, ___, 4,  0xf1, I32X4_BUILD, "i32x4.build")"#));
//! ```

mod entry;
mod lanes;
pub mod render;

pub use entry::{parse_table, Field, OpcodeEntry};
pub use lanes::{lane_entries, lane_table, lexer_rules, parse_opcode, LaneFormat, DEFAULT_FIRST_OPCODE};
