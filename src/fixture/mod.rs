//! WAST test fixtures exercising the SIMD instructions.
//!
//! Each generator returns the complete text of one module. The text is meant
//! to be redirected into a `.wast` file of the target test suite, so every
//! fixture starts with the licence banner that suite requires unless
//! [`FixtureOptions::banner`] is turned off.

mod add;
mod extract;
mod ops;

pub use add::add_module;
pub use extract::extract_module;
pub use ops::{op_tests, OperandValues, DEFAULT_SKIP};

use std::fmt;

/// Licence banner placed at the top of generated fixtures.
pub const BANNER: &str = "\
;;-------------------------------------------------------------------------------------------------------
;; Copyright (C) Microsoft. All rights reserved.
;; Licensed under the MIT license. See LICENSE.txt file in the project root for full license information.
;;-------------------------------------------------------------------------------------------------------
";

/// Export name of the single function in [`add_module`].
pub const DEFAULT_EXPORT: &str = "popcount";

/// Knobs shared by the module generators.
#[derive(Debug, Clone)]
pub struct FixtureOptions {
    /// Emit [`BANNER`] before the module.
    pub banner: bool,
    /// Export name for generators that produce a single function.
    pub export: String,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            banner: true,
            export: DEFAULT_EXPORT.to_string(),
        }
    }
}

/// `(i32.const 1)` through `(i32.const count)`, joined by `sep`.
#[must_use]
pub fn i32_consts(count: usize, sep: &str) -> String {
    (1..=count)
        .map(|i| format!("(i32.const {})", i))
        .collect::<Vec<_>>()
        .join(sep)
}

/// The opening line of an exported function: name, signature and locals.
///
/// Empty groups are left out. The closing parenthesis belongs to the caller.
#[derive(Debug, Clone, Default)]
pub struct FuncHeader<'a> {
    pub export: &'a str,
    pub params: &'a [&'a str],
    pub results: &'a [&'a str],
    pub locals: &'a [&'a str],
}

impl fmt::Display for FuncHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(func (export \"{}\")", self.export)?;
        for (keyword, types) in [("param", self.params), ("result", self.results), ("local", self.locals)] {
            if !types.is_empty() {
                write!(f, " ({} {})", keyword, types.join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts() {
        assert_eq!(i32_consts(3, " "), "(i32.const 1) (i32.const 2) (i32.const 3)");
        assert_eq!(i32_consts(2, "\n"), "(i32.const 1)\n(i32.const 2)");
        assert_eq!(i32_consts(0, " "), "");
    }

    #[test]
    fn header_omits_empty_groups() {
        let header = FuncHeader {
            export: "func_i32x4_0",
            results: &["i32"],
            locals: &["i32x4"],
            ..FuncHeader::default()
        };
        assert_eq!(header.to_string(), r#"(func (export "func_i32x4_0") (result i32) (local i32x4)"#);

        let bare = FuncHeader {
            export: "popcount",
            ..FuncHeader::default()
        };
        assert_eq!(bare.to_string(), r#"(func (export "popcount")"#);
    }

    #[test]
    fn header_with_params() {
        let header = FuncHeader {
            export: "f",
            params: &["i32", "f32"],
            ..FuncHeader::default()
        };
        assert_eq!(header.to_string(), r#"(func (export "f") (param i32 f32)"#);
    }

    #[test]
    fn banner_lines_are_comments() {
        assert_eq!(BANNER.lines().count(), 4);
        assert!(BANNER.lines().all(|l| l.starts_with(";;")));
    }
}
