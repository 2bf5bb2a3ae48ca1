//! One function per lane, building a vector and extracting that lane.

use super::{i32_consts, FixtureOptions, FuncHeader, BANNER};
use crate::error::Result;
use crate::simd::types_with_lanes;
use std::fmt::Write as FmtWrite;

/// Functions `func_<type>_<lane>` that build `1..=lanes` into a local and
/// return lane `<lane>` of it.
pub fn extract_module(options: &FixtureOptions) -> Result<String> {
    let mut output = String::new();
    if options.banner {
        output.push_str(BANNER);
    }
    writeln!(&mut output, "(module")?;

    for (ty, lanes) in types_with_lanes() {
        let locals = [ty.name()];
        for lane in 0..lanes {
            let export = format!("func_{}_{}", ty, lane);
            let header = FuncHeader {
                export: &export,
                results: &["i32"],
                locals: &locals,
                ..FuncHeader::default()
            };
            writeln!(&mut output, "\t{}", header)?;
            writeln!(&mut output, "\t\t(set_local 0 ({}.build {}))", ty, i32_consts(lanes, " "))?;
            writeln!(&mut output, "\t\t({}.extract (get_local 0) (i32.const {}))", ty, lane)?;
            writeln!(&mut output, "\t)")?;
        }
    }

    writeln!(&mut output, ")")?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_function_per_lane() {
        let text = extract_module(&FixtureOptions::default()).unwrap();
        assert_eq!(text.matches("(func ").count(), 84);
        assert!(text.contains("(export \"func_i8x16_15\")"));
        assert!(!text.contains("(export \"func_i32x4_4\")"));
    }

    #[test]
    fn first_function() {
        let options = FixtureOptions {
            banner: false,
            ..FixtureOptions::default()
        };
        let text = extract_module(&options).unwrap();
        let expected = "(module\n\
            \t(func (export \"func_i32x4_0\") (result i32) (local i32x4)\n\
            \t\t(set_local 0 (i32x4.build (i32.const 1) (i32.const 2) (i32.const 3) (i32.const 4)))\n\
            \t\t(i32x4.extract (get_local 0) (i32.const 0))\n\
            \t)\n";
        assert!(text.starts_with(expected), "{}", &text[..200]);
    }
}
