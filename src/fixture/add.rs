//! A single function adding two constant vectors of every type.

use super::{i32_consts, FixtureOptions, FuncHeader, BANNER};
use crate::error::Result;
use crate::simd::types_with_lanes;
use std::fmt::Write as FmtWrite;

/// One exported function that drops `t.add` of two `t.const` vectors per type.
pub fn add_module(options: &FixtureOptions) -> Result<String> {
    let mut output = String::new();
    if options.banner {
        output.push_str(BANNER);
    }

    let header = FuncHeader {
        export: &options.export,
        ..FuncHeader::default()
    };
    writeln!(&mut output, "(module")?;
    writeln!(&mut output, "\t{}", header)?;

    for (ty, lanes) in types_with_lanes() {
        let vector = format!("({}.const {})", ty, i32_consts(lanes, " "));
        writeln!(&mut output, "\t\t(drop")?;
        writeln!(&mut output, "\t\t\t({}.add", ty)?;
        writeln!(&mut output, "\t\t\t\t{}", vector)?;
        writeln!(&mut output, "\t\t\t\t{}", vector)?;
        writeln!(&mut output, "\t\t\t)")?;
        writeln!(&mut output, "\t\t)")?;
    }

    writeln!(&mut output, "\t)")?;
    writeln!(&mut output, ")")?;
    Ok(output)
}
