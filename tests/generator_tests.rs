//! Golden-file tests: every generator must reproduce its fixture byte for byte.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use simdgen::beautify::{beautify, Indent};
    use simdgen::fixture::{self, FixtureOptions, OperandValues};
    use simdgen::simd::LaneOp;
    use simdgen::table::{self, LaneFormat, OpcodeEntry};

    const TABLE: &str = include_str!("fixtures/f32x4_table.h");

    fn entries() -> Vec<OpcodeEntry> {
        table::parse_table(TABLE).unwrap_or_else(|e| panic!("fixture table failed to parse: {e}"))
    }

    /// Checks that every `(` has a matching `)` and nothing closes early.
    fn assert_balanced(text: &str) {
        let mut depth = 0i64;
        for (idx, c) in text.chars().enumerate() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    assert!(depth >= 0, "unmatched ')' at char {idx}");
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "unclosed '('");
    }

    #[test]
    fn lane_build_table() {
        let text = table::lane_table(LaneOp::Build, table::DEFAULT_FIRST_OPCODE, LaneFormat::Table).unwrap();
        assert_eq!(text, include_str!("fixtures/lane_build.txt"));
    }

    #[test]
    fn lane_rows_parse_back() {
        for op in [LaneOp::Const, LaneOp::Build, LaneOp::Add] {
            let text = table::lane_table(op, 0xdf, LaneFormat::Table).unwrap();
            assert_eq!(table::parse_table(&text).unwrap(), table::lane_entries(op, 0xdf).unwrap());
        }
    }

    #[test]
    fn fixture_table_rows() {
        let entries = entries();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries.iter().filter(|e| e.is_void()).count(), 1);
    }

    #[test]
    fn lexer_rules_for_table() {
        let text = table::lexer_rules(&entries(), "BINARY").unwrap();
        assert_eq!(text, include_str!("fixtures/f32x4_lexer.txt"));
    }

    #[test]
    fn op_tests_for_table() {
        let text = fixture::op_tests(&entries(), &OperandValues::default(), fixture::DEFAULT_SKIP).unwrap();
        assert_eq!(text, include_str!("fixtures/f32x4_ops.wast"));
        for line in text.lines() {
            assert_balanced(line);
        }
    }

    #[rstest]
    #[case::add(fixture::add_module, include_str!("fixtures/add_module.wast"))]
    #[case::extract(fixture::extract_module, include_str!("fixtures/extract_module.wast"))]
    fn modules(#[case] generate: fn(&FixtureOptions) -> simdgen::Result<String>, #[case] expected: &str) {
        let text = generate(&FixtureOptions::default()).unwrap();
        assert_eq!(text, expected);
        assert_balanced(&text);
    }

    #[rstest]
    #[case(include_str!("fixtures/beautify_in.wast"))]
    #[case(include_str!("fixtures/beautify_out.wast"))]
    fn beautify_fixture(#[case] source: &str) {
        assert_eq!(beautify(source, Indent::Tab), include_str!("fixtures/beautify_out.wast"));
    }

    #[rstest]
    #[case(include_str!("fixtures/add_module.wast"))]
    #[case(include_str!("fixtures/extract_module.wast"))]
    fn beautified_modules_stay_balanced(#[case] source: &str) {
        let once = beautify(source, Indent::Spaces(2));
        assert_balanced(&once);
        assert_eq!(beautify(&once, Indent::Spaces(2)), once);
    }
}
