//! SIMD vector types and the per-type instructions generated for them.

use std::fmt;
use std::str::FromStr;

/// The 128-bit vector types the generators cover.
///
/// The declaration order is the order every generator emits them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdType {
    I32x4,
    I16x8,
    I8x16,
    B32x4,
    B16x8,
    B8x16,
    U32x4,
    U16x8,
    U8x16,
}

impl SimdType {
    /// All types, in emission order.
    pub const ALL: [SimdType; 9] = [
        SimdType::I32x4,
        SimdType::I16x8,
        SimdType::I8x16,
        SimdType::B32x4,
        SimdType::B16x8,
        SimdType::B8x16,
        SimdType::U32x4,
        SimdType::U16x8,
        SimdType::U8x16,
    ];

    /// Text-format name, e.g. `i32x4`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SimdType::I32x4 => "i32x4",
            SimdType::I16x8 => "i16x8",
            SimdType::I8x16 => "i8x16",
            SimdType::B32x4 => "b32x4",
            SimdType::B16x8 => "b16x8",
            SimdType::B8x16 => "b8x16",
            SimdType::U32x4 => "u32x4",
            SimdType::U16x8 => "u16x8",
            SimdType::U8x16 => "u8x16",
        }
    }

    /// Opcode-table name, e.g. `I32X4`.
    #[must_use]
    pub fn upper(self) -> String {
        self.name().to_ascii_uppercase()
    }

    /// Number of lanes in the vector.
    #[must_use]
    pub fn lanes(self) -> usize {
        match self {
            SimdType::I32x4 | SimdType::B32x4 | SimdType::U32x4 => 4,
            SimdType::I16x8 | SimdType::B16x8 | SimdType::U16x8 => 8,
            SimdType::I8x16 | SimdType::B8x16 | SimdType::U8x16 => 16,
        }
    }
}

impl fmt::Display for SimdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lane counts in emission order: 4, 8, 16, then back to 4.
///
/// Pairs with [`SimdType::ALL`], whose shapes follow the same cycle.
#[derive(Debug, Clone)]
pub struct LaneCycle {
    next: usize,
}

impl LaneCycle {
    pub const FIRST: usize = 4;
    pub const LAST: usize = 16;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }
}

impl Default for LaneCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LaneCycle {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next;
        self.next = if current == Self::LAST { Self::FIRST } else { current * 2 };
        Some(current)
    }
}

/// Pairs each type with its lane count from a [`LaneCycle`].
pub fn types_with_lanes() -> impl Iterator<Item = (SimdType, usize)> {
    SimdType::ALL.iter().copied().zip(LaneCycle::new())
}

/// Marker for an absent operand or result in the opcode table.
pub const VOID: &str = "___";

/// A per-type instruction that lane tables are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneOp {
    /// `t.const`: literal vector from lane immediates.
    Const,
    /// `t.build`: vector from lane operands on the stack.
    Build,
    /// `t.add`: lane-wise addition.
    Add,
}

impl LaneOp {
    /// Upper-case opcode suffix, e.g. `BUILD`.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            LaneOp::Const => "CONST",
            LaneOp::Build => "BUILD",
            LaneOp::Add => "ADD",
        }
    }

    /// Text-format mnemonic for the given type, e.g. `i32x4.build`.
    #[must_use]
    pub fn mnemonic(self, ty: SimdType) -> String {
        format!("{}.{}", ty.name(), self.suffix().to_ascii_lowercase())
    }

    /// Operand types as written in the opcode table.
    #[must_use]
    pub fn operands(self, ty: SimdType) -> (String, String) {
        match self {
            LaneOp::Const | LaneOp::Build => ("I32".to_string(), VOID.to_string()),
            LaneOp::Add => (ty.upper(), ty.upper()),
        }
    }

    /// Value of the memory column: the lane count for lane-initialising ops.
    #[must_use]
    pub fn memory(self, lanes: usize) -> usize {
        match self {
            LaneOp::Const | LaneOp::Build => lanes,
            LaneOp::Add => 0,
        }
    }

    /// Token class returned by the generated lexer rule.
    #[must_use]
    pub fn lexer_token(self) -> &'static str {
        match self {
            LaneOp::Const | LaneOp::Build => "SIMD_BUILD",
            LaneOp::Add => "BINARY",
        }
    }
}

impl FromStr for LaneOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "const" => Ok(LaneOp::Const),
            "build" => Ok(LaneOp::Build),
            "add" => Ok(LaneOp::Add),
            other => Err(format!("unknown lane op '{}' (expected const, build or add)", other)),
        }
    }
}
