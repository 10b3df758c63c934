//! Bit layout of the DCPU-16 instruction word and machine-wide size constants.

/// Number of 16-bit cells in the machine's address space (`2^16`).
pub const MEMORY_WORDS: usize = 1 << 16;

/// Number of general-purpose registers (`A`..`J`).
pub const REGISTER_COUNT: usize = 8;

/// Width, in bits, of the basic opcode field.
pub const OPCODE_WIDTH: u32 = 5;

/// Width, in bits, of the operand B field (and, for special-form
/// instructions, the special opcode field).
pub const OPERAND_B_WIDTH: u32 = 5;

/// Width, in bits, of the operand A field.
pub const OPERAND_A_WIDTH: u32 = 6;

pub const OPCODE_OFFSET: u32 = 0;
pub const OPERAND_B_OFFSET: u32 = OPCODE_WIDTH;
pub const OPERAND_A_OFFSET: u32 = OPCODE_WIDTH + OPERAND_B_WIDTH;

pub const OPCODE_MASK: u16 = (1u16 << OPCODE_WIDTH) - 1;
pub const OPERAND_B_MASK: u16 = (1u16 << OPERAND_B_WIDTH) - 1;
pub const OPERAND_A_MASK: u16 = (1u16 << OPERAND_A_WIDTH) - 1;

/// Basic opcode value reserved to mean "this is a special-form instruction;
/// the real opcode is in the operand B field".
pub const SPECIAL_FORM_OPCODE: u16 = 0x00;

/// Lowest inline-literal encoding (`0x20` encodes `-1`).
pub const INLINE_LITERAL_BASE: u16 = 0x20;

/// Inline literals span `-1..=30`, encoded as `value + 1` above
/// [`INLINE_LITERAL_BASE`].
pub const INLINE_LITERAL_MIN: i32 = -1;
pub const INLINE_LITERAL_MAX: i32 = 30;
