//! Opcodes, operand descriptors and the structured `Instruction` they
//! combine into.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use util::EnumFromStr;
use util_derive::EnumFromStr;

use crate::constants::{INLINE_LITERAL_BASE, INLINE_LITERAL_MAX, INLINE_LITERAL_MIN};

#[inline]
fn enum_to_u16<T: ToPrimitive + Copy>(val: T) -> u16 {
    val.to_u16().unwrap()
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

/// The eight general-purpose registers, in their bit-encoding order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumFromStr)]
pub enum RegisterId {
    A,
    B,
    C,
    X,
    Y,
    Z,
    I,
    J,
}

impl_enum_display!(RegisterId);

impl RegisterId {
    /// All eight registers, in encoding order.
    pub const ALL: [RegisterId; 8] = [
        RegisterId::A,
        RegisterId::B,
        RegisterId::C,
        RegisterId::X,
        RegisterId::Y,
        RegisterId::Z,
        RegisterId::I,
        RegisterId::J,
    ];

    /// Index into the register file (`0..8`), also this register's 3-bit
    /// encoding within an operand byte.
    pub fn index(self) -> usize {
        enum_to_u16(self) as usize
    }

    pub fn from_index(index: u16) -> Option<RegisterId> {
        FromPrimitive::from_u16(index)
    }
}

/// Basic and special opcodes, unified into one enumeration. Basic opcodes
/// occupy the instruction word's 5-bit opcode field directly; special
/// opcodes are signalled by an opcode field of zero, with the real opcode
/// then occupying the operand-B field (see [`Opcode::is_special`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumFromStr)]
pub enum Opcode {
    SET,
    ADD,
    SUB,
    MUL,
    MLI,
    DIV,
    DVI,
    MOD,
    MDI,
    AND,
    BOR,
    XOR,
    SHR,
    ASR,
    SHL,
    IFB,
    IFC,
    IFE,
    IFN,
    IFG,
    IFA,
    IFL,
    IFU,
    ADX,
    SBX,
    STI,
    STD,
    JSR,
    INT,
    IAG,
    IAS,
    RFI,
    IAQ,
    HWN,
    HWQ,
    HWI,
}

impl_enum_display!(Opcode);

impl Opcode {
    /// `true` for the nine special-form opcodes (`JSR`..`HWI`), which take a
    /// single operand and are encoded with opcode field zero.
    pub fn is_special(self) -> bool {
        self.special_code().is_some()
    }

    /// `true` for the eight `IFx` conditionals, which participate in the
    /// skip-chain state machine.
    pub fn is_conditional(self) -> bool {
        matches!(
            self,
            Opcode::IFB
                | Opcode::IFC
                | Opcode::IFE
                | Opcode::IFN
                | Opcode::IFG
                | Opcode::IFA
                | Opcode::IFL
                | Opcode::IFU
        )
    }

    /// This opcode's value in the instruction word's 5-bit basic-opcode
    /// field, or `None` if it is a special opcode (encoded in the B field
    /// instead).
    pub fn basic_code(self) -> Option<u16> {
        use Opcode::*;
        let code = match self {
            SET => 0x01,
            ADD => 0x02,
            SUB => 0x03,
            MUL => 0x04,
            MLI => 0x05,
            DIV => 0x06,
            DVI => 0x07,
            MOD => 0x08,
            MDI => 0x09,
            AND => 0x0a,
            BOR => 0x0b,
            XOR => 0x0c,
            SHR => 0x0d,
            ASR => 0x0e,
            SHL => 0x0f,
            IFB => 0x10,
            IFC => 0x11,
            IFE => 0x12,
            IFN => 0x13,
            IFG => 0x14,
            IFA => 0x15,
            IFL => 0x16,
            IFU => 0x17,
            ADX => 0x1a,
            SBX => 0x1b,
            STI => 0x1e,
            STD => 0x1f,
            _ => return None,
        };
        Some(code)
    }

    /// This opcode's value in the operand-B field of a special-form
    /// instruction, or `None` if it is a basic opcode.
    pub fn special_code(self) -> Option<u16> {
        use Opcode::*;
        let code = match self {
            JSR => 0x01,
            INT => 0x08,
            IAG => 0x09,
            IAS => 0x0a,
            RFI => 0x0b,
            IAQ => 0x0c,
            HWN => 0x10,
            HWQ => 0x11,
            HWI => 0x12,
            _ => return None,
        };
        Some(code)
    }

    pub fn from_basic_code(code: u16) -> Option<Opcode> {
        use Opcode::*;
        Some(match code {
            0x01 => SET,
            0x02 => ADD,
            0x03 => SUB,
            0x04 => MUL,
            0x05 => MLI,
            0x06 => DIV,
            0x07 => DVI,
            0x08 => MOD,
            0x09 => MDI,
            0x0a => AND,
            0x0b => BOR,
            0x0c => XOR,
            0x0d => SHR,
            0x0e => ASR,
            0x0f => SHL,
            0x10 => IFB,
            0x11 => IFC,
            0x12 => IFE,
            0x13 => IFN,
            0x14 => IFG,
            0x15 => IFA,
            0x16 => IFL,
            0x17 => IFU,
            0x1a => ADX,
            0x1b => SBX,
            0x1e => STI,
            0x1f => STD,
            _ => return None,
        })
    }

    pub fn from_special_code(code: u16) -> Option<Opcode> {
        use Opcode::*;
        Some(match code {
            0x01 => JSR,
            0x08 => INT,
            0x09 => IAG,
            0x0a => IAS,
            0x0b => RFI,
            0x0c => IAQ,
            0x10 => HWN,
            0x11 => HWQ,
            0x12 => HWI,
            _ => return None,
        })
    }
}

/// Where an operand's value comes from or goes to. Encodes to a 6-bit field
/// as operand A, a 5-bit field as operand B; [`Operand::InlineLiteral`] is
/// A-only, and [`Operand::PushPop`] reads as pop in A, push in B.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    Register(RegisterId),
    RegisterIndirect(RegisterId),
    /// `[register + next word]`.
    RegisterIndirectOffset(RegisterId),
    /// `POP` when read as operand A, `PUSH` when written as operand B.
    PushPop,
    Peek,
    /// `[SP + next word]`.
    Pick,
    Sp,
    Pc,
    Ex,
    /// `[next word]`.
    MemoryNextWord,
    /// `next word`, read as a literal; writes are discarded.
    NextWordLiteral,
    /// A small literal in `-1..=30`, encoded directly in operand A's field.
    InlineLiteral(i32),
}

impl Operand {
    /// Whether this operand consumes one of the instruction's trailing
    /// immediate words.
    pub fn needs_next_word(self) -> bool {
        matches!(
            self,
            Operand::RegisterIndirectOffset(_)
                | Operand::Pick
                | Operand::MemoryNextWord
                | Operand::NextWordLiteral
        )
    }

    /// Encodes this operand into its 5- or 6-bit field value. `is_a` selects
    /// which of the two fields it's destined for, since that's what
    /// distinguishes an inline literal (A-only) from an out-of-range value.
    pub fn encode(self, is_a: bool) -> u16 {
        match self {
            Operand::Register(r) => r.index() as u16,
            Operand::RegisterIndirect(r) => 0x08 + r.index() as u16,
            Operand::RegisterIndirectOffset(r) => 0x10 + r.index() as u16,
            Operand::PushPop => 0x18,
            Operand::Peek => 0x19,
            Operand::Pick => 0x1a,
            Operand::Sp => 0x1b,
            Operand::Pc => 0x1c,
            Operand::Ex => 0x1d,
            Operand::MemoryNextWord => 0x1e,
            Operand::NextWordLiteral => 0x1f,
            Operand::InlineLiteral(n) => {
                debug_assert!(is_a, "inline literals only occur in operand A");
                debug_assert!(n >= INLINE_LITERAL_MIN && n <= INLINE_LITERAL_MAX);
                (INLINE_LITERAL_BASE as i32 + (n - INLINE_LITERAL_MIN)) as u16
            }
        }
    }

    /// Decodes an operand field value. `is_a` must reflect which field
    /// `code` came from, since `0x20..=0x3F` is only a valid inline literal
    /// in operand A.
    pub fn decode(code: u16, is_a: bool) -> Option<Operand> {
        match code {
            0x00..=0x07 => Some(Operand::Register(RegisterId::from_index(code)?)),
            0x08..=0x0f => Some(Operand::RegisterIndirect(RegisterId::from_index(
                code - 0x08,
            )?)),
            0x10..=0x17 => Some(Operand::RegisterIndirectOffset(RegisterId::from_index(
                code - 0x10,
            )?)),
            0x18 => Some(Operand::PushPop),
            0x19 => Some(Operand::Peek),
            0x1a => Some(Operand::Pick),
            0x1b => Some(Operand::Sp),
            0x1c => Some(Operand::Pc),
            0x1d => Some(Operand::Ex),
            0x1e => Some(Operand::MemoryNextWord),
            0x1f => Some(Operand::NextWordLiteral),
            0x20..=0x3f if is_a => {
                Some(Operand::InlineLiteral(code as i32 - INLINE_LITERAL_BASE as i32 + INLINE_LITERAL_MIN))
            }
            _ => None,
        }
    }
}

/// A fully lowered instruction: opcode, its operand(s), and the immediate
/// words those operands consume (zero when not meaningful).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub opcode: Opcode,
    pub a: Operand,
    /// `None` for special-form instructions, which take only operand A.
    pub b: Option<Operand>,
    pub word_a: u16,
    pub word_b: u16,
}

impl Instruction {
    /// A two-operand (`B A`) instruction built from a basic opcode.
    pub fn basic(opcode: Opcode, b: Operand, a: Operand, word_b: u16, word_a: u16) -> Instruction {
        debug_assert!(!opcode.is_special());
        Instruction {
            opcode,
            a,
            b: Some(b),
            word_a,
            word_b,
        }
    }

    /// A one-operand instruction built from a special opcode.
    pub fn special(opcode: Opcode, a: Operand, word_a: u16) -> Instruction {
        debug_assert!(opcode.is_special());
        Instruction {
            opcode,
            a,
            b: None,
            word_a,
            word_b: 0,
        }
    }
}
