//! Bit-packs [`Instruction`]s into the DCPU-16's little-endian word stream,
//! and unpacks them back out again. Grounded on the same
//! opcode/operand-field layout the executor's fetch stage decodes.

use byteorder::ByteOrder;
use util::Endian;

use crate::constants::{
    OPCODE_MASK, OPERAND_A_OFFSET, OPERAND_B_MASK, OPERAND_B_OFFSET, SPECIAL_FORM_OPCODE,
};
use crate::types::{Instruction, Opcode, Operand};

/// Encodes a sequence of instructions into a little-endian byte stream.
pub fn encode(instructions: &[Instruction]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for instruction in instructions {
        encode_instruction(instruction, &mut bytes);
    }
    bytes
}

fn encode_instruction(instruction: &Instruction, out: &mut Vec<u8>) {
    let a_field = instruction.a.encode(true);
    let (opcode_field, b_field) = match instruction.b {
        Some(b) => (
            instruction
                .opcode
                .basic_code()
                .expect("instruction.b is Some, so opcode must be a basic opcode"),
            b.encode(false),
        ),
        None => (
            SPECIAL_FORM_OPCODE,
            instruction
                .opcode
                .special_code()
                .expect("instruction.b is None, so opcode must be a special opcode"),
        ),
    };

    let word = (a_field << OPERAND_A_OFFSET) | (b_field << OPERAND_B_OFFSET) | opcode_field;
    push_word(out, word);

    if instruction.a.needs_next_word() {
        push_word(out, instruction.word_a);
    }
    if let Some(b) = instruction.b {
        if b.needs_next_word() {
            push_word(out, instruction.word_b);
        }
    }
}

fn push_word(out: &mut Vec<u8>, word: u16) {
    let mut buf = [0u8; 2];
    Endian::write_u16(&mut buf, word);
    out.extend_from_slice(&buf);
}

/// Decodes a little-endian byte stream into a sequence of instructions.
/// A trailing odd byte is ignored, same as [`Memory::load`](crate::Memory::load).
pub fn decode(bytes: &[u8]) -> Vec<Instruction> {
    let words: Vec<u16> = bytes.chunks_exact(2).map(Endian::read_u16).collect();
    let mut index = 0;
    let mut instructions = Vec::new();
    while index < words.len() {
        instructions.push(decode_instruction(|| {
            let word = words[index];
            index += 1;
            word
        }));
    }
    instructions
}

/// Decodes one instruction, pulling the instruction word and any immediates
/// it requires from `next_word`. This is the primitive the CPU's fetch stage
/// uses directly against memory, and that [`decode`] uses against a byte
/// slice turned into a word stream.
pub fn decode_instruction<F: FnMut() -> u16>(mut next_word: F) -> Instruction {
    let word = next_word();
    let opcode_field = word & OPCODE_MASK;
    let b_field = (word >> OPERAND_B_OFFSET) & OPERAND_B_MASK;
    let a_field = word >> OPERAND_A_OFFSET;

    let a = Operand::decode(a_field, true).expect("invalid operand A field");
    let word_a = if a.needs_next_word() { next_word() } else { 0 };

    if opcode_field == SPECIAL_FORM_OPCODE {
        let opcode = Opcode::from_special_code(b_field).expect("unknown special opcode");
        Instruction::special(opcode, a, word_a)
    } else {
        let opcode = Opcode::from_basic_code(opcode_field).expect("unknown basic opcode");
        let b = Operand::decode(b_field, false).expect("invalid operand B field");
        let word_b = if b.needs_next_word() { next_word() } else { 0 };
        Instruction::basic(opcode, b, a, word_b, word_a)
    }
}
