use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn fits_in_one_word() {
    let (set_a, w1) = literal_a(9);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, w1);
    let (mul_a, w2) = literal_a(9);
    let mul = Instruction::basic(Opcode::MUL, reg(RegisterId::X), mul_a, 0, w2);
    let cpu = run(&[set, mul]);
    assert_eq!(cpu.register(RegisterId::X), 81);
    assert_eq!(cpu.ex(), 0);
}

#[test]
fn overflow_lands_in_ex() {
    let (set_a, w1) = literal_a(0x8000_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::Y), set_a, 0, w1);
    let (mul_a, w2) = literal_a(3);
    let mul = Instruction::basic(Opcode::MUL, reg(RegisterId::Y), mul_a, 0, w2);
    let cpu = run(&[set, mul]);
    // 0x8000 * 3 = 0x1_8000; low word 0x8000, high word 1.
    assert_eq!(cpu.register(RegisterId::Y), 0x8000);
    assert_eq!(cpu.ex(), 1);
}
