use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn shift_within_range() {
    let (set_a, w1) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, w1);
    let (shl_a, w2) = literal_a(3);
    let shl = Instruction::basic(Opcode::SHL, reg(RegisterId::X), shl_a, 0, w2);
    let cpu = run(&[set, shl]);
    assert_eq!(cpu.register(RegisterId::X), 8);
    assert_eq!(cpu.ex(), 0);
}

#[test]
fn overflow_bits_land_in_ex() {
    let (set_a, w1) = literal_a(0x8000_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::Y), set_a, 0, w1);
    let (shl_a, w2) = literal_a(1);
    let shl = Instruction::basic(Opcode::SHL, reg(RegisterId::Y), shl_a, 0, w2);
    let cpu = run(&[set, shl]);
    assert_eq!(cpu.register(RegisterId::Y), 0);
    assert_eq!(cpu.ex(), 1);
}
