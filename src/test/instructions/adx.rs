use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn carry_out_sets_ex() {
    let (set_a, w1) = literal_a(0xFFFF_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::I), set_a, 0, w1);
    let (adx_a, w2) = literal_a(2);
    let adx = Instruction::basic(Opcode::ADX, reg(RegisterId::I), adx_a, 0, w2);
    let cpu = run(&[set, adx]);
    assert_eq!(cpu.register(RegisterId::I), 1);
    assert_eq!(cpu.ex(), 1);
}

#[test]
fn carry_in_is_added_to_the_sum() {
    let (set_i, w1) = literal_a(0xFFFF_u16 as i32);
    let set_i = Instruction::basic(Opcode::SET, reg(RegisterId::I), set_i, 0, w1);
    let (adx1_a, w2) = literal_a(2);
    let adx1 = Instruction::basic(Opcode::ADX, reg(RegisterId::I), adx1_a, 0, w2);
    let (set_j, w3) = literal_a(0);
    let set_j = Instruction::basic(Opcode::SET, reg(RegisterId::J), set_j, 0, w3);
    let (adx2_a, w4) = literal_a(3);
    let adx2 = Instruction::basic(Opcode::ADX, reg(RegisterId::J), adx2_a, 0, w4);
    let cpu = run(&[set_i, adx1, set_j, adx2]);
    assert_eq!(cpu.register(RegisterId::J), 4);
}
