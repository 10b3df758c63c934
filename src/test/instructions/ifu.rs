use crate::test::{literal_a, literal_b, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn signed_less_than() {
    let (b, wb) = literal_b(0xFFFF_u16 as i32);
    let (a, wa) = literal_a(1);
    let ifu = Instruction::basic(Opcode::IFU, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifu, set]);
    assert_eq!(cpu.register(RegisterId::X), 1);
}

#[test]
fn false_when_b_is_not_less_than_a() {
    let (b, wb) = literal_b(5);
    let (a, wa) = literal_a(1);
    let ifu = Instruction::basic(Opcode::IFU, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifu, set]);
    assert_eq!(cpu.register(RegisterId::X), 0);
}
