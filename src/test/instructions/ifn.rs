use crate::test::{literal_a, literal_b, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn true_when_different() {
    let (b, wb) = literal_b(7);
    let (a, wa) = literal_a(8);
    let ifn = Instruction::basic(Opcode::IFN, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifn, set]);
    assert_eq!(cpu.register(RegisterId::X), 1);
}

#[test]
fn false_when_equal() {
    let (b, wb) = literal_b(7);
    let (a, wa) = literal_a(7);
    let ifn = Instruction::basic(Opcode::IFN, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifn, set]);
    assert_eq!(cpu.register(RegisterId::X), 0);
}
