use crate::test::{literal_a, literal_b, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn true_branch_runs_the_next_instruction() {
    let (b, wb) = literal_b(0b0110);
    let (a, wa) = literal_a(0b0010);
    let ifb = Instruction::basic(Opcode::IFB, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifb, set]);
    assert_eq!(cpu.register(RegisterId::X), 1);
}

#[test]
fn false_branch_skips_the_next_instruction() {
    let (b, wb) = literal_b(0b0001);
    let (a, wa) = literal_a(0b0010);
    let ifb = Instruction::basic(Opcode::IFB, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifb, set]);
    assert_eq!(cpu.register(RegisterId::X), 0);
}
