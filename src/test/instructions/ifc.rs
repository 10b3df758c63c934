use crate::test::{literal_a, literal_b, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn true_when_no_bits_in_common() {
    let (b, wb) = literal_b(0b0001);
    let (a, wa) = literal_a(0b0010);
    let ifc = Instruction::basic(Opcode::IFC, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifc, set]);
    assert_eq!(cpu.register(RegisterId::X), 1);
}

#[test]
fn false_when_bits_overlap() {
    let (b, wb) = literal_b(0b0110);
    let (a, wa) = literal_a(0b0010);
    let ifc = Instruction::basic(Opcode::IFC, b, a, wb, wa);
    let (set_a, ws) = literal_a(1);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, ws);
    let cpu = run(&[ifc, set]);
    assert_eq!(cpu.register(RegisterId::X), 0);
}
