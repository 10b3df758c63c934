use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn stores_and_increments_i_and_j() {
    let (set_j, w1) = literal_a(2);
    let set_j = Instruction::basic(Opcode::SET, reg(RegisterId::J), set_j, 0, w1);
    let (sti_a, w2) = literal_a(0xA);
    let sti = Instruction::basic(Opcode::STI, reg(RegisterId::A), sti_a, 0, w2);
    let cpu = run(&[set_j, sti]);
    assert_eq!(cpu.register(RegisterId::A), 0xA);
    assert_eq!(cpu.register(RegisterId::I), 1);
    assert_eq!(cpu.register(RegisterId::J), 3);
}
