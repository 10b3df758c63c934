use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn toggles_bits() {
    let (set_a, w1) = literal_a(0xFF_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::X), set_a, 0, w1);
    let (xor_a, w2) = literal_a(0x0F_u16 as i32);
    let xor = Instruction::basic(Opcode::XOR, reg(RegisterId::X), xor_a, 0, w2);
    let cpu = run(&[set, xor]);
    assert_eq!(cpu.register(RegisterId::X), 0xF0);
}
