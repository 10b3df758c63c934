use crate::test::{literal_a, reg, run};
use crate::types::{Instruction, Opcode, RegisterId};

#[test]
fn sign_extends_negative_values() {
    let (set_a, w1) = literal_a(0x8000_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::Y), set_a, 0, w1);
    let (asr_a, w2) = literal_a(1);
    let asr = Instruction::basic(Opcode::ASR, reg(RegisterId::Y), asr_a, 0, w2);
    let cpu = run(&[set, asr]);
    assert_eq!(cpu.register(RegisterId::Y), 0xC000);
}

#[test]
fn bits_shifted_out_land_in_ex() {
    let (set_a, w1) = literal_a(0xF_u16 as i32);
    let set = Instruction::basic(Opcode::SET, reg(RegisterId::I), set_a, 0, w1);
    let (asr_a, w2) = literal_a(3);
    let asr = Instruction::basic(Opcode::ASR, reg(RegisterId::I), asr_a, 0, w2);
    let cpu = run(&[set, asr]);
    assert_eq!(cpu.register(RegisterId::I), 1);
    assert_eq!(cpu.ex(), 0xE000);
}
