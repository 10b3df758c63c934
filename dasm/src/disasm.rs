//! Decodes a byte stream back into the s-expression surface syntax. The
//! codec's decode path driven to text, grounded on the original reference's
//! `Decoder::OpCodeToStr`/`ValueToStr`, but emitting the prefix-notation
//! `(op b a)` form this dialect's lowering consumes rather than the
//! reference's infix `MNEMONIC b, a` text.

use dcpu::{Instruction, Operand, RegisterId};

/// Disassembles a little-endian byte stream into one parenthesised
/// instruction per line. Always succeeds: every encoded operand field
/// round-trips through [`dcpu::decode`] into a renderable operand, and an
/// odd trailing byte is silently dropped (same as [`dcpu::Memory::load`]).
pub fn disassemble(bytes: &[u8]) -> String {
    dcpu::decode(bytes)
        .iter()
        .map(render_instruction)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_instruction(instr: &Instruction) -> String {
    let opcode = format!("{}", instr.opcode).to_lowercase();
    match instr.b {
        Some(b) => format!(
            "({} {} {})",
            opcode,
            render_operand(b, instr.word_b, false),
            render_operand(instr.a, instr.word_a, true)
        ),
        None => format!("({} {})", opcode, render_operand(instr.a, instr.word_a, true)),
    }
}

fn render_register(id: RegisterId) -> String {
    format!("{}", id).to_lowercase()
}

/// Renders one resolved operand back to its surface syntax. `is_a`
/// distinguishes [`Operand::PushPop`] ("pop" vs "push") the same way
/// lowering's operand position does.
fn render_operand(operand: Operand, word: u16, is_a: bool) -> String {
    match operand {
        Operand::Register(r) => render_register(r),
        Operand::RegisterIndirect(r) => format!("(ref {})", render_register(r)),
        Operand::RegisterIndirectOffset(r) => format!("(ref {} {})", render_register(r), word as i16),
        Operand::PushPop => {
            if is_a {
                "pop".to_string()
            } else {
                "push".to_string()
            }
        }
        Operand::Peek => "peek".to_string(),
        Operand::Pick => format!("(ref sp {})", word as i16),
        Operand::Sp => "sp".to_string(),
        Operand::Pc => "pc".to_string(),
        Operand::Ex => "ex".to_string(),
        Operand::MemoryNextWord => format!("(ref {})", word as i16),
        Operand::NextWordLiteral => format!("{}", word as i16),
        Operand::InlineLiteral(n) => format!("{}", n),
    }
}
