//! Assembler front-end for the DCPU-16's parenthesised prefix-notation
//! assembly dialect.
//!
//! A program is zero or more top-level s-expressions, each compiling to
//! exactly one instruction:
//!
//! ```text
//! (set x 12)
//! (set (ref x) 21)
//! (add x 1)
//! ```
//!
//! This crate only tokenises, parses and lowers that dialect into
//! [`dcpu::Instruction`]s and the little-endian byte stream the [`dcpu`]
//! crate's codec and CPU executor consume. File I/O and diagnostic
//! printing are the driver's job, not this crate's.
//!
//! The three entry points named by this system are [`assemble`],
//! [`disassemble`] and [`execute`]; a typical end-to-end use composes all
//! three: source text in, run the assembled program, inspect the resulting
//! [`dcpu::Cpu`].

mod disasm;
mod error;
mod expr;
mod lower;
mod tokenizer;

pub use dcpu::Cpu;
pub use error::{AssembleError, Error, LexError, ParseError};

/// Tokenises, parses and lowers `source` into its binary encoding.
///
/// ```
/// let bytes = dasm::assemble("(set x 12)").unwrap();
/// assert_eq!(bytes, vec![0x61, 0xb4]);
/// ```
pub fn assemble(source: &str) -> Result<Vec<u8>, Error> {
    Ok(dcpu::encode(&assemble_instructions(source)?))
}

/// Decodes `bytes` back into the surface syntax, one instruction per line.
/// Always succeeds: a byte stream produced by [`encode`](dcpu::encode)
/// round-trips through [`dcpu::decode`] into operands this dialect can
/// always render.
pub fn disassemble(bytes: &[u8]) -> String {
    disasm::disassemble(bytes)
}

/// Loads `bytes` into a fresh [`Cpu`] and runs it to completion.
///
/// ```
/// let bytes = dasm::assemble("(set x 12)").unwrap();
/// let cpu = dasm::execute(&bytes);
/// assert_eq!(cpu.register(dcpu::RegisterId::X), 12);
/// ```
pub fn execute(bytes: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.load(bytes);
    cpu.run();
    cpu
}

/// Shared by [`assemble`] and `disasm`'s doctests: tokenise, parse and
/// lower without encoding, so the disassembler's round-trip tests can
/// compare structured instructions' re-encoded bytes against their own
/// rendered text.
fn assemble_instructions(source: &str) -> Result<Vec<dcpu::Instruction>, Error> {
    let tokens = tokenizer::tokenize(source)?;
    let expressions = expr::build_expressions(&tokens)?;
    Ok(lower::lower(&expressions)?)
}
