//! Types, memory, binary codec and CPU executor for the DCPU-16.
//!
//! This crate implements the three lower layers of the toolchain: the
//! opcode/operand/instruction types ([`types`]), the 65,536-word memory
//! ([`memory`]), the little-endian binary codec ([`codec`]), and the
//! fetch/decode/execute loop ([`cpu`]). The s-expression assembler that
//! produces the `Instruction`s this crate consumes lives in the sibling
//! `dasm` crate.

pub mod codec;
pub mod constants;
pub mod cpu;
pub mod memory;
pub mod types;

pub use codec::{decode, decode_instruction, encode};
pub use cpu::Cpu;
pub use memory::Memory;
pub use types::{Instruction, Opcode, Operand, RegisterId};
