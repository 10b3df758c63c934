//! Fetch/decode/execute against the register file and [`Memory`]. Every
//! opcode's arithmetic is a pure function of `(b, a, EX)`, widened before
//! truncating back to 16 bits.

use crate::codec::decode_instruction;
use crate::constants::REGISTER_COUNT;
use crate::memory::Memory;
use crate::types::{Instruction, Opcode, Operand, RegisterId};

/// Where a resolved operand B writes back to. Computed once by
/// [`Cpu::resolve_b`] and reused for both the read and the write.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Slot {
    Register(RegisterId),
    Memory(u16),
    Sp,
    Pc,
    Ex,
    /// A next-word or inline literal used as operand B. Reads as that
    /// value; writes are discarded.
    Literal(u16),
}

/// Register file, memory and skip flag, wired together into a
/// fetch/decode/execute loop.
pub struct Cpu {
    registers: [u16; REGISTER_COUNT],
    pc: u16,
    sp: u16,
    ex: u16,
    ia: u16,
    skip: bool,
    memory: Memory,
    program_words: usize,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            registers: [0; REGISTER_COUNT],
            pc: 0,
            sp: 0,
            ex: 0,
            ia: 0,
            skip: false,
            memory: Memory::new(),
            program_words: 0,
        }
    }

    /// Loads a little-endian byte stream into memory starting at address 0
    /// and resets PC to the start of it. Registers, SP and EX are left as
    /// they are, so a program can be loaded onto an already-running machine.
    pub fn load(&mut self, program: &[u8]) {
        self.program_words = self.memory.load(program);
        self.pc = 0;
    }

    /// Steps until PC reaches or passes the end of the loaded program. A
    /// jump that lands back inside the loaded range keeps running; a
    /// program whose control flow never leaves that range runs forever.
    pub fn run(&mut self) {
        while (self.pc as usize) < self.program_words {
            self.step();
        }
    }

    /// Fetches and executes (or skips) one instruction.
    pub fn step(&mut self) {
        let instruction = self.fetch();

        if self.skip {
            self.skip = instruction.opcode.is_conditional();
            return;
        }

        self.execute(&instruction);
    }

    pub fn register(&self, id: RegisterId) -> u16 {
        self.registers[id.index()]
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn sp(&self) -> u16 {
        self.sp
    }

    pub fn ex(&self) -> u16 {
        self.ex
    }

    pub fn ia(&self) -> u16 {
        self.ia
    }

    pub fn mem(&self, address: u16) -> u16 {
        self.memory.read(address)
    }

    fn fetch(&mut self) -> Instruction {
        decode_instruction(|| {
            let word = self.memory.read(self.pc);
            self.pc = self.pc.wrapping_add(1);
            word
        })
    }

    fn execute(&mut self, instruction: &Instruction) {
        let opcode = instruction.opcode;

        if opcode.is_conditional() {
            let a = self.read_a(instruction.a, instruction.word_a);
            let slot = self.resolve_b(
                instruction.b.expect("IFx is a basic opcode"),
                instruction.word_b,
            );
            let b = self.read_slot(slot);
            self.skip = !condition(opcode, b, a);
            return;
        }

        match instruction.b {
            Some(b) => self.execute_basic(opcode, instruction.a, b, instruction.word_a, instruction.word_b),
            None => self.execute_special(opcode, instruction.a, instruction.word_a),
        }
    }

    fn execute_basic(&mut self, opcode: Opcode, a: Operand, b: Operand, word_a: u16, word_b: u16) {
        let a_value = self.read_a(a, word_a);
        let slot = self.resolve_b(b, word_b);
        let b_value = self.read_slot(slot);

        let (new_b, new_ex) = alu(opcode, b_value, a_value, self.ex);
        self.write_slot(slot, new_b);
        self.ex = new_ex;

        match opcode {
            Opcode::STI => {
                self.registers[RegisterId::I.index()] =
                    self.registers[RegisterId::I.index()].wrapping_add(1);
                self.registers[RegisterId::J.index()] =
                    self.registers[RegisterId::J.index()].wrapping_add(1);
            }
            Opcode::STD => {
                self.registers[RegisterId::I.index()] =
                    self.registers[RegisterId::I.index()].wrapping_sub(1);
                self.registers[RegisterId::J.index()] =
                    self.registers[RegisterId::J.index()].wrapping_sub(1);
            }
            _ => {}
        }
    }

    /// The single-operand special forms. Only `JSR` (push/jump) and
    /// `IAG`/`IAS` (read/write `IA`) touch machine state; the rest consume
    /// their operand and do nothing else.
    fn execute_special(&mut self, opcode: Opcode, a: Operand, word_a: u16) {
        match opcode {
            Opcode::JSR => {
                let target = self.read_a(a, word_a);
                self.sp = self.sp.wrapping_sub(1);
                let return_address = self.pc;
                self.memory.write(self.sp, return_address);
                self.pc = target;
            }
            Opcode::IAG => {
                let slot = self.resolve_b(a, word_a);
                let ia = self.ia;
                self.write_slot(slot, ia);
            }
            Opcode::IAS => {
                self.ia = self.read_a(a, word_a);
            }
            Opcode::INT | Opcode::RFI | Opcode::IAQ | Opcode::HWN | Opcode::HWQ | Opcode::HWI => {
                self.read_a(a, word_a);
            }
            _ => unreachable!("{:?} is not a special opcode", opcode),
        }
    }

    /// Resolves operand A to its value. Evaluated before operand B, so
    /// `SET PUSH, POP` pops here before [`Cpu::resolve_b`] can push.
    fn read_a(&mut self, operand: Operand, word: u16) -> u16 {
        match operand {
            Operand::Register(r) => self.registers[r.index()],
            Operand::RegisterIndirect(r) => self.memory.read(self.registers[r.index()]),
            Operand::RegisterIndirectOffset(r) => {
                let address = self.registers[r.index()].wrapping_add(word);
                self.memory.read(address)
            }
            Operand::PushPop => {
                let value = self.memory.read(self.sp);
                self.sp = self.sp.wrapping_add(1);
                value
            }
            Operand::Peek => self.memory.read(self.sp),
            Operand::Pick => self.memory.read(self.sp.wrapping_add(word)),
            Operand::Sp => self.sp,
            Operand::Pc => self.pc,
            Operand::Ex => self.ex,
            Operand::MemoryNextWord => self.memory.read(word),
            Operand::NextWordLiteral => word,
            Operand::InlineLiteral(n) => n as u16,
        }
    }

    /// Resolves operand B to a writable slot, performing any addressing
    /// side effect (the push predecrement) exactly once.
    fn resolve_b(&mut self, operand: Operand, word: u16) -> Slot {
        match operand {
            Operand::Register(r) => Slot::Register(r),
            Operand::RegisterIndirect(r) => Slot::Memory(self.registers[r.index()]),
            Operand::RegisterIndirectOffset(r) => {
                Slot::Memory(self.registers[r.index()].wrapping_add(word))
            }
            Operand::PushPop => {
                self.sp = self.sp.wrapping_sub(1);
                Slot::Memory(self.sp)
            }
            Operand::Peek => Slot::Memory(self.sp),
            Operand::Pick => Slot::Memory(self.sp.wrapping_add(word)),
            Operand::Sp => Slot::Sp,
            Operand::Pc => Slot::Pc,
            Operand::Ex => Slot::Ex,
            Operand::MemoryNextWord => Slot::Memory(word),
            Operand::NextWordLiteral => Slot::Literal(word),
            Operand::InlineLiteral(n) => Slot::Literal(n as u16),
        }
    }

    fn read_slot(&self, slot: Slot) -> u16 {
        match slot {
            Slot::Register(r) => self.registers[r.index()],
            Slot::Memory(address) => self.memory.read(address),
            Slot::Sp => self.sp,
            Slot::Pc => self.pc,
            Slot::Ex => self.ex,
            Slot::Literal(value) => value,
        }
    }

    fn write_slot(&mut self, slot: Slot, value: u16) {
        match slot {
            Slot::Register(r) => self.registers[r.index()] = value,
            Slot::Memory(address) => self.memory.write(address, value),
            Slot::Sp => self.sp = value,
            Slot::Pc => self.pc = value,
            Slot::Ex => self.ex = value,
            Slot::Literal(_) => {}
        }
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}

fn condition(opcode: Opcode, b: u16, a: u16) -> bool {
    match opcode {
        Opcode::IFB => (b & a) != 0,
        Opcode::IFC => (b & a) == 0,
        Opcode::IFE => b == a,
        Opcode::IFN => b != a,
        Opcode::IFG => b > a,
        Opcode::IFA => (b as i16) > (a as i16),
        Opcode::IFL => b < a,
        Opcode::IFU => (b as i16) < (a as i16),
        _ => unreachable!("{:?} is not a conditional opcode", opcode),
    }
}

/// Pure arithmetic/logic/shift step: given the old `b`, `a` and `EX`,
/// returns the new `b` and `EX`. Opcodes that don't touch `EX` pass it
/// through unchanged.
fn alu(opcode: Opcode, b: u16, a: u16, ex: u16) -> (u16, u16) {
    match opcode {
        Opcode::SET => (a, ex),
        Opcode::ADD => {
            let sum = b as u32 + a as u32;
            (sum as u16, if sum > 0xFFFF { 1 } else { 0 })
        }
        Opcode::SUB => {
            let diff = b as i32 - a as i32;
            (diff as u16, if diff < 0 { 0xFFFF } else { 0 })
        }
        Opcode::MUL => {
            let product = b as u32 * a as u32;
            (product as u16, (product >> 16) as u16)
        }
        Opcode::MLI => {
            let product = (b as i16 as i32) * (a as i16 as i32);
            (product as u16, ((product >> 16) & 0xFFFF) as u16)
        }
        Opcode::DIV => {
            if a == 0 {
                (0, 0)
            } else {
                let quotient = b as u32 / a as u32;
                let ex = (((b as u64) << 16) / a as u64) as u16;
                (quotient as u16, ex)
            }
        }
        Opcode::DVI => {
            if a == 0 {
                (0, 0)
            } else {
                let bi = b as i16 as i64;
                let ai = a as i16 as i64;
                let quotient = bi / ai;
                let ex = ((bi << 16) / ai) as u16;
                (quotient as u16, ex)
            }
        }
        Opcode::MOD => (if a == 0 { 0 } else { b % a }, ex),
        Opcode::MDI => {
            if a == 0 {
                (0, ex)
            } else {
                let bi = b as i16 as i32;
                let ai = a as i16 as i32;
                ((bi % ai) as u16, ex)
            }
        }
        Opcode::AND => (b & a, ex),
        Opcode::BOR => (b | a, ex),
        Opcode::XOR => (b ^ a, ex),
        Opcode::SHR => shr(b, a),
        Opcode::ASR => asr(b, a),
        Opcode::SHL => shl(b, a),
        Opcode::ADX => {
            let sum = b as u32 + a as u32 + ex as u32;
            (sum as u16, if sum > 0xFFFF { 1 } else { 0 })
        }
        Opcode::SBX => {
            let diff = b as i64 - a as i64 + ex as i64;
            let new_ex = if diff < 0 {
                0xFFFF
            } else if diff > 0xFFFF {
                0x0001
            } else {
                0
            };
            (diff as u16, new_ex)
        }
        Opcode::STI | Opcode::STD => (a, ex),
        _ => unreachable!("{:?} is not a basic ALU opcode", opcode),
    }
}

fn shr(b: u16, a: u16) -> (u16, u16) {
    let amount = a as u32;
    let new_b = if amount >= 16 { 0 } else { (b as u32) >> amount };
    let wide = (b as u32) << 16;
    let shifted = if amount >= 32 { 0 } else { wide >> amount };
    (new_b as u16, (shifted & 0xFFFF) as u16)
}

fn asr(b: u16, a: u16) -> (u16, u16) {
    let bi = b as i16 as i32;
    let amount = (a as u32).min(31);
    let new_b = bi >> amount;

    let wide = (bi as i64) << 16;
    let wide_amount = (a as u64).min(63) as u32;
    let shifted = wide >> wide_amount;

    (new_b as u16, (shifted & 0xFFFF) as u16)
}

fn shl(b: u16, a: u16) -> (u16, u16) {
    let amount = a as u32;
    let wide = if amount >= 32 { 0 } else { (b as u32) << amount };
    ((wide & 0xFFFF) as u16, ((wide >> 16) & 0xFFFF) as u16)
}
