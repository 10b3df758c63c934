use byteorder::ByteOrder;
use util::Endian;

use crate::constants::MEMORY_WORDS;

/// The DCPU-16's address space: 65,536 16-bit cells, zero-initialised.
/// Every `u16` address is valid by construction, so reads and writes never
/// fail.
pub struct Memory {
    words: Vec<u16>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            words: vec![0; MEMORY_WORDS],
        }
    }

    pub fn read(&self, address: u16) -> u16 {
        self.words[address as usize]
    }

    pub fn write(&mut self, address: u16, value: u16) {
        self.words[address as usize] = value;
    }

    /// Loads a little-endian byte stream into memory starting at address 0,
    /// two bytes per word. Returns the number of words loaded.
    ///
    /// A trailing odd byte (not a full word) is ignored.
    pub fn load(&mut self, program: &[u8]) -> usize {
        let mut word_count = 0;
        for (word, chunk) in self.words.iter_mut().zip(program.chunks_exact(2)) {
            *word = Endian::read_u16(chunk);
            word_count += 1;
        }
        word_count
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.words
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}
