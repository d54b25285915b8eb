//! Disassembler
//!
//! Decodes the instruction at a memory address into its mnemonic and operand
//! bytes. Used for per-instruction trace logging and by host tooling.

use std::fmt;

use crate::opcodes::OPCODE_TABLE;
use crate::MemoryBus;

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Memory address where this instruction starts
    pub address: u8,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic, or `None` for a byte with no opcode table entry
    pub mnemonic: Option<&'static str>,

    /// Operand bytes (0-2)
    pub operand_bytes: Vec<u8>,
}

impl DecodedInstruction {
    /// Total size in bytes. Unrecognized bytes count as one.
    pub fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic {
            Some(mnemonic) => {
                write!(f, "{}", mnemonic)?;
                for byte in &self.operand_bytes {
                    write!(f, " 0x{:02X}", byte)?;
                }
                Ok(())
            }
            None => write!(f, ".byte 0x{:02X}", self.opcode),
        }
    }
}

/// Decodes the instruction stored at `address`.
///
/// Operand addresses wrap past 0xFF.
///
/// # Examples
///
/// ```
/// use lib8bit::{disassemble_at, FlatMemory};
///
/// let mem = FlatMemory::with_image(&[0x0C, 0x00, 0x01, 0xFF]);
///
/// assert_eq!(disassemble_at(&mem, 0).to_string(), "ADD 0x00 0x01");
/// assert_eq!(disassemble_at(&mem, 3).to_string(), ".byte 0xFF");
/// ```
pub fn disassemble_at<M: MemoryBus>(memory: &M, address: u8) -> DecodedInstruction {
    let opcode = memory.read(address);

    match &OPCODE_TABLE[opcode as usize] {
        Some(metadata) => DecodedInstruction {
            address,
            opcode,
            mnemonic: Some(metadata.mnemonic),
            operand_bytes: (1..metadata.size_bytes)
                .map(|offset| memory.read(address.wrapping_add(offset)))
                .collect(),
        },
        None => DecodedInstruction {
            address,
            opcode,
            mnemonic: None,
            operand_bytes: Vec::new(),
        },
    }
}

/// Decodes `count` consecutive instructions starting at `start`.
pub fn disassemble<M: MemoryBus>(memory: &M, start: u8, count: usize) -> Vec<DecodedInstruction> {
    let mut address = start;
    let mut instructions = Vec::with_capacity(count);

    for _ in 0..count {
        let instr = disassemble_at(memory, address);
        address = address.wrapping_add(instr.size_bytes());
        instructions.push(instr);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_disassemble_sequence() {
        // SET 0, SAVE 5, PRN, HALT
        let mem = FlatMemory::with_image(&[0x02, 0x00, 0x04, 0x05, 0x06, 0x00]);

        let lines: Vec<String> = disassemble(&mem, 0, 4)
            .iter()
            .map(|instr| instr.to_string())
            .collect();

        assert_eq!(lines, vec!["SET 0x00", "SAVE 0x05", "PRN", "HALT"]);
    }

    #[test]
    fn test_operands_wrap_past_end() {
        let mut mem = FlatMemory::new();
        mem.write(0xFF, 0x0C); // ADD
        mem.write(0x00, 0x01);
        mem.write(0x01, 0x02);

        let instr = disassemble_at(&mem, 0xFF);

        assert_eq!(instr.operand_bytes, vec![0x01, 0x02]);
        assert_eq!(instr.size_bytes(), 3);
    }
}
