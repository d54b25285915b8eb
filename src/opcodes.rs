//! # Opcode Metadata Table
//!
//! The 256-entry opcode table is the single source of truth for decoding.
//! Each supported opcode maps to an [`Instruction`], its mnemonic, its size in
//! bytes (opcode plus operands) and how it moves the program counter.
//! Every other byte value maps to `None` and is a fatal decode error.
//!
//! The table is built once at compile time and never changes.

use crate::ExecutionError;

pub const HALT: u8 = 0b0000_0000;
pub const INIT: u8 = 0b0000_0001;
pub const SET: u8 = 0b0000_0010;
pub const SAVE: u8 = 0b0000_0100;
pub const MUL: u8 = 0b0000_0101;
pub const PRN: u8 = 0b0000_0110;
pub const LD: u8 = 0b0000_1000;
pub const ST: u8 = 0b0000_1001;
pub const PUSH: u8 = 0b0000_1010;
pub const POP: u8 = 0b0000_1011;
pub const ADD: u8 = 0b0000_1100;
pub const JMP: u8 = 0b0001_0001;
pub const JEQ: u8 = 0b0001_0011;
pub const JNE: u8 = 0b0001_0100;
pub const CMP: u8 = 0b0001_0110;

/// Decoded instruction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Halt,
    Init,
    Set,
    Save,
    Mul,
    Prn,
    Ld,
    St,
    Push,
    Pop,
    Add,
    Jmp,
    Jeq,
    Jne,
    Cmp,
}

/// How an instruction moves the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcAdvance {
    /// PC advances by the instruction size.
    Sequential,
    /// PC is set by the handler (jumps; conditional jumps fall through by size).
    Jump,
    /// PC does not move; the machine halts.
    Halt,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use lib8bit::{opcodes, Instruction, OPCODE_TABLE};
///
/// let add = OPCODE_TABLE[opcodes::ADD as usize].unwrap();
/// assert_eq!(add.mnemonic, "ADD");
/// assert_eq!(add.instruction, Instruction::Add);
/// assert_eq!(add.size_bytes, 3);
/// assert_eq!(add.operand_count(), 2);
///
/// assert!(OPCODE_TABLE[0xFF].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g. "SET", "ADD").
    pub mnemonic: &'static str,

    /// Which handler executes this opcode.
    pub instruction: Instruction,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// How the PC moves after execution.
    pub advance: PcAdvance,
}

impl OpcodeMetadata {
    const fn new(
        mnemonic: &'static str,
        instruction: Instruction,
        size_bytes: u8,
        advance: PcAdvance,
    ) -> Self {
        Self {
            mnemonic,
            instruction,
            size_bytes,
            advance,
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_count(&self) -> u8 {
        self.size_bytes - 1
    }
}

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use Instruction::*;
    use PcAdvance::{Jump, Sequential};

    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];

    table[HALT as usize] = Some(OpcodeMetadata::new("HALT", Halt, 1, PcAdvance::Halt));
    table[INIT as usize] = Some(OpcodeMetadata::new("INIT", Init, 1, Sequential));
    table[SET as usize] = Some(OpcodeMetadata::new("SET", Set, 2, Sequential));
    table[SAVE as usize] = Some(OpcodeMetadata::new("SAVE", Save, 2, Sequential));
    table[MUL as usize] = Some(OpcodeMetadata::new("MUL", Mul, 3, Sequential));
    table[PRN as usize] = Some(OpcodeMetadata::new("PRN", Prn, 1, Sequential));
    table[LD as usize] = Some(OpcodeMetadata::new("LD", Ld, 2, Sequential));
    table[ST as usize] = Some(OpcodeMetadata::new("ST", St, 2, Sequential));
    table[PUSH as usize] = Some(OpcodeMetadata::new("PUSH", Push, 1, Sequential));
    table[POP as usize] = Some(OpcodeMetadata::new("POP", Pop, 1, Sequential));
    table[ADD as usize] = Some(OpcodeMetadata::new("ADD", Add, 3, Sequential));
    table[JMP as usize] = Some(OpcodeMetadata::new("JMP", Jmp, 2, Jump));
    table[JEQ as usize] = Some(OpcodeMetadata::new("JEQ", Jeq, 2, Jump));
    table[JNE as usize] = Some(OpcodeMetadata::new("JNE", Jne, 2, Jump));
    table[CMP as usize] = Some(OpcodeMetadata::new("CMP", Cmp, 2, Sequential));

    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the metadata for `opcode` fetched at `pc`.
///
/// Returns [`ExecutionError::InvalidInstruction`] if the opcode has no entry.
///
/// # Examples
///
/// ```
/// use lib8bit::{dispatch, ExecutionError, Instruction};
///
/// assert_eq!(dispatch(0x00, 0).unwrap().instruction, Instruction::Halt);
/// assert_eq!(
///     dispatch(0xFF, 0x10),
///     Err(ExecutionError::InvalidInstruction { opcode: 0xFF, pc: 0x10 })
/// );
/// ```
pub fn dispatch(opcode: u8, pc: u8) -> Result<&'static OpcodeMetadata, ExecutionError> {
    OPCODE_TABLE[opcode as usize]
        .as_ref()
        .ok_or(ExecutionError::InvalidInstruction { opcode, pc })
}
