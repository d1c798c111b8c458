//! Compiled programs and the bytecode they are made of.

use itertools::Itertools;
use num::BigInt;
use std::convert::TryFrom;
use std::fmt;

mod opcode;

pub use opcode::*;

use crate::compiler::Table;
use crate::errors::*;

/// Integer type used for all values.
pub type LangInt = BigInt;

/// Output of the compiler: the code stream along with the tables its operands
/// index into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeObject {
    /// Variable names, indexed by `STORE_NAME` and `LOAD_NAME`.
    pub names: Table<String>,
    /// Integer constants, indexed by `LOAD_CONST`.
    pub consts: Table<LangInt>,
    /// Opcodes interleaved with their operands.
    pub code: Vec<usize>,
}
impl CodeObject {
    /// Constructs an empty code object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction that takes no operand.
    pub fn emit(&mut self, op: Opcode) {
        debug_assert!(op.operand().is_none(), "{} requires an operand", op);
        self.code.push(op.into());
    }
    /// Appends an instruction along with its operand.
    pub fn emit_with(&mut self, op: Opcode, operand: usize) {
        debug_assert!(op.operand().is_some(), "{} takes no operand", op);
        self.code.push(op.into());
        self.code.push(operand);
    }

    /// Returns the number of times the given opcode appears as an opcode (not
    /// as an operand) in the code stream.
    pub fn count(&self, op: Opcode) -> usize {
        self.instructions()
            .filter(|instr| instr.opcode == op)
            .count()
    }

    /// Decodes the instruction at the given offset.
    ///
    /// Returns `Ok(None)` if the offset is past the end of the code or the cell
    /// there is not a known opcode; either of these halts execution.
    pub fn decode(&self, offset: usize) -> LangResult<Option<Instruction>> {
        let cell = match self.code.get(offset) {
            Some(&cell) => cell,
            None => return Ok(None),
        };
        let opcode = match Opcode::try_from(cell) {
            Ok(op) => op,
            Err(_) => return Ok(None),
        };
        let operand = match opcode.operand() {
            Some(_) => Some(*self.code.get(offset + 1).ok_or_else(|| {
                internal_error(format!("{} at offset {} has no operand", opcode, offset))
            })?),
            None => None,
        };
        Ok(Some(Instruction {
            offset,
            opcode,
            operand,
        }))
    }
    /// Iterates over decoded instructions from the start of the code, stopping
    /// wherever execution would halt.
    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        let mut offset = 0;
        std::iter::from_fn(move || {
            let instr = self.decode(offset).ok().flatten()?;
            offset = instr.next_offset();
            Some(instr)
        })
    }

    /// Returns a human-readable description of what an instruction's operand
    /// refers to.
    fn describe_operand(&self, instr: Instruction) -> Option<String> {
        let operand = instr.operand?;
        Some(match instr.opcode.operand()? {
            OperandKind::Name => match self.names.get(operand) {
                Some(name) => format!("{:<4} ({})", operand, name),
                None => format!("{:<4} (<invalid name>)", operand),
            },
            OperandKind::Const => match self.consts.get(operand) {
                Some(value) => format!("{:<4} ({})", operand, value),
                None => format!("{:<4} (<invalid constant>)", operand),
            },
        })
    }
}
impl fmt::Display for CodeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code [")?;
        writeln!(f, "  Names [{}]", self.names.iter().join(", "))?;
        writeln!(f, "  Constants [{}]", self.consts.iter().join(", "))?;
        writeln!(f, "  Instructions [")?;
        for instr in self.instructions() {
            match self.describe_operand(instr) {
                Some(operand) => writeln!(
                    f,
                    "    {:<4}  {:<16} {}",
                    instr.offset, instr.opcode, operand
                )?,
                None => writeln!(f, "    {:<4}  {}", instr.offset, instr.opcode)?,
            }
        }
        writeln!(f, "  ]")?;
        write!(f, "]")?;
        Ok(())
    }
}

/// Single decoded instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Offset of the opcode in the code stream.
    pub offset: usize,
    /// What to do.
    pub opcode: Opcode,
    /// Table index following the opcode, if the opcode takes one.
    pub operand: Option<usize>,
}
impl Instruction {
    /// Returns the offset of the instruction after this one.
    pub fn next_offset(self) -> usize {
        self.offset + 1 + self.operand.map_or(0, |_| 1)
    }
}
