//! Stack machine that executes compiled code.

use log::{debug, trace, warn};
use std::io::Write;

use crate::bytecode::{CodeObject, Instruction, LangInt, Opcode};
use crate::errors::*;

/// Executes a code object from start to finish, writing program output to
/// `out`.
pub fn run(code: &CodeObject, out: impl Write) -> LangResult<()> {
    Runtime::new(code, out).run()
}

/// Execution state for a single code object.
#[derive(Debug)]
pub struct Runtime<'a, W> {
    /// Code being executed.
    code: &'a CodeObject,
    /// Offset of the instruction to execute next.
    instruction_pointer: usize,
    /// Operand stack.
    stack: Vec<LangInt>,
    /// Value of each name, indexed the same as the name table.
    slots: Vec<Option<LangInt>>,
    /// Destination for program output.
    out: W,
}
impl<'a, W: Write> Runtime<'a, W> {
    /// Constructs a runtime positioned at the start of the code, with every
    /// name unset.
    pub fn new(code: &'a CodeObject, out: W) -> Self {
        Self {
            code,
            instruction_pointer: 0,
            stack: vec![],
            slots: vec![None; code.names.len()],
            out,
        }
    }

    /// Returns the offset of the instruction to execute next.
    pub fn instruction_pointer(&self) -> usize {
        self.instruction_pointer
    }
    /// Returns the operand stack, bottom first.
    pub fn stack(&self) -> &[LangInt] {
        &self.stack
    }
    /// Returns the value of the name with the given index, if it has one.
    pub fn value_of(&self, id: usize) -> Option<&LangInt> {
        self.slots.get(id).and_then(Option::as_ref)
    }
    /// Consumes the runtime and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes instructions until the code halts.
    pub fn run(&mut self) -> LangResult<()> {
        debug!("Running {} code cells", self.code.code.len());
        while self.step()? {}
        self.out.flush()?;
        if !self.stack.is_empty() {
            warn!(
                "Operand stack holds {} values after execution",
                self.stack.len()
            );
        }
        debug!("Finished running");
        Ok(())
    }

    /// Executes a single instruction. Returns `false` if the code has halted,
    /// either by running off the end or by reaching an unknown opcode.
    pub fn step(&mut self) -> LangResult<bool> {
        let instr = match self.code.decode(self.instruction_pointer)? {
            Some(instr) => instr,
            None => return Ok(false),
        };
        trace!("{:>4} {} {:?}", instr.offset, instr.opcode, instr.operand);

        match instr.opcode {
            Opcode::UnaryNegative => {
                let arg = self.pop()?;
                self.stack.push(-arg);
            }
            Opcode::BinaryMultiply => {
                let (arg2, arg1) = (self.pop()?, self.pop()?);
                self.stack.push(arg1 * arg2);
            }
            Opcode::BinaryAdd => {
                let (arg2, arg1) = (self.pop()?, self.pop()?);
                self.stack.push(arg1 + arg2);
            }
            Opcode::PrintItem => {
                let arg = self.pop()?;
                write!(self.out, "{}", arg)?;
            }
            Opcode::PrintNewline => writeln!(self.out)?,
            Opcode::StoreName => {
                let id = self.operand(instr)?;
                let arg = self.pop()?;
                match self.slots.get_mut(id) {
                    Some(slot) => *slot = Some(arg),
                    None => return Err(internal_error(format!("No name slot {}", id))),
                }
            }
            Opcode::LoadConst => {
                let id = self.operand(instr)?;
                let value = self
                    .code
                    .consts
                    .get(id)
                    .ok_or_else(|| internal_error(format!("No constant {}", id)))?;
                self.stack.push(value.clone());
            }
            Opcode::LoadName => {
                let id = self.operand(instr)?;
                let value = match self.slots.get(id) {
                    Some(Some(value)) => value.clone(),
                    Some(None) => {
                        let name = self.code.names[id].clone();
                        return Err(LangErrorMsg::UninitializedName(name).without_token());
                    }
                    None => return Err(internal_error(format!("No name {}", id))),
                };
                self.stack.push(value);
            }
        }

        self.instruction_pointer = instr.next_offset();
        Ok(true)
    }

    fn pop(&mut self) -> LangResult<LangInt> {
        self.stack.pop().ok_or_else(|| {
            internal_error(format!(
                "Operand stack underflow at offset {}",
                self.instruction_pointer
            ))
        })
    }
    fn operand(&self, instr: Instruction) -> LangResult<usize> {
        instr
            .operand
            .ok_or_else(|| internal_error(format!("{} has no operand", instr.opcode)))
    }
}
