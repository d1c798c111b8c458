use std::convert::TryFrom;
use std::fmt;

/// Bytecode instruction tag, stored in the code stream as its numeric value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Pop an integer a off the stack and push -a onto the stack.
    UnaryNegative = 11,
    /// Pop two integers b and a off the stack and push a * b onto the stack.
    BinaryMultiply = 20,
    /// Pop two integers b and a off the stack and push a + b onto the stack.
    BinaryAdd = 23,
    /// Pop an integer off the stack and print it with no separator.
    PrintItem = 71,
    /// Print a line terminator.
    PrintNewline = 72,
    /// Pop an integer off the stack and store it in a name slot. Takes a name
    /// table index.
    StoreName = 90,
    /// Push a constant onto the stack. Takes a constant table index.
    LoadConst = 100,
    /// Push the value of a name slot onto the stack. Takes a name table index.
    LoadName = 101,
}
impl Opcode {
    /// Every opcode, in numeric order.
    pub const ALL: [Self; 8] = [
        Self::UnaryNegative,
        Self::BinaryMultiply,
        Self::BinaryAdd,
        Self::PrintItem,
        Self::PrintNewline,
        Self::StoreName,
        Self::LoadConst,
        Self::LoadName,
    ];

    /// Returns the name shown in disassembly listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnaryNegative => "UNARY_NEGATIVE",
            Self::BinaryMultiply => "BINARY_MULTIPLY",
            Self::BinaryAdd => "BINARY_ADD",
            Self::PrintItem => "PRINT_ITEM",
            Self::PrintNewline => "PRINT_NEWLINE",
            Self::StoreName => "STORE_NAME",
            Self::LoadConst => "LOAD_CONST",
            Self::LoadName => "LOAD_NAME",
        }
    }
    /// Returns which table the operand cell following this opcode indexes
    /// into, or `None` if this opcode takes no operand.
    pub fn operand(self) -> Option<OperandKind> {
        match self {
            Self::StoreName | Self::LoadName => Some(OperandKind::Name),
            Self::LoadConst => Some(OperandKind::Const),
            _ => None,
        }
    }
}
impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
impl From<Opcode> for usize {
    fn from(op: Opcode) -> usize {
        op as usize
    }
}
impl TryFrom<usize> for Opcode {
    type Error = usize;
    fn try_from(cell: usize) -> Result<Self, usize> {
        Self::ALL
            .iter()
            .copied()
            .find(|&op| usize::from(op) == cell)
            .ok_or(cell)
    }
}

/// Table that an operand cell refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Index into the name table.
    Name,
    /// Index into the constant table.
    Const,
}
