//! Recursive-descent compiler that emits bytecode directly from tokens.
//!
//! Grammar:
//!
//! ```text
//! program    := stmt* EOF
//! stmt       := simplestmt NEWLINE
//! simplestmt := assignment | printstmt
//! assignment := NAME ASSIGNOP expr
//! printstmt  := PRINT LEFTPAREN expr RIGHTPAREN
//! expr       := term (PLUS term)*
//! term       := factor (TIMES factor)*
//! factor     := PLUS factor | MINUS factor | UNSIGNEDINT | NAME | LEFTPAREN expr RIGHTPAREN
//! ```

use log::debug;

mod feeder;
mod table;

pub use feeder::TokenFeeder;
pub use table::Table;

use crate::bytecode::{CodeObject, LangInt, Opcode};
use crate::errors::*;
use crate::lexer::{Token, TokenCategory};
use LangErrorMsg::{UndefinedName, UnexpectedToken};
use TokenCategory::*;

/// Compiles a list of tokens ending with EOF into a code object.
pub fn compile(tokens: &[Token]) -> LangResult<CodeObject> {
    debug!("Compiling {} tokens", tokens.len());
    let mut compiler = Compiler::new(tokens);
    compiler.program()?;
    let code = compiler.code;
    debug!(
        "Compiled {} names, {} constants, {} code cells",
        code.names.len(),
        code.consts.len(),
        code.code.len(),
    );
    Ok(code)
}

/// Parser state along with the code generated so far.
#[derive(Debug)]
struct Compiler<'a> {
    feeder: TokenFeeder<'a>,
    code: CodeObject,
}
impl<'a> Compiler<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            feeder: TokenFeeder::from(tokens),
            code: CodeObject::new(),
        }
    }

    fn program(&mut self) -> LangResult<()> {
        // Move onto the first token.
        self.feeder.advance()?;
        while matches!(self.feeder.category(), Some(Name) | Some(Print)) {
            self.stmt()?;
        }
        if self.feeder.category() != Some(Eof) {
            return self.feeder.err(UnexpectedToken(Expected::Category(Eof)));
        }
        Ok(())
    }

    fn stmt(&mut self) -> LangResult<()> {
        self.simplestmt()?;
        self.feeder.expect(Newline)
    }

    fn simplestmt(&mut self) -> LangResult<()> {
        match self.feeder.category() {
            Some(Name) => self.assignment(),
            Some(Print) => self.print_stmt(),
            _ => self.feeder.err(UnexpectedToken(Expected::Statement)),
        }
    }

    fn assignment(&mut self) -> LangResult<()> {
        // The target is registered before the right-hand side is compiled, so
        // `x = x` compiles and fails at run time instead.
        let id = self.code.names.register(self.feeder.lexeme().to_owned());
        self.feeder.advance()?;
        self.feeder.expect(AssignOp)?;
        self.expr()?;
        self.code.emit_with(Opcode::StoreName, id);
        Ok(())
    }

    fn print_stmt(&mut self) -> LangResult<()> {
        self.feeder.advance()?;
        self.feeder.expect(LeftParen)?;
        self.expr()?;
        self.code.emit(Opcode::PrintItem);
        self.code.emit(Opcode::PrintNewline);
        self.feeder.expect(RightParen)
    }

    fn expr(&mut self) -> LangResult<()> {
        self.term()?;
        while self.feeder.category() == Some(Plus) {
            self.feeder.advance()?;
            self.term()?;
            self.code.emit(Opcode::BinaryAdd);
        }
        Ok(())
    }

    fn term(&mut self) -> LangResult<()> {
        self.factor(false)?;
        while self.feeder.category() == Some(Times) {
            self.feeder.advance()?;
            self.factor(false)?;
            self.code.emit(Opcode::BinaryMultiply);
        }
        Ok(())
    }

    /// Compiles a single factor, negating it if `negate` is true.
    ///
    /// Literals have the sign folded into the constant; names and
    /// parenthesized expressions are followed by `UNARY_NEGATIVE` instead.
    fn factor(&mut self, negate: bool) -> LangResult<()> {
        match self.feeder.category() {
            Some(Plus) => {
                self.feeder.advance()?;
                self.factor(negate)
            }
            Some(Minus) => {
                self.feeder.advance()?;
                self.factor(!negate)
            }
            Some(UnsignedInt) => {
                let mut value: LangInt = self.feeder.lexeme().parse().map_err(|_| {
                    self.feeder.error(LangErrorMsg::InternalError(
                        "Integer literal is not a digit string".into(),
                    ))
                })?;
                if negate {
                    value = -value;
                }
                let id = self.code.consts.register(value);
                self.code.emit_with(Opcode::LoadConst, id);
                self.feeder.advance()
            }
            Some(Name) => {
                let name = self.feeder.lexeme();
                let id = match self.code.names.id_of(name) {
                    Some(id) => id,
                    None => return self.feeder.err(UndefinedName(name.to_owned())),
                };
                self.code.emit_with(Opcode::LoadName, id);
                if negate {
                    self.code.emit(Opcode::UnaryNegative);
                }
                self.feeder.advance()
            }
            Some(LeftParen) => {
                self.feeder.advance()?;
                self.expr()?;
                if negate {
                    self.code.emit(Opcode::UnaryNegative);
                }
                self.feeder.expect(RightParen)
            }
            _ => self.feeder.err(UnexpectedToken(Expected::Factor)),
        }
    }
}
