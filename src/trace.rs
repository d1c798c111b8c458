//! Debug trace of the source, tokens, and compiled code.

use chrono::Local;
use itertools::Itertools;
use std::io::{self, Write};

use crate::bytecode::CodeObject;
use crate::lexer::{Token, NEWLINE_PATTERN};

/// Width of each section header, including the title.
const HEADER_WIDTH: usize = 59;
/// Column ruler shown above the source listing.
const SOURCE_RULER: &str = "----1-3-5-7-9-1-3-5-7-9-1-3-5-7-9-1-3-5-7-9-1-";

/// Writer for the sections of the debug trace.
#[derive(Debug)]
pub struct Tracer<W> {
    out: W,
}
impl<W: Write> Tracer<W> {
    /// Constructs a tracer that writes to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
    /// Consumes the tracer and returns the writer, so that program output can
    /// follow the trace.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the current local time along with the interpreter and input file
    /// being run.
    pub fn banner(&mut self, interpreter: &str, input_file: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{:>34}",
            Local::now().format("%c"),
            concat!("hybrid v", env!("CARGO_PKG_VERSION")),
        )?;
        writeln!(self.out, "Interpreter = {}", interpreter)?;
        writeln!(self.out, "Input file  = {}", input_file)?;
        writeln!(self.out)
    }

    /// Writes the source code with a line number before each line.
    pub fn source(&mut self, source_code: &str) -> io::Result<()> {
        writeln!(self.out, "{} Source code", SOURCE_RULER)?;
        let mut lines = NEWLINE_PATTERN.split(source_code).collect_vec();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        for (i, line) in lines.into_iter().enumerate() {
            writeln!(self.out, "{:>3} {}", i + 1, line)?;
        }
        Ok(())
    }

    /// Writes the header of the token table.
    pub fn token_header(&mut self) -> io::Result<()> {
        self.section("Token trace")?;
        writeln!(self.out, "Line  Col Category    Lexeme")?;
        writeln!(self.out)
    }
    /// Writes one row of the token table.
    pub fn token(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.out, "{}", token)
    }

    /// Writes the name and constant tables, the raw code cells, and a
    /// disassembly of the code.
    pub fn code(&mut self, code: &CodeObject) -> io::Result<()> {
        self.section("Tables")?;
        writeln!(self.out, "co_names  = {}", code.names)?;
        writeln!(self.out, "co_consts = {}", code.consts)?;
        writeln!(self.out, "co_code   = [{}]", code.code.iter().join(", "))?;
        self.section("Disassembly")?;
        writeln!(self.out, "{}", code)
    }

    /// Writes the header that precedes program output.
    pub fn output_header(&mut self) -> io::Result<()> {
        self.section("Program output")?;
        self.out.flush()
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{:->width$}",
            format!(" {}", title),
            width = HEADER_WIDTH,
        )
    }
}
