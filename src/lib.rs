//! Tokenizer, single-pass bytecode compiler, and stack machine for a tiny
//! language of integer assignments and `print` statements.
//!
//! ```
//! let mut out: Vec<u8> = vec![];
//! hybrid::compile_and_run("x = 3 + 4\nprint(x * -2)\n", &mut out).unwrap();
//! assert_eq!(b"-14\n", &out[..]);
//! ```
#![warn(missing_docs)]

use log::debug;
use std::io::Write;

pub mod bytecode;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod runtime;
pub mod span;
pub mod trace;

#[cfg(test)]
mod tests;

pub use bytecode::{CodeObject, LangInt, Opcode};
pub use config::Config;
pub use errors::{LangError, LangErrorMsg, LangResult};
pub use runtime::Runtime;
pub use span::TextPoint;

use lexer::Lexer;
use trace::Tracer;

/// Tokenizes and compiles source code.
pub fn compile(source_code: &str) -> LangResult<CodeObject> {
    let tokens = lexer::tokenize(source_code)?;
    debug!("Tokenized {} tokens", tokens.len());
    compiler::compile(&tokens)
}

/// Runs compiled code, writing program output to `out`.
pub fn run(code: &CodeObject, out: impl Write) -> LangResult<()> {
    runtime::run(code, out)
}

/// Compiles and runs source code, writing program output to `out`.
///
/// Nothing is executed unless the whole program compiles.
pub fn compile_and_run(source_code: &str, out: impl Write) -> LangResult<()> {
    let code = compile(source_code)?;
    run(&code, out)
}

/// Compiles and runs source code like `compile_and_run()`, but first writes
/// the debug trace to `out`.
///
/// Tokens are traced as they are produced, so an invalid token appears after
/// every token before it.
pub fn compile_and_run_traced(source_code: &str, out: impl Write) -> LangResult<()> {
    let mut tracer = Tracer::new(out);
    tracer.source(source_code)?;

    tracer.token_header()?;
    let mut tokens = vec![];
    for token in Lexer::new(source_code) {
        let token = token?;
        tracer.token(&token)?;
        tokens.push(token);
    }
    debug!("Tokenized {} tokens", tokens.len());

    let code = compiler::compile(&tokens)?;
    tracer.code(&code)?;
    tracer.output_header()?;
    run(&code, tracer.into_inner())
}

/// Compiles and runs source code, with or without the debug trace depending on
/// the config.
pub fn run_with_config(config: &Config, source_code: &str, out: impl Write) -> LangResult<()> {
    if config.trace {
        compile_and_run_traced(source_code, out)
    } else {
        compile_and_run(source_code, out)
    }
}
