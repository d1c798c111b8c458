//! Error types shared by every stage of the pipeline.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;

use super::lexer::{Token, TokenCategory};

/// Exit status for errors reported before the program starts running.
pub const COMPILE_ERROR_EXIT_CODE: i32 = 1;
/// Exit status for reading a variable that was never given a value.
pub const UNINITIALIZED_EXIT_CODE: i32 = -1;

/// `Result` type alias for compile-time and runtime errors.
pub type LangResult<T> = Result<T, LangError>;

/// Error along with the token where it was detected, if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangError {
    /// Token on which the error was detected.
    pub token: Option<Token>,
    /// What went wrong.
    pub msg: LangErrorMsg,
}
impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.token {
            writeln!(
                f,
                "Error on '{}' {}",
                token.escaped_lexeme(),
                token.point(),
            )?;
        }
        write!(f, "{}", self.msg)
    }
}
impl Error for LangError {}
impl LangError {
    /// Returns the process exit status that should be used when this error
    /// ends the program.
    pub fn exit_code(&self) -> i32 {
        match self.msg {
            LangErrorMsg::UninitializedName(_) => UNINITIALIZED_EXIT_CODE,
            _ => COMPILE_ERROR_EXIT_CODE,
        }
    }
}

/// Something that went wrong while tokenizing, compiling, or running a
/// program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangErrorMsg {
    // Miscellaneous errors
    /// A bug in the compiler or VM, not in the user's code.
    InternalError(Cow<'static, str>),
    /// Program output could not be written.
    Output(String),

    // Compile errors
    /// Character that cannot begin any token.
    InvalidToken(char),
    /// The token stream ended in the middle of the program.
    UnexpectedEndOfFile,
    /// The grammar required something else at this point.
    UnexpectedToken(Expected),
    /// Name read before any assignment to it.
    UndefinedName(String),

    // Runtime errors
    /// Name slot read before a value was stored in it.
    UninitializedName(String),
}
impl fmt::Display for LangErrorMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InternalError(s) => {
                write!(f, "Internal error: {}\nThis is a bug in the interpreter, not your code.", s)
            }
            Self::Output(s) => write!(f, "Cannot write program output: {}", s),

            Self::InvalidToken(_) => write!(f, "Invalid token"),
            Self::UnexpectedEndOfFile => write!(f, "Unexpected end of file"),
            Self::UnexpectedToken(expected) => write!(f, "Expecting {}", expected),
            Self::UndefinedName(name) => write!(f, "Name {} is not defined", name),

            Self::UninitializedName(name) => write!(f, "No value for {}", name),
        }
    }
}
impl From<io::Error> for LangErrorMsg {
    fn from(error: io::Error) -> Self {
        Self::Output(error.to_string())
    }
}
impl LangErrorMsg {
    /// Attaches the token where this error was detected.
    pub fn with_token(self, token: &Token) -> LangError {
        LangError {
            token: Some(token.clone()),
            msg: self,
        }
    }
    /// Returns this error without any token attached.
    pub fn without_token(self) -> LangError {
        LangError {
            token: None,
            msg: self,
        }
    }
}

impl<T: Into<LangErrorMsg>> From<T> for LangError {
    fn from(msg: T) -> Self {
        msg.into().without_token()
    }
}

/// What the parser was looking for when it found something else.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A token of one specific category.
    Category(TokenCategory),
    /// The start of a statement (a name or `print`).
    Statement,
    /// The start of a factor.
    Factor,
}
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(TokenCategory::Eof) => write!(f, "end of file"),
            Self::Category(category) => write!(f, "{}", category),
            Self::Statement => write!(f, "stmt"),
            Self::Factor => write!(f, "factor"),
        }
    }
}

/// Returns an `InternalError` without any token attached.
pub fn internal_error(msg: impl Into<Cow<'static, str>>) -> LangError {
    LangErrorMsg::InternalError(msg.into()).without_token()
}
