use crate::errors::*;
use crate::lexer::*;
use LangErrorMsg::{UnexpectedEndOfFile, UnexpectedToken};

/// Cursor over a token list used by the compiler.
#[derive(Debug, Copy, Clone)]
pub struct TokenFeeder<'a> {
    /// Tokens to feed.
    tokens: &'a [Token],
    /// Index of the "current" token (None = before start).
    cursor: Option<usize>,
}
impl<'a> From<&'a [Token]> for TokenFeeder<'a> {
    fn from(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            cursor: None,
        }
    }
}
impl<'a> TokenFeeder<'a> {
    /// Moves the cursor to the next token.
    ///
    /// Fails with `UnexpectedEndOfFile` if there is no next token, in which
    /// case the cursor stays where it was.
    pub fn advance(&mut self) -> LangResult<()> {
        // Add 1 or set to zero.
        let next = self.cursor.map(|idx| idx + 1).unwrap_or(0);
        if next >= self.tokens.len() {
            return self.err(UnexpectedEndOfFile);
        }
        self.cursor = Some(next);
        Ok(())
    }
    /// Advances past the current token if it has the given category, or fails
    /// with `UnexpectedToken` if it does not.
    pub fn expect(&mut self, category: TokenCategory) -> LangResult<()> {
        if self.category() == Some(category) {
            self.advance()
        } else {
            self.err(UnexpectedToken(Expected::Category(category)))
        }
    }

    /// Returns the token at the cursor.
    pub fn current(self) -> Option<&'a Token> {
        self.cursor.and_then(|idx| self.tokens.get(idx))
    }
    /// Returns the category of the token at the cursor.
    pub fn category(self) -> Option<TokenCategory> {
        self.current().map(|t| t.category)
    }
    /// Returns the lexeme of the token at the cursor, or an empty string if
    /// there is none.
    pub fn lexeme(self) -> &'a str {
        self.current().map(|t| t.lexeme.as_str()).unwrap_or_default()
    }

    /// Attaches the current token to the given error message and returns it as
    /// a `LangResult`.
    pub fn err<T>(self, msg: LangErrorMsg) -> LangResult<T> {
        Err(self.error(msg))
    }
    /// Attaches the current token to the given error message.
    pub fn error(self, msg: LangErrorMsg) -> LangError {
        match self.current() {
            Some(token) => msg.with_token(token),
            None => msg.without_token(),
        }
    }
}
