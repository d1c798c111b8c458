//! Functions for tokenization.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::errors::*;
use crate::span::TextPoint;
use LangErrorMsg::InvalidToken;

/// The only reserved word.
const PRINT_KEYWORD: &str = "print";

lazy_static! {
    /// A regex that matches any line terminator: `\r\n`, `\r`, or `\n`.
    pub(crate) static ref NEWLINE_PATTERN: Regex = Regex::new("\r\n?|\n").unwrap();
}

/// Splits a string into tokens and returns them as a Vec ending with exactly
/// one EOF token.
pub fn tokenize(source_code: &str) -> LangResult<Vec<Token>> {
    Lexer::new(source_code).collect()
}

/// A single token, along with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number.
    pub column: usize,
    /// Classification of this token.
    pub category: TokenCategory,
    /// The text this token was scanned from.
    pub lexeme: String,
}
impl Token {
    /// Constructs a token starting at the given point.
    pub fn new(point: TextPoint, category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Self {
            line: point.line(),
            column: point.column(),
            category,
            lexeme: lexeme.into(),
        }
    }
    /// Returns the line and column of the first character of this token.
    pub fn point(&self) -> TextPoint {
        TextPoint(self.line, self.column)
    }
    /// Returns the lexeme with line terminators written as `\n`.
    pub fn escaped_lexeme(&self) -> String {
        self.lexeme.replace('\n', "\\n")
    }
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>4}  {:<14} {}",
            self.line,
            self.column,
            self.category.name(),
            self.escaped_lexeme(),
        )
    }
}

/// Classification of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// End of input.
    Eof,
    /// Keyword `print`.
    Print,
    /// Run of ASCII decimal digits.
    UnsignedInt,
    /// Identifier that is not a keyword.
    Name,
    /// `=`
    AssignOp,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// End of a non-blank line.
    Newline,
    /// Anything else.
    Error,
}
impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
impl TokenCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 12] = [
        Self::Eof,
        Self::Print,
        Self::UnsignedInt,
        Self::Name,
        Self::AssignOp,
        Self::LeftParen,
        Self::RightParen,
        Self::Plus,
        Self::Minus,
        Self::Times,
        Self::Newline,
        Self::Error,
    ];

    /// Returns the name shown for this category in traces and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Print => "print",
            Self::UnsignedInt => "UNSIGNEDINT",
            Self::Name => "NAME",
            Self::AssignOp => "ASSIGNOP",
            Self::LeftParen => "LEFTPAREN",
            Self::RightParen => "RIGHTPAREN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Newline => "NEWLINE",
            Self::Error => "ERROR",
        }
    }

    /// Returns the category of a one-character token, where `None` is the end
    /// of the input.
    fn from_small_token(ch: Option<char>) -> Option<Self> {
        match ch {
            Some('=') => Some(Self::AssignOp),
            Some('(') => Some(Self::LeftParen),
            Some(')') => Some(Self::RightParen),
            Some('+') => Some(Self::Plus),
            Some('-') => Some(Self::Minus),
            Some('*') => Some(Self::Times),
            Some('\n') => Some(Self::Newline),
            None => Some(Self::Eof),
            Some(_) => None,
        }
    }
}

/// Scanner that produces one token at a time.
///
/// After an error or the EOF token, the lexer produces nothing more.
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Source code, always ending with a line terminator.
    chars: Vec<char>,
    /// Index of the next character to read.
    index: usize,
    /// Line number of the most recently read character.
    line: usize,
    /// Column number of the most recently read character.
    column: usize,
    /// Most recently read character (`None` = end of input).
    prev_char: Option<char>,
    /// Whether everything read so far on this line is whitespace.
    blank_line: bool,
    /// Character under the cursor (`None` = end of input).
    current: Option<char>,
    /// Whether the lexer has produced EOF or an error.
    done: bool,
}
impl Lexer {
    /// Constructs a lexer for the given source code, appending a line
    /// terminator if it does not end with one.
    ///
    /// `\r\n` and a lone `\r` are both read as `\n`.
    pub fn new(source_code: &str) -> Self {
        let mut chars: Vec<char> = NEWLINE_PATTERN
            .replace_all(source_code, "\n")
            .chars()
            .collect();
        if chars.last() != Some(&'\n') {
            chars.push('\n');
        }
        Self {
            chars,
            index: 0,
            line: 0,
            column: 0,
            prev_char: Some('\n'),
            blank_line: true,
            // Prime the cursor with a space so that the first token skips it.
            current: Some(' '),
            done: false,
        }
    }

    /// Reads the next character, updating the line and column numbers.
    ///
    /// The terminator of a blank line is returned as a space.
    fn next_char(&mut self) -> Option<char> {
        if self.prev_char == Some('\n') {
            self.line += 1;
            self.column = 0;
            self.blank_line = true;
        }

        let c = match self.chars.get(self.index) {
            Some(&c) => c,
            None => {
                self.column = 1;
                self.prev_char = None;
                return None;
            }
        };
        self.index += 1;
        self.column += 1;
        if !c.is_whitespace() {
            self.blank_line = false;
        }
        self.prev_char = Some(c);

        if c == '\n' && self.blank_line {
            Some(' ')
        } else {
            Some(c)
        }
    }

    /// Skips whitespace other than line terminators.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.current = self.next_char();
        }
    }

    /// Consumes the longest run of characters starting at the cursor that
    /// match the predicate.
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut lexeme = String::new();
        while let Some(c) = self.current.filter(|&c| pred(c)) {
            lexeme.push(c);
            self.current = self.next_char();
        }
        lexeme
    }

    /// Scans the token starting at the cursor.
    fn scan_token(&mut self) -> LangResult<Token> {
        self.skip_whitespace();
        let start = TextPoint(self.line, self.column);

        match self.current {
            Some(c) if c.is_ascii_digit() => {
                let lexeme = self.read_while(|c| c.is_ascii_digit());
                Ok(Token::new(start, TokenCategory::UnsignedInt, lexeme))
            }
            Some(c) if c.is_alphabetic() || c == '_' => {
                let lexeme = self.read_while(|c| c.is_alphanumeric() || c == '_');
                let category = if lexeme == PRINT_KEYWORD {
                    TokenCategory::Print
                } else {
                    TokenCategory::Name
                };
                Ok(Token::new(start, category, lexeme))
            }
            ch => match TokenCategory::from_small_token(ch) {
                Some(category) => {
                    let lexeme = ch.map(String::from).unwrap_or_default();
                    if ch.is_some() {
                        self.current = self.next_char();
                    }
                    Ok(Token::new(start, category, lexeme))
                }
                None => {
                    let c = ch.unwrap_or_default();
                    let token = Token::new(start, TokenCategory::Error, c.to_string());
                    Err(InvalidToken(c).with_token(&token))
                }
            },
        }
    }
}
impl Iterator for Lexer {
    type Item = LangResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ret = self.scan_token();
        match &ret {
            Ok(token) if token.category != TokenCategory::Eof => (),
            _ => self.done = true,
        }
        Some(ret)
    }
}
