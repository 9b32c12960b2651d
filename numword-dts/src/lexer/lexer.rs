use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::error::DtsError;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    /// Input offset up to which newlines are already counted
    counted_to: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            counted_to: 0,
            input,
        }
    }

    /// Next token; afterwards `current_line` is the line the token starts on
    pub fn next_token(&mut self) -> Result<Option<Token>, DtsError> {
        match self.inner.next() {
            Some(Ok(token)) => {
                self.advance_line_to(self.inner.span().start);
                Ok(Some(token))
            }
            Some(Err(())) => {
                let span = self.inner.span();
                self.advance_line_to(span.start);
                let text = &self.input[span];
                let message = if text.starts_with("/*") {
                    "Unterminated block comment".to_string()
                } else {
                    format!("Unexpected token: '{}'", text)
                };
                Err(DtsError::Parse {
                    line: self.current_line,
                    message,
                })
            }
            None => Ok(None),
        }
    }

    // Counts newlines in skipped text and inside the previous token
    fn advance_line_to(&mut self, pos: usize) {
        self.current_line += self.input[self.counted_to..pos].matches('\n').count();
        self.counted_to = pos;
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, DtsError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
