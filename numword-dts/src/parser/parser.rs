use super::ast::*;
use crate::error::DtsError;
use crate::lexer::{Lexer, Token};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            tokens: Vec::new(),
            pos: 0,
        }
    }

    pub fn parse(&mut self) -> Result<DtsFile, DtsError> {
        // Lexer errors surface before any structural error
        self.tokens.clear();
        while let Some(token) = self.lexer.next_token()? {
            self.tokens.push((token, self.lexer.current_line()));
        }
        self.pos = 0;

        let mut ast = DtsFile::new();

        while let Some(token) = self.current() {
            match token {
                Token::Slash => {
                    let line = self.line();
                    self.advance();
                    let (properties, children) = self.parse_node_body()?;
                    ast.nodes.push(Node {
                        label: None,
                        name: "/".to_string(),
                        properties,
                        children,
                        line,
                    });
                }
                Token::Ampersand => {
                    let line = self.line();
                    self.advance();
                    let label = self.expect_identifier("label after '&'")?;
                    let (properties, children) = self.parse_node_body()?;
                    ast.overrides.push(NodeOverride {
                        label,
                        properties,
                        children,
                        line,
                    });
                }
                Token::Identifier(_) => {
                    let node = self.parse_node()?;
                    ast.nodes.push(node);
                }
                _ => return Err(self.unexpected("node")),
            }
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self, expected: &str) -> DtsError {
        let message = match self.current() {
            Some(token) => format!("Expected {}, found {:?}", expected, token),
            None => format!("Expected {}, found end of input", expected),
        };
        DtsError::Parse {
            line: self.line(),
            message,
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), DtsError> {
        if self.current() != Some(&expected) {
            return Err(self.unexpected(&format!("{:?}", expected)));
        }
        self.advance();
        Ok(())
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, DtsError> {
        match self.current() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    /// `[label:] name { ... };`
    fn parse_node(&mut self) -> Result<Node, DtsError> {
        let line = self.line();
        let first = self.expect_identifier("node name")?;

        let (label, name) = if self.current() == Some(&Token::Colon) {
            self.advance();
            (Some(first), self.expect_identifier("node name after label")?)
        } else {
            (None, first)
        };

        let (properties, children) = self.parse_node_body()?;
        Ok(Node {
            label,
            name,
            properties,
            children,
            line,
        })
    }

    /// `{ (property | node)* };`
    fn parse_node_body(&mut self) -> Result<(Vec<Property>, Vec<Node>), DtsError> {
        self.expect(Token::LBrace)?;

        let mut properties = Vec::new();
        let mut children = Vec::new();

        loop {
            match self.current() {
                Some(Token::RBrace) => break,
                Some(Token::Identifier(_)) => {
                    let is_node = matches!(self.peek(1), Some(Token::Colon) | Some(Token::LBrace));
                    if is_node {
                        children.push(self.parse_node()?);
                    } else {
                        properties.push(self.parse_property()?);
                    }
                }
                _ => return Err(self.unexpected("property, child node or '}'")),
            }
        }

        self.expect(Token::RBrace)?;
        self.expect(Token::Semicolon)?;
        Ok((properties, children))
    }

    /// `name;` or `name = value, value;`
    fn parse_property(&mut self) -> Result<Property, DtsError> {
        let line = self.line();
        let name = self.expect_identifier("property name")?;
        let mut values = Vec::new();

        if self.current() == Some(&Token::Equals) {
            self.advance();
            values.push(self.parse_value()?);
            while self.current() == Some(&Token::Comma) {
                self.advance();
                values.push(self.parse_value()?);
            }
        }

        self.expect(Token::Semicolon)?;
        Ok(Property { name, values, line })
    }

    fn parse_value(&mut self) -> Result<PropertyValue, DtsError> {
        match self.current() {
            Some(Token::String(s)) => {
                let s = s.clone();
                self.advance();
                Ok(PropertyValue::String(s))
            }
            Some(Token::LAngle) => {
                self.advance();
                let mut cells = Vec::new();
                while self.current() != Some(&Token::RAngle) {
                    let line = self.line();
                    let cell = self.parse_cell()?;
                    cells.push(CellEntry { cell, line });
                }
                self.advance();
                Ok(PropertyValue::Cells(cells))
            }
            _ => Err(self.unexpected("string or '<'")),
        }
    }

    fn parse_cell(&mut self) -> Result<Cell, DtsError> {
        match self.current() {
            Some(Token::Number(Some(n))) => {
                let n = *n;
                self.advance();
                Ok(Cell::Number(n))
            }
            Some(Token::Number(None)) => Err(DtsError::Parse {
                line: self.line(),
                message: "Integer literal out of range".to_string(),
            }),
            Some(Token::Ampersand) => {
                self.advance();
                Ok(Cell::Reference(self.expect_identifier("label after '&'")?))
            }
            Some(Token::Identifier(_)) => {
                let name = self.expect_identifier("identifier")?;
                if self.current() == Some(&Token::LParen) {
                    self.advance();
                    let inner = self.parse_expression()?;
                    self.expect(Token::RParen)?;
                    Ok(Cell::Call(name, Box::new(inner)))
                } else {
                    Ok(Cell::Identifier(name))
                }
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected("cell value")),
        }
    }

    /// `cell ('|' cell)*`
    fn parse_expression(&mut self) -> Result<Cell, DtsError> {
        let mut terms = vec![self.parse_cell()?];
        while self.current() == Some(&Token::Pipe) {
            self.advance();
            terms.push(self.parse_cell()?);
        }

        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(Cell::Or(terms))
        }
    }
}
