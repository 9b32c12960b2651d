use logos::{FilterResult, Logos};

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments, whitespace and preprocessor includes (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", block_comment)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[regex(r"#include[^\n]*", logos::skip, priority = 10)]
    Comment,

    // Delimiters
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Operators and separators
    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    #[token("&")]
    Ampersand,

    #[token("/")]
    Slash,

    // Integer cells
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| i64::from_str_radix(&lex.slice()[2..], 16).ok())]
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(Option<i64>),

    // String literals
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    // Node names, labels, property names and key names
    #[regex(r"[a-zA-Z_#][a-zA-Z0-9_,.+\-#@]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

/// Skip to the closing `*/`; an unterminated comment is a lex error
fn block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => FilterResult::Error(()),
    }
}
