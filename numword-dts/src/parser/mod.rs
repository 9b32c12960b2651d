mod ast;
mod parser;

pub use ast::*;
pub use parser::Parser;
