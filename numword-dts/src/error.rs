use thiserror::Error;

#[derive(Error, Debug)]
pub enum DtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown key or constant at line {line}: {name}")]
    UnknownKey { line: usize, name: String },

    #[error("Reference to undefined label: &{0}")]
    UnknownLabel(String),

    #[error("Invalid property '{property}' on node '{node}': {message}")]
    InvalidProperty {
        node: String,
        property: String,
        message: String,
    },

    #[error(transparent)]
    Core(#[from] numword_core::Error),
}
