pub mod lexer;
pub mod parser;
pub mod compiler;
pub mod error;

pub use compiler::{BehaviorDefinition, Compiler, NUM_WORD_COMPATIBLE};
pub use error::DtsError;

use std::fs::read_to_string;
use std::path::Path;

use numword_core::engine::InstanceRegistry;
use numword_core::{Host, NumWordEngine};

/// Parse devicetree source and compile every num-word behavior in it
pub fn compile_dts(input: &str) -> Result<Vec<BehaviorDefinition>, DtsError> {
    let mut parser = parser::Parser::new(input);
    let ast = parser.parse()?;

    let compiler = Compiler::new();
    compiler.compile(ast)
}

pub fn compile_dts_file(input_path: &Path) -> Result<Vec<BehaviorDefinition>, DtsError> {
    let input = read_to_string(input_path)?;
    compile_dts(&input)
}

/// Register compiled behaviors at their slots
pub fn build_registry(definitions: &[BehaviorDefinition]) -> Result<InstanceRegistry, DtsError> {
    let mut builder = InstanceRegistry::builder(definitions.len());
    for definition in definitions {
        builder.register(definition.slot, definition.config.clone())?;
    }
    Ok(builder.build())
}

/// Compile a devicetree file straight into a ready engine
pub fn load_engine<H: Host>(input_path: &Path, host: H) -> Result<NumWordEngine<H>, DtsError> {
    let definitions = compile_dts_file(input_path)?;
    Ok(NumWordEngine::new(build_registry(&definitions)?, host))
}
