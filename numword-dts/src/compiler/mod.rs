mod compiler;

pub use compiler::{BehaviorDefinition, Compiler, MAX_LAYER, NUM_WORD_COMPATIBLE};
