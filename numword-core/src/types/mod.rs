pub mod keycode;
pub mod modifiers;
pub mod usage;

pub use keycode::*;
pub use modifiers::*;
pub use usage::*;
