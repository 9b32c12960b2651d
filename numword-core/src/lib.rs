pub mod types;
pub mod error;
pub mod engine;
pub mod host;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use engine::{
    BehaviorResult, ContinuationRule, Event, EventResult, KeycodeStateChanged, NumWordConfig,
    NumWordEngine,
};
pub use host::{HidState, Host, Keymap, VirtualHost};
