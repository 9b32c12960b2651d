//! Num-word engine - keystroke classification and activation control
//!
//! While an instance is active, alphabetic key presses get the instance's
//! modifiers stamped on them, and any press that is neither ignored nor on the
//! instance's continuation list turns the instance off again.

pub mod classify;
mod config;
mod controller;
mod engine;
mod event;
pub mod listener;
mod matcher;
mod registry;
mod state;

pub use config::{ContinuationRule, NumWordConfig};
pub use controller::NumWordInstance;
pub use engine::NumWordEngine;
pub use event::{BehaviorResult, Event, EventResult, KeycodeStateChanged};
pub use matcher::ContinuationMatcher;
pub use registry::{InstanceRegistry, RegistryBuilder};
pub use state::InstanceState;

// Re-export error types
pub use crate::error::{Error, Result};
