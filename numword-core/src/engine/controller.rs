//! Activation state machine of a single num-word instance

use log::debug;

use super::config::NumWordConfig;
use super::event::BehaviorResult;
use super::state::InstanceState;
use crate::host::Keymap;

/// One configured num-word behavior and its runtime state
#[derive(Debug, Clone)]
pub struct NumWordInstance {
    config: NumWordConfig,
    state: InstanceState,
}

impl NumWordInstance {
    /// Creates an inactive instance
    pub fn new(config: NumWordConfig) -> Self {
        Self {
            config,
            state: InstanceState::new(),
        }
    }

    pub fn config(&self) -> &NumWordConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Turn num-word on, activating the configured layer first.
    /// Repeated calls activate the layer again.
    pub fn activate(&mut self, keymap: &mut impl Keymap) {
        if let Some(layer) = self.config.layer {
            keymap.layer_activate(layer);
        }
        self.state.active = true;
    }

    /// Turn num-word off, deactivating the configured layer first
    pub fn deactivate(&mut self, keymap: &mut impl Keymap) {
        if let Some(layer) = self.config.layer {
            keymap.layer_deactivate(layer);
        }
        self.state.active = false;
    }

    /// Binding press toggles the instance
    pub fn on_binding_pressed(&mut self, keymap: &mut impl Keymap) -> BehaviorResult {
        if self.state.active {
            debug!("Num-word toggled off");
            self.deactivate(keymap);
        } else {
            debug!("Num-word toggled on");
            self.activate(keymap);
        }
        BehaviorResult::Opaque
    }

    /// Binding release never changes state
    pub fn on_binding_released(&mut self) -> BehaviorResult {
        BehaviorResult::Opaque
    }
}
