use crate::error::{Error, Result};
use crate::host::Host;

use super::config::NumWordConfig;
use super::event::{BehaviorResult, Event, EventResult};
use super::listener::keycode_state_changed_listener;
use super::registry::InstanceRegistry;

/// Dispatch context owning the instance registry and the host capabilities
///
/// Binding presses/releases and bus events are routed through here, one at a
/// time, so no state is shared outside of it.
pub struct NumWordEngine<H: Host> {
    registry: InstanceRegistry,
    host: H,
}

impl<H: Host> NumWordEngine<H> {
    /// Create an engine over an already built registry
    pub fn new(registry: InstanceRegistry, host: H) -> Self {
        Self { registry, host }
    }

    /// Create an engine with one slot per configuration, in order
    pub fn from_configs(configs: impl IntoIterator<Item = NumWordConfig>, host: H) -> Self {
        Self::new(InstanceRegistry::from_configs(configs), host)
    }

    /// Binding press for the behavior in `slot`
    pub fn binding_pressed(&mut self, slot: usize) -> Result<BehaviorResult> {
        let instance = self.registry.get_mut(slot).ok_or(Error::UnknownSlot(slot))?;
        Ok(instance.on_binding_pressed(&mut self.host))
    }

    /// Binding release for the behavior in `slot`
    pub fn binding_released(&mut self, slot: usize) -> Result<BehaviorResult> {
        let instance = self.registry.get_mut(slot).ok_or(Error::UnknownSlot(slot))?;
        Ok(instance.on_binding_released())
    }

    /// Explicitly activate the behavior in `slot`
    pub fn activate(&mut self, slot: usize) -> Result<()> {
        let instance = self.registry.get_mut(slot).ok_or(Error::UnknownSlot(slot))?;
        instance.activate(&mut self.host);
        Ok(())
    }

    /// Explicitly deactivate the behavior in `slot`
    pub fn deactivate(&mut self, slot: usize) -> Result<()> {
        let instance = self.registry.get_mut(slot).ok_or(Error::UnknownSlot(slot))?;
        instance.deactivate(&mut self.host);
        Ok(())
    }

    /// Deliver a bus event to the keycode listener
    pub fn handle_event(&mut self, event: &mut Event) -> EventResult {
        keycode_state_changed_listener(&mut self.registry, &mut self.host, event)
    }

    /// Whether the behavior in `slot` is active; `None` for an empty slot
    pub fn is_active(&self, slot: usize) -> Option<bool> {
        self.registry.get(slot).map(|instance| instance.is_active())
    }

    /// Slots of all active instances
    pub fn active_slots(&self) -> Vec<usize> {
        self.registry
            .iter()
            .filter(|(_, instance)| instance.is_active())
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
