//! Fixed table of num-word instances, addressed by slot

use log::warn;

use super::config::NumWordConfig;
use super::controller::NumWordInstance;
use crate::error::{Error, Result};

/// Instances in slot order. The table cannot change after [`RegistryBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    slots: Vec<Option<NumWordInstance>>,
}

/// Collects registrations during startup
#[derive(Debug)]
pub struct RegistryBuilder {
    slots: Vec<Option<NumWordInstance>>,
}

impl RegistryBuilder {
    /// Reserve `capacity` empty slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Place an instance in its slot
    pub fn register(&mut self, slot: usize, config: NumWordConfig) -> Result<&mut Self> {
        let capacity = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(Error::SlotOutOfRange { slot, capacity })?;
        if entry.is_some() {
            return Err(Error::SlotOccupied(slot));
        }
        *entry = Some(NumWordInstance::new(config));
        Ok(self)
    }

    pub fn build(self) -> InstanceRegistry {
        for (slot, entry) in self.slots.iter().enumerate() {
            if entry.is_none() {
                warn!("Num-word slot {} has no instance registered", slot);
            }
        }
        InstanceRegistry { slots: self.slots }
    }
}

impl InstanceRegistry {
    pub fn builder(capacity: usize) -> RegistryBuilder {
        RegistryBuilder::with_capacity(capacity)
    }

    /// One slot per configuration, in configuration order
    pub fn from_configs(configs: impl IntoIterator<Item = NumWordConfig>) -> Self {
        Self {
            slots: configs
                .into_iter()
                .map(|config| Some(NumWordInstance::new(config)))
                .collect(),
        }
    }

    /// Number of slots, populated or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, slot: usize) -> Option<&NumWordInstance> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut NumWordInstance> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Populated slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &NumWordInstance)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_ref().map(|instance| (slot, instance)))
    }

    /// Populated slots in slot order, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut NumWordInstance)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_mut().map(|instance| (slot, instance)))
    }
}
