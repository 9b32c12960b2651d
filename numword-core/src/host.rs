//! Capabilities the num-word engine consumes from the surrounding firmware

use log::debug;

use crate::engine::classify;
use crate::types::ModFlags;

/// Keymap layer control, addressed by layer index
pub trait Keymap {
    fn layer_activate(&mut self, layer: u8);
    fn layer_deactivate(&mut self, layer: u8);
}

/// Read access to the HID modifier state
pub trait HidState {
    /// Modifiers the user is currently holding
    fn explicit_mods(&self) -> ModFlags;

    /// Whether a usage is a modifier key (shift/ctrl/alt/gui)
    fn is_mod(&self, usage_page: u16, usage_id: u32) -> bool {
        classify::is_modifier(usage_page, usage_id)
    }
}

/// Everything the engine needs from its host
pub trait Host: Keymap + HidState {}

impl<T: Keymap + HidState> Host for T {}

/// In-memory host used for simulation and testing
///
/// Layers are kept as a 32-bit mask with layer 0 (the default layer) always on.
#[derive(Debug, Clone)]
pub struct VirtualHost {
    layer_state: u32,
    explicit_mods: ModFlags,
    layer_log: Vec<LayerChange>,
}

/// A recorded call into [`Keymap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerChange {
    Activated(u8),
    Deactivated(u8),
}

impl Default for VirtualHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualHost {
    pub fn new() -> Self {
        Self {
            layer_state: 1,
            explicit_mods: ModFlags::empty(),
            layer_log: Vec::new(),
        }
    }

    /// Check if a layer is active
    pub fn is_layer_active(&self, layer: u8) -> bool {
        layer < 32 && self.layer_state & (1 << layer) != 0
    }

    /// Active layer indices, lowest first
    pub fn active_layers(&self) -> Vec<u8> {
        (0..32).filter(|layer| self.is_layer_active(*layer)).collect()
    }

    /// Set the modifiers reported as physically held
    pub fn set_explicit_mods(&mut self, mods: ModFlags) {
        self.explicit_mods = mods;
    }

    /// Every layer call received so far, oldest first
    pub fn layer_log(&self) -> &[LayerChange] {
        &self.layer_log
    }
}

impl Keymap for VirtualHost {
    fn layer_activate(&mut self, layer: u8) {
        self.layer_log.push(LayerChange::Activated(layer));
        if layer < 32 {
            self.layer_state |= 1 << layer;
        } else {
            debug!("Layer {} outside the virtual layer mask, only logged", layer);
        }
    }

    fn layer_deactivate(&mut self, layer: u8) {
        self.layer_log.push(LayerChange::Deactivated(layer));
        // The default layer cannot be turned off
        if layer > 0 && layer < 32 {
            self.layer_state &= !(1 << layer);
        }
    }
}

impl HidState for VirtualHost {
    fn explicit_mods(&self) -> ModFlags {
        self.explicit_mods
    }
}
