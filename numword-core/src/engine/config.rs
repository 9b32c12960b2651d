//! Static per-instance configuration

use crate::types::{Keycode, ModFlags};

/// A keystroke allowed to occur without ending num-word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuationRule {
    pub page: u16,
    pub id: u32,
    /// Modifiers that must all be present (implicit or explicit) for the rule to apply
    pub implicit_modifiers: ModFlags,
}

impl ContinuationRule {
    pub fn new(page: u16, id: u32, implicit_modifiers: ModFlags) -> Self {
        Self {
            page,
            id,
            implicit_modifiers,
        }
    }

    /// Check whether an event's usage and available modifiers satisfy this rule.
    /// Extra modifiers beyond the required ones do not prevent a match.
    pub fn matches(&self, usage_page: u16, usage_id: u32, available: ModFlags) -> bool {
        self.page == usage_page
            && self.id == usage_id
            && available.contains(self.implicit_modifiers)
    }
}

impl From<Keycode> for ContinuationRule {
    fn from(keycode: Keycode) -> Self {
        Self::new(keycode.page, keycode.id, keycode.mods)
    }
}

/// Configuration of one num-word instance, fixed for its lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumWordConfig {
    /// Modifiers stamped onto alphabetic keystrokes while active
    pub mods: ModFlags,
    /// Layer toggled together with the instance
    pub layer: Option<u8>,
    pub ignore_alphas: bool,
    pub ignore_numbers: bool,
    pub ignore_modifiers: bool,
    /// Allow-list, evaluated in order
    pub continuations: Vec<ContinuationRule>,
}

impl NumWordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mods(mut self, mods: ModFlags) -> Self {
        self.mods = mods;
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn ignore_alphas(mut self, ignore: bool) -> Self {
        self.ignore_alphas = ignore;
        self
    }

    pub fn ignore_numbers(mut self, ignore: bool) -> Self {
        self.ignore_numbers = ignore;
        self
    }

    pub fn ignore_modifiers(mut self, ignore: bool) -> Self {
        self.ignore_modifiers = ignore;
        self
    }

    pub fn with_continuation(mut self, rule: impl Into<ContinuationRule>) -> Self {
        self.continuations.push(rule.into());
        self
    }
}
