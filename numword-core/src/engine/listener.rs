//! Keycode listener: stamps implicit modifiers and ends num-word on breaking keys

use log::debug;

use super::classify::{is_alpha, is_numeric};
use super::config::NumWordConfig;
use super::event::{Event, EventResult, KeycodeStateChanged};
use super::matcher::ContinuationMatcher;
use super::registry::InstanceRegistry;
use crate::host::{HidState, Host};
use crate::types::HID_USAGE_KEY;

/// Handle one bus event. Always bubbles; the event is only ever modified by
/// OR-ing modifiers into `implicit_modifiers`.
pub fn keycode_state_changed_listener(
    registry: &mut InstanceRegistry,
    host: &mut impl Host,
    event: &mut Event,
) -> EventResult {
    let Some(ev) = event.as_keycode_state_changed_mut() else {
        return EventResult::Bubble;
    };
    if !ev.state {
        return EventResult::Bubble;
    }

    // Each instance is stamped and tested before the next one looks at the event
    for (slot, instance) in registry.iter_mut() {
        if !instance.is_active() {
            continue;
        }

        enhance_usage(instance.config(), ev);

        if breaks_num_word(instance.config(), &*host, ev) {
            debug!(
                "Deactivating num-word in slot {} for 0x{:02X} - 0x{:02X}",
                slot, ev.usage_page, ev.keycode
            );
            instance.deactivate(host);
        }
    }

    EventResult::Bubble
}

/// Apply the instance's modifiers to alphabetic keyboard usages
pub fn enhance_usage(config: &NumWordConfig, ev: &mut KeycodeStateChanged) {
    if ev.usage_page != HID_USAGE_KEY || !is_alpha(ev.keycode) {
        return;
    }

    debug!(
        "Enhancing usage 0x{:02X} with modifiers: 0x{:02X}",
        ev.keycode,
        config.mods.bits()
    );
    ev.implicit_modifiers |= config.mods;
}

/// Whether a press ends num-word for this configuration.
/// Reads the event after stamping.
pub fn breaks_num_word(
    config: &NumWordConfig,
    hid: &impl HidState,
    ev: &KeycodeStateChanged,
) -> bool {
    if is_alpha(ev.keycode) && config.ignore_alphas {
        return false;
    }
    if is_numeric(ev.keycode) && config.ignore_numbers {
        return false;
    }
    if hid.is_mod(ev.usage_page, ev.keycode) && config.ignore_modifiers {
        return false;
    }

    !ContinuationMatcher::new(&config.continuations).matches(
        ev.usage_page,
        ev.keycode,
        ev.implicit_modifiers,
        hid.explicit_mods(),
    )
}
