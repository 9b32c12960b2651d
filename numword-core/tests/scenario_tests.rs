mod common;

use common::*;
use numword_core::host::LayerChange;
use numword_core::{ModFlags, NumWordConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_alpha_is_stamped_and_digit_breaks() {
    let mut engine = create_engine(vec![shift_config().ignore_alphas(true)]);

    tap_binding(&mut engine, 0);
    assert_eq!(engine.is_active(0), Some(true));

    let ev = press(&mut engine, "A");
    assert_eq!(ev.implicit_modifiers, ModFlags::LSFT);
    assert_eq!(engine.is_active(0), Some(true));

    let ev = press(&mut engine, "N5");
    assert_eq!(ev.implicit_modifiers, ModFlags::empty());
    assert_eq!(engine.is_active(0), Some(false));
}

#[test]
fn test_alpha_breaks_unless_ignored() {
    let mut engine = create_engine(vec![shift_config()]);

    tap_binding(&mut engine, 0);
    let ev = press(&mut engine, "A");

    // Stamped before the survival test ends the mode
    assert_eq!(ev.implicit_modifiers, ModFlags::LSFT);
    assert_eq!(engine.is_active(0), Some(false));

    let ev = press(&mut engine, "B");
    assert_eq!(ev.implicit_modifiers, ModFlags::empty());
}

#[test]
fn test_ignored_numbers_keep_mode_alive() {
    let mut engine = create_engine(vec![shift_config().ignore_alphas(true).ignore_numbers(true)]);

    tap_binding(&mut engine, 0);
    press(&mut engine, "A");
    let ev = press(&mut engine, "N5");

    assert_eq!(ev.implicit_modifiers, ModFlags::empty());
    assert_eq!(engine.is_active(0), Some(true));

    // Anything else still breaks
    press(&mut engine, "SPACE");
    assert_eq!(engine.is_active(0), Some(false));
}

#[test]
fn test_continuation_keeps_mode_alive_without_stamping() {
    let config = shift_config().with_continuation(key("BSPC"));
    let mut engine = create_engine(vec![config]);

    tap_binding(&mut engine, 0);
    let ev = press(&mut engine, "BSPC");

    assert_eq!(ev.implicit_modifiers, ModFlags::empty());
    assert_eq!(engine.is_active(0), Some(true));
}

#[test]
fn test_layer_follows_instance() {
    let mut engine = create_engine(vec![NumWordConfig::new().with_layer(3)]);

    engine.activate(0).unwrap();
    assert!(engine.host().is_layer_active(3));
    engine.deactivate(0).unwrap();
    assert!(!engine.host().is_layer_active(3));

    engine.binding_pressed(0).unwrap();
    engine.binding_pressed(0).unwrap();
    assert_eq!(engine.is_active(0), Some(false));
    assert!(!engine.host().is_layer_active(3));
    assert_eq!(
        engine.host().layer_log(),
        &[
            LayerChange::Activated(3),
            LayerChange::Deactivated(3),
            LayerChange::Activated(3),
            LayerChange::Deactivated(3),
        ]
    );
}

#[test]
fn test_auto_deactivation_turns_layer_off() {
    let mut engine = create_engine(vec![NumWordConfig::new().with_layer(2).ignore_numbers(true)]);

    tap_binding(&mut engine, 0);
    press(&mut engine, "N1");
    assert!(engine.host().is_layer_active(2));

    press(&mut engine, "DOT");
    assert_eq!(engine.is_active(0), Some(false));
    assert!(!engine.host().is_layer_active(2));
}

#[test]
fn test_release_events_never_change_state() {
    let configs = vec![
        shift_config(),
        shift_config().ignore_numbers(true).with_layer(1),
        NumWordConfig::new().ignore_alphas(true).ignore_modifiers(true),
    ];

    for config in configs {
        let mut engine = create_engine(vec![config]);

        for name in ["A", "N5", "BSPC", "LSHFT", "C_VOL_UP"] {
            let ev = release(&mut engine, name);
            assert_eq!(engine.is_active(0), Some(false));
            assert_eq!(ev, into_keycode_event(release_event(name)));
        }

        tap_binding(&mut engine, 0);
        for name in ["A", "N5", "BSPC", "LSHFT", "C_VOL_UP"] {
            let ev = release(&mut engine, name);
            assert_eq!(engine.is_active(0), Some(true));
            assert_eq!(ev, into_keycode_event(release_event(name)));
        }
    }
}

#[test]
fn test_toggle_parity() {
    for presses in 1..=6 {
        let mut engine = create_engine(vec![shift_config()]);
        for _ in 0..presses {
            tap_binding(&mut engine, 0);
        }
        assert_eq!(engine.is_active(0), Some(presses % 2 == 1), "{} presses", presses);
    }
}
