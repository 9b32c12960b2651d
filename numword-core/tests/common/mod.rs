#![allow(dead_code)]

use numword_core::{
    Event, Keycode, KeycodeStateChanged, ModFlags, NumWordConfig, NumWordEngine, VirtualHost,
};

/// Creates an engine over a fresh virtual host
pub fn create_engine(configs: Vec<NumWordConfig>) -> NumWordEngine<VirtualHost> {
    NumWordEngine::from_configs(configs, VirtualHost::new())
}

/// Looks up a key by name, panicking on typos in the test itself
pub fn key(name: &str) -> Keycode {
    Keycode::parse(name).unwrap_or_else(|e| panic!("bad key name {}: {}", name, e))
}

pub fn press_event(name: &str) -> Event {
    KeycodeStateChanged::pressed(key(name)).into()
}

pub fn release_event(name: &str) -> Event {
    KeycodeStateChanged::released(key(name)).into()
}

/// Delivers a press and returns the event as downstream listeners see it
pub fn press(engine: &mut NumWordEngine<VirtualHost>, name: &str) -> KeycodeStateChanged {
    let mut event = press_event(name);
    engine.handle_event(&mut event);
    into_keycode_event(event)
}

/// Delivers a release and returns the event as downstream listeners see it
pub fn release(engine: &mut NumWordEngine<VirtualHost>, name: &str) -> KeycodeStateChanged {
    let mut event = release_event(name);
    engine.handle_event(&mut event);
    into_keycode_event(event)
}

/// Press and release the behavior binding in `slot`
pub fn tap_binding(engine: &mut NumWordEngine<VirtualHost>, slot: usize) {
    engine.binding_pressed(slot).unwrap();
    engine.binding_released(slot).unwrap();
}

pub fn into_keycode_event(event: Event) -> KeycodeStateChanged {
    match event {
        Event::KeycodeStateChanged(ev) => ev,
        other => panic!("Expected keycode event, got {:?}", other),
    }
}

/// Shift-stamping config with nothing ignored and no continuations
pub fn shift_config() -> NumWordConfig {
    NumWordConfig::new().with_mods(ModFlags::LSFT)
}
