use std::collections::HashMap;

/// Keyboard/Keypad usage page
pub const HID_USAGE_KEY: u16 = 0x07;
/// Consumer usage page
pub const HID_USAGE_CONSUMER: u16 = 0x0C;

// Keyboard page usage ids
pub const HID_USAGE_KEY_KEYBOARD_A: u32 = 0x04;
pub const HID_USAGE_KEY_KEYBOARD_Z: u32 = 0x1D;
pub const HID_USAGE_KEY_KEYBOARD_1_AND_EXCLAMATION: u32 = 0x1E;
pub const HID_USAGE_KEY_KEYBOARD_0_AND_RIGHT_PARENTHESIS: u32 = 0x27;
pub const HID_USAGE_KEY_KEYBOARD_RETURN_ENTER: u32 = 0x28;
pub const HID_USAGE_KEY_KEYBOARD_ESCAPE: u32 = 0x29;
pub const HID_USAGE_KEY_KEYBOARD_DELETE_BACKSPACE: u32 = 0x2A;
pub const HID_USAGE_KEY_KEYBOARD_TAB: u32 = 0x2B;
pub const HID_USAGE_KEY_KEYBOARD_SPACEBAR: u32 = 0x2C;
pub const HID_USAGE_KEY_KEYBOARD_MINUS_AND_UNDERSCORE: u32 = 0x2D;
pub const HID_USAGE_KEY_KEYBOARD_PERIOD_AND_GREATER_THAN: u32 = 0x37;
pub const HID_USAGE_KEY_KEYBOARD_DELETE_FORWARD: u32 = 0x4C;
pub const HID_USAGE_KEY_KEYBOARD_LEFTCONTROL: u32 = 0xE0;
pub const HID_USAGE_KEY_KEYBOARD_LEFTSHIFT: u32 = 0xE1;
pub const HID_USAGE_KEY_KEYBOARD_RIGHT_GUI: u32 = 0xE7;

/// Builds the key name table: name -> (usage page, usage id)
///
/// Names follow the firmware keymap conventions (`A`, `N5`, `BSPC`, `LSHFT`, ...).
/// Shifted aliases such as `UNDERSCORE` are not here; see
/// [`create_keycode_map`](super::create_keycode_map).
pub fn create_usage_map() -> HashMap<&'static str, (u16, u32)> {
    let mut map = HashMap::new();

    // Letters
    const LETTERS: [&str; 26] = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
        "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    ];
    for (offset, name) in LETTERS.iter().enumerate() {
        map.insert(*name, (HID_USAGE_KEY, HID_USAGE_KEY_KEYBOARD_A + offset as u32));
    }

    // Digit row, 1 through 0
    const DIGITS: [(&str, &str); 10] = [
        ("N1", "NUMBER_1"),
        ("N2", "NUMBER_2"),
        ("N3", "NUMBER_3"),
        ("N4", "NUMBER_4"),
        ("N5", "NUMBER_5"),
        ("N6", "NUMBER_6"),
        ("N7", "NUMBER_7"),
        ("N8", "NUMBER_8"),
        ("N9", "NUMBER_9"),
        ("N0", "NUMBER_0"),
    ];
    for (offset, (short, long)) in DIGITS.iter().enumerate() {
        let usage = (HID_USAGE_KEY, HID_USAGE_KEY_KEYBOARD_1_AND_EXCLAMATION + offset as u32);
        map.insert(*short, usage);
        map.insert(*long, usage);
    }

    // Control keys
    map.insert("RET", (HID_USAGE_KEY, 0x28));
    map.insert("ENTER", (HID_USAGE_KEY, 0x28));
    map.insert("RETURN", (HID_USAGE_KEY, 0x28));
    map.insert("ESC", (HID_USAGE_KEY, 0x29));
    map.insert("ESCAPE", (HID_USAGE_KEY, 0x29));
    map.insert("BSPC", (HID_USAGE_KEY, 0x2A));
    map.insert("BACKSPACE", (HID_USAGE_KEY, 0x2A));
    map.insert("TAB", (HID_USAGE_KEY, 0x2B));
    map.insert("SPACE", (HID_USAGE_KEY, 0x2C));

    // Punctuation
    map.insert("MINUS", (HID_USAGE_KEY, 0x2D));
    map.insert("EQUAL", (HID_USAGE_KEY, 0x2E));
    map.insert("LBKT", (HID_USAGE_KEY, 0x2F));
    map.insert("LEFT_BRACKET", (HID_USAGE_KEY, 0x2F));
    map.insert("RBKT", (HID_USAGE_KEY, 0x30));
    map.insert("RIGHT_BRACKET", (HID_USAGE_KEY, 0x30));
    map.insert("BSLH", (HID_USAGE_KEY, 0x31));
    map.insert("BACKSLASH", (HID_USAGE_KEY, 0x31));
    map.insert("NUHS", (HID_USAGE_KEY, 0x32));
    map.insert("SEMI", (HID_USAGE_KEY, 0x33));
    map.insert("SEMICOLON", (HID_USAGE_KEY, 0x33));
    map.insert("SQT", (HID_USAGE_KEY, 0x34));
    map.insert("SINGLE_QUOTE", (HID_USAGE_KEY, 0x34));
    map.insert("GRAVE", (HID_USAGE_KEY, 0x35));
    map.insert("COMMA", (HID_USAGE_KEY, 0x36));
    map.insert("DOT", (HID_USAGE_KEY, 0x37));
    map.insert("PERIOD", (HID_USAGE_KEY, 0x37));
    map.insert("FSLH", (HID_USAGE_KEY, 0x38));
    map.insert("SLASH", (HID_USAGE_KEY, 0x38));
    map.insert("CAPS", (HID_USAGE_KEY, 0x39));
    map.insert("CAPSLOCK", (HID_USAGE_KEY, 0x39));

    // Function keys
    const FUNCTION_KEYS: [&str; 12] = [
        "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ];
    for (offset, name) in FUNCTION_KEYS.iter().enumerate() {
        map.insert(*name, (HID_USAGE_KEY, 0x3A + offset as u32));
    }

    // Navigation
    map.insert("PSCRN", (HID_USAGE_KEY, 0x46));
    map.insert("SLCK", (HID_USAGE_KEY, 0x47));
    map.insert("PAUSE_BREAK", (HID_USAGE_KEY, 0x48));
    map.insert("INS", (HID_USAGE_KEY, 0x49));
    map.insert("INSERT", (HID_USAGE_KEY, 0x49));
    map.insert("HOME", (HID_USAGE_KEY, 0x4A));
    map.insert("PG_UP", (HID_USAGE_KEY, 0x4B));
    map.insert("DEL", (HID_USAGE_KEY, 0x4C));
    map.insert("DELETE", (HID_USAGE_KEY, 0x4C));
    map.insert("END", (HID_USAGE_KEY, 0x4D));
    map.insert("PG_DN", (HID_USAGE_KEY, 0x4E));
    map.insert("RIGHT", (HID_USAGE_KEY, 0x4F));
    map.insert("LEFT", (HID_USAGE_KEY, 0x50));
    map.insert("DOWN", (HID_USAGE_KEY, 0x51));
    map.insert("UP", (HID_USAGE_KEY, 0x52));

    // Keypad
    map.insert("KP_NUM", (HID_USAGE_KEY, 0x53));
    map.insert("KP_SLASH", (HID_USAGE_KEY, 0x54));
    map.insert("KP_MULTIPLY", (HID_USAGE_KEY, 0x55));
    map.insert("KP_MINUS", (HID_USAGE_KEY, 0x56));
    map.insert("KP_PLUS", (HID_USAGE_KEY, 0x57));
    map.insert("KP_ENTER", (HID_USAGE_KEY, 0x58));
    const KEYPAD_DIGITS: [&str; 10] = [
        "KP_N1", "KP_N2", "KP_N3", "KP_N4", "KP_N5", "KP_N6", "KP_N7", "KP_N8", "KP_N9", "KP_N0",
    ];
    for (offset, name) in KEYPAD_DIGITS.iter().enumerate() {
        map.insert(*name, (HID_USAGE_KEY, 0x59 + offset as u32));
    }
    map.insert("KP_DOT", (HID_USAGE_KEY, 0x63));

    // Modifier keys
    map.insert("LCTRL", (HID_USAGE_KEY, 0xE0));
    map.insert("LSHFT", (HID_USAGE_KEY, 0xE1));
    map.insert("LSHIFT", (HID_USAGE_KEY, 0xE1));
    map.insert("LALT", (HID_USAGE_KEY, 0xE2));
    map.insert("LGUI", (HID_USAGE_KEY, 0xE3));
    map.insert("RCTRL", (HID_USAGE_KEY, 0xE4));
    map.insert("RSHFT", (HID_USAGE_KEY, 0xE5));
    map.insert("RSHIFT", (HID_USAGE_KEY, 0xE5));
    map.insert("RALT", (HID_USAGE_KEY, 0xE6));
    map.insert("RGUI", (HID_USAGE_KEY, 0xE7));

    // Consumer page
    map.insert("C_PP", (HID_USAGE_CONSUMER, 0xCD));
    map.insert("C_MUTE", (HID_USAGE_CONSUMER, 0xE2));
    map.insert("C_VOL_UP", (HID_USAGE_CONSUMER, 0xE9));
    map.insert("C_VOL_DN", (HID_USAGE_CONSUMER, 0xEA));

    map
}
