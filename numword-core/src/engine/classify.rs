//! Usage classification

use crate::types::{
    HID_USAGE_KEY, HID_USAGE_KEY_KEYBOARD_0_AND_RIGHT_PARENTHESIS,
    HID_USAGE_KEY_KEYBOARD_1_AND_EXCLAMATION, HID_USAGE_KEY_KEYBOARD_A,
    HID_USAGE_KEY_KEYBOARD_LEFTCONTROL, HID_USAGE_KEY_KEYBOARD_RIGHT_GUI,
    HID_USAGE_KEY_KEYBOARD_Z,
};

/// `A` through `Z`
pub fn is_alpha(usage_id: u32) -> bool {
    (HID_USAGE_KEY_KEYBOARD_A..=HID_USAGE_KEY_KEYBOARD_Z).contains(&usage_id)
}

/// Digit row, `1` through `0` (the usage range ends at `0`, not `9`)
pub fn is_numeric(usage_id: u32) -> bool {
    (HID_USAGE_KEY_KEYBOARD_1_AND_EXCLAMATION..=HID_USAGE_KEY_KEYBOARD_0_AND_RIGHT_PARENTHESIS)
        .contains(&usage_id)
}

/// Left/right control, shift, alt and gui on the keyboard page
pub fn is_modifier(usage_page: u16, usage_id: u32) -> bool {
    usage_page == HID_USAGE_KEY
        && (HID_USAGE_KEY_KEYBOARD_LEFTCONTROL..=HID_USAGE_KEY_KEYBOARD_RIGHT_GUI).contains(&usage_id)
}
