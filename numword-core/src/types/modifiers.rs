use bitflags::bitflags;
use std::collections::HashMap;
use std::fmt;

bitflags! {
    /// HID modifier byte, one bit per modifier key.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModFlags: u8 {
        const LCTL = 0b0000_0001;
        const LSFT = 0b0000_0010;
        const LALT = 0b0000_0100;
        const LGUI = 0b0000_1000;
        const RCTL = 0b0001_0000;
        const RSFT = 0b0010_0000;
        const RALT = 0b0100_0000;
        const RGUI = 0b1000_0000;
    }
}

impl ModFlags {
    /// Modifier applied by a keycode wrapper such as `LS(..)` or `RA(..)`.
    pub fn from_wrapper(name: &str) -> Option<Self> {
        match name {
            "LC" => Some(Self::LCTL),
            "LS" => Some(Self::LSFT),
            "LA" => Some(Self::LALT),
            "LG" => Some(Self::LGUI),
            "RC" => Some(Self::RCTL),
            "RS" => Some(Self::RSFT),
            "RA" => Some(Self::RALT),
            "RG" => Some(Self::RGUI),
            _ => None,
        }
    }

    /// Wrapper name for a single modifier bit, the inverse of [`ModFlags::from_wrapper`].
    pub fn wrapper_name(self) -> Option<&'static str> {
        WRAPPERS
            .iter()
            .find(|(_, flag)| *flag == self)
            .map(|(name, _)| *name)
    }
}

const WRAPPERS: [(&str, ModFlags); 8] = [
    ("LC", ModFlags::LCTL),
    ("LS", ModFlags::LSFT),
    ("LA", ModFlags::LALT),
    ("LG", ModFlags::LGUI),
    ("RC", ModFlags::RCTL),
    ("RS", ModFlags::RSFT),
    ("RA", ModFlags::RALT),
    ("RG", ModFlags::RGUI),
];

impl fmt::Display for ModFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join("|"))
    }
}

/// Builds the `MOD_*` constant table used by configuration sources
pub fn create_mod_map() -> HashMap<&'static str, ModFlags> {
    let mut map = HashMap::new();

    map.insert("MOD_LCTL", ModFlags::LCTL);
    map.insert("MOD_LSFT", ModFlags::LSFT);
    map.insert("MOD_LALT", ModFlags::LALT);
    map.insert("MOD_LGUI", ModFlags::LGUI);
    map.insert("MOD_RCTL", ModFlags::RCTL);
    map.insert("MOD_RSFT", ModFlags::RSFT);
    map.insert("MOD_RALT", ModFlags::RALT);
    map.insert("MOD_RGUI", ModFlags::RGUI);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_round_trip() {
        for (name, flag) in WRAPPERS {
            assert_eq!(ModFlags::from_wrapper(name), Some(flag));
            assert_eq!(flag.wrapper_name(), Some(name));
        }
        assert_eq!(ModFlags::from_wrapper("XX"), None);
        assert_eq!((ModFlags::LSFT | ModFlags::LCTL).wrapper_name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ModFlags::empty().to_string(), "none");
        assert_eq!((ModFlags::LCTL | ModFlags::LSFT).to_string(), "LCTL|LSFT");
    }

    #[test]
    fn test_mod_map_bits() {
        let map = create_mod_map();
        assert_eq!(map.len(), 8);
        assert_eq!(map["MOD_LSFT"].bits(), 0x02);
        assert_eq!(map["MOD_RGUI"].bits(), 0x80);
    }
}
