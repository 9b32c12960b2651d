//! Keycode representation and name parsing

use std::collections::HashMap;
use std::fmt;

use super::modifiers::ModFlags;
use super::usage::{create_usage_map, HID_USAGE_KEY};
use crate::error::{Error, Result};

/// A key usage together with the modifiers it is wrapped in
///
/// The packed 32-bit form used by keymap sources is
/// `mods << 24 | page << 16 | id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode {
    /// HID usage page
    pub page: u16,
    /// HID usage id within the page
    pub id: u32,
    /// Modifiers wrapped around the usage (e.g. `LS(..)`)
    pub mods: ModFlags,
}

impl Keycode {
    /// Creates a keycode without wrapped modifiers
    pub const fn new(page: u16, id: u32) -> Self {
        Self {
            page,
            id,
            mods: ModFlags::empty(),
        }
    }

    /// Creates a keycode on the keyboard usage page
    pub const fn key(id: u32) -> Self {
        Self::new(HID_USAGE_KEY, id)
    }

    /// Adds wrapped modifiers
    pub fn with_mods(mut self, mods: ModFlags) -> Self {
        self.mods |= mods;
        self
    }

    /// Decodes the packed 32-bit form. Values are taken verbatim, so a bare
    /// usage id without page bits decodes to page 0.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            page: ((raw >> 16) & 0xFF) as u16,
            id: raw & 0xFFFF,
            mods: ModFlags::from_bits_retain((raw >> 24) as u8),
        }
    }

    /// The usage as a key press reports it: a bare id without page bits is a
    /// keyboard usage. Continuation rules keep page 0 as written.
    pub fn key_press_usage(self) -> Self {
        if self.page == 0 {
            Self {
                page: HID_USAGE_KEY,
                ..self
            }
        } else {
            self
        }
    }

    /// Encodes to the packed 32-bit form
    pub fn raw(&self) -> u32 {
        (u32::from(self.mods.bits()) << 24) | ((u32::from(self.page) & 0xFF) << 16) | (self.id & 0xFFFF)
    }

    /// Parse a key string like `A`, `n5`, `LS(MINUS)` or `0x0007002A`
    ///
    /// # Examples
    /// ```
    /// use numword_core::{Keycode, ModFlags};
    ///
    /// let keycode = Keycode::parse("LS(MINUS)").unwrap();
    /// assert_eq!(keycode.id, 0x2D);
    /// assert_eq!(keycode.mods, ModFlags::LSFT);
    /// ```
    pub fn parse(key_str: &str) -> Result<Self> {
        let key = key_str.trim().to_uppercase();
        if key.is_empty() {
            return Err(Error::ParseError("Empty key string".to_string()));
        }

        // Modifier wrapper, e.g. LS(LC(A))
        if let (Some(open), true) = (key.find('('), key.ends_with(')')) {
            let wrapper = &key[..open];
            let mods = ModFlags::from_wrapper(wrapper)
                .ok_or_else(|| Error::ParseError(format!("Unknown modifier function: {}", wrapper)))?;
            let inner = Self::parse(&key[open + 1..key.len() - 1])?;
            return Ok(inner.with_mods(mods));
        }

        if let Some(keycode) = create_keycode_map().get(key.as_str()) {
            return Ok(*keycode);
        }

        parse_raw(&key)
            .map(Self::from_raw)
            .ok_or_else(|| Error::ParseError(format!("Unknown key: {}", key_str.trim())))
    }

    /// Canonical name of the bare usage, if it has one
    pub fn usage_name(&self) -> Option<&'static str> {
        create_usage_map()
            .into_iter()
            .filter(|(_, usage)| *usage == (self.page, self.id))
            .map(|(name, _)| name)
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }
}

fn parse_raw(s: &str) -> Option<u32> {
    match s.strip_prefix("0X") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(name) = self.usage_name() else {
            return write!(f, "0x{:08X}", self.raw());
        };

        let wrappers: Vec<&str> = self
            .mods
            .iter()
            .filter_map(|flag| flag.wrapper_name())
            .collect();
        for wrapper in &wrappers {
            write!(f, "{}(", wrapper)?;
        }
        f.write_str(name)?;
        for _ in &wrappers {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Builds the full key name table, including shifted aliases
pub fn create_keycode_map() -> HashMap<&'static str, Keycode> {
    let mut map: HashMap<&'static str, Keycode> = create_usage_map()
        .into_iter()
        .map(|(name, (page, id))| (name, Keycode::new(page, id)))
        .collect();

    // Shifted aliases
    let shifted = |id: u32| Keycode::key(id).with_mods(ModFlags::LSFT);
    map.insert("EXCL", shifted(0x1E));
    map.insert("AT", shifted(0x1F));
    map.insert("HASH", shifted(0x20));
    map.insert("DLLR", shifted(0x21));
    map.insert("PRCNT", shifted(0x22));
    map.insert("CARET", shifted(0x23));
    map.insert("AMPS", shifted(0x24));
    map.insert("STAR", shifted(0x25));
    map.insert("ASTERISK", shifted(0x25));
    map.insert("LPAR", shifted(0x26));
    map.insert("RPAR", shifted(0x27));
    map.insert("UNDER", shifted(0x2D));
    map.insert("UNDERSCORE", shifted(0x2D));
    map.insert("PLUS", shifted(0x2E));
    map.insert("COLON", shifted(0x33));
    map.insert("DQT", shifted(0x34));
    map.insert("TILDE", shifted(0x35));
    map.insert("LT", shifted(0x36));
    map.insert("GT", shifted(0x37));
    map.insert("QMARK", shifted(0x38));

    map
}
