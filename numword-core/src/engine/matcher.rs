use log::debug;

use super::config::ContinuationRule;
use crate::types::ModFlags;

/// Decides whether a keystroke is an allow-listed continuation
pub struct ContinuationMatcher<'a> {
    rules: &'a [ContinuationRule],
}

impl<'a> ContinuationMatcher<'a> {
    pub fn new(rules: &'a [ContinuationRule]) -> Self {
        Self { rules }
    }

    /// Find the first rule matching the usage under the combined implicit and
    /// explicit modifiers. An empty allow-list never matches.
    pub fn find_match(
        &self,
        usage_page: u16,
        usage_id: u32,
        implicit_modifiers: ModFlags,
        explicit_modifiers: ModFlags,
    ) -> Option<&'a ContinuationRule> {
        let available = implicit_modifiers | explicit_modifiers;

        self.rules.iter().find(|rule| {
            debug!(
                "Comparing with 0x{:02X} - 0x{:02X} (with implicit mods: 0x{:02X})",
                rule.page,
                rule.id,
                rule.implicit_modifiers.bits()
            );
            rule.matches(usage_page, usage_id, available)
        })
    }

    pub fn matches(
        &self,
        usage_page: u16,
        usage_id: u32,
        implicit_modifiers: ModFlags,
        explicit_modifiers: ModFlags,
    ) -> bool {
        let found = self
            .find_match(usage_page, usage_id, implicit_modifiers, explicit_modifiers)
            .is_some();
        if found {
            debug!(
                "Continuing num-word, found included usage: 0x{:02X} - 0x{:02X}",
                usage_page, usage_id
            );
        }
        found
    }
}
