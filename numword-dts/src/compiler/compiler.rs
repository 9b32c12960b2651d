use std::collections::HashMap;

use log::debug;
use numword_core::engine::{ContinuationRule, NumWordConfig};
use numword_core::{create_keycode_map, create_mod_map, Keycode, ModFlags};

use crate::error::DtsError;
use crate::parser::{Cell, CellEntry, DtsFile, Node, NodeOverride, Property, PropertyValue};

/// `compatible` string identifying num-word behavior nodes
pub const NUM_WORD_COMPATIBLE: &str = "zmk,behavior-num-word";

/// Highest layer index a behavior may toggle
pub const MAX_LAYER: i64 = 127;

/// A compiled num-word behavior node
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorDefinition {
    /// Registry slot, assigned in document order
    pub slot: usize,
    pub label: Option<String>,
    pub name: String,
    pub config: NumWordConfig,
}

pub struct Compiler {
    key_map: HashMap<&'static str, Keycode>,
    mod_map: HashMap<&'static str, ModFlags>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self {
            key_map: create_keycode_map(),
            mod_map: create_mod_map(),
        }
    }

    pub fn compile(&self, ast: DtsFile) -> Result<Vec<BehaviorDefinition>, DtsError> {
        let mut nodes = ast.nodes;

        // Apply &label overrides in document order
        for node_override in ast.overrides {
            let target = find_labeled_mut(&mut nodes, &node_override.label)
                .ok_or_else(|| DtsError::UnknownLabel(node_override.label.clone()))?;
            merge_override(target, node_override);
        }

        let mut behavior_nodes = Vec::new();
        collect_compatible(&nodes, NUM_WORD_COMPATIBLE, &mut behavior_nodes);

        behavior_nodes
            .into_iter()
            .enumerate()
            .map(|(slot, node)| -> Result<BehaviorDefinition, DtsError> {
                let config = self.compile_behavior(node)?;
                debug!("Compiled num-word '{}' into slot {}: {:?}", node.name, slot, config);
                Ok(BehaviorDefinition {
                    slot,
                    label: node.label.clone(),
                    name: node.name.clone(),
                    config,
                })
            })
            .collect()
    }

    fn compile_behavior(&self, node: &Node) -> Result<NumWordConfig, DtsError> {
        let mut config = NumWordConfig::new();

        if let Some(prop) = node.property("mods") {
            let entry = single_cell(node, prop)?;
            let value = self.eval_int(node, prop, &entry.cell, entry.line)?;
            let bits = u8::try_from(value)
                .map_err(|_| invalid(node, prop, format!("{} does not fit in 8 bits", value)))?;
            config.mods = ModFlags::from_bits_retain(bits);
        }

        if let Some(prop) = node.property("layers") {
            let entry = single_cell(node, prop)?;
            let value = self.eval_int(node, prop, &entry.cell, entry.line)?;
            config.layer = match value {
                -1 => None,
                0..=MAX_LAYER => Some(value as u8),
                _ => {
                    return Err(invalid(
                        node,
                        prop,
                        format!("layer {} out of range (-1 to {})", value, MAX_LAYER),
                    ))
                }
            };
        }

        config.ignore_alphas = boolean(node, "ignore-alphas")?;
        config.ignore_numbers = boolean(node, "ignore-numbers")?;
        config.ignore_modifiers = boolean(node, "ignore-modifiers")?;

        if let Some(prop) = node.property("continue-list") {
            for value in &prop.values {
                let PropertyValue::Cells(cells) = value else {
                    return Err(invalid(node, prop, "expected a cell list".to_string()));
                };
                for entry in cells {
                    let keycode = self.eval_keycode(node, prop, &entry.cell, entry.line)?;
                    config.continuations.push(ContinuationRule::from(keycode));
                }
            }
        }

        Ok(config)
    }

    /// Evaluate an integer cell: numbers, `MOD_*` constants and `|` groups.
    /// `line` is where the top-level cell starts.
    fn eval_int(
        &self,
        node: &Node,
        prop: &Property,
        cell: &Cell,
        line: usize,
    ) -> Result<i64, DtsError> {
        match cell {
            Cell::Number(n) => Ok(*n),
            Cell::Identifier(name) => self
                .mod_map
                .get(name.as_str())
                .map(|mods| i64::from(mods.bits()))
                .ok_or_else(|| DtsError::UnknownKey {
                    line,
                    name: name.clone(),
                }),
            Cell::Or(terms) => {
                let mut value = 0;
                for term in terms {
                    value |= self.eval_int(node, prop, term, line)?;
                }
                Ok(value)
            }
            Cell::Call(..) => Ok(i64::from(self.eval_keycode(node, prop, cell, line)?.raw())),
            Cell::Reference(label) => Err(invalid(
                node,
                prop,
                format!("unexpected reference &{}", label),
            )),
        }
    }

    /// Evaluate a keycode cell: key names, modifier wrappers and packed integers
    fn eval_keycode(
        &self,
        node: &Node,
        prop: &Property,
        cell: &Cell,
        line: usize,
    ) -> Result<Keycode, DtsError> {
        match cell {
            Cell::Number(n) => u32::try_from(*n)
                .map(Keycode::from_raw)
                .map_err(|_| invalid(node, prop, format!("keycode {} out of range", n))),
            Cell::Identifier(name) => {
                self.key_map
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| DtsError::UnknownKey {
                        line,
                        name: name.clone(),
                    })
            }
            Cell::Call(wrapper, inner) => {
                let mods = ModFlags::from_wrapper(wrapper).ok_or_else(|| DtsError::UnknownKey {
                    line,
                    name: wrapper.clone(),
                })?;
                Ok(self.eval_keycode(node, prop, inner, line)?.with_mods(mods))
            }
            Cell::Or(terms) => {
                let mut raw = 0u32;
                for term in terms {
                    raw |= self.eval_keycode(node, prop, term, line)?.raw();
                }
                Ok(Keycode::from_raw(raw))
            }
            Cell::Reference(label) => Err(invalid(
                node,
                prop,
                format!("unexpected reference &{}", label),
            )),
        }
    }
}

fn invalid(node: &Node, prop: &Property, message: String) -> DtsError {
    DtsError::InvalidProperty {
        node: node.name.clone(),
        property: prop.name.clone(),
        message,
    }
}

/// The only cell of a `<x>` property
fn single_cell<'n>(node: &Node, prop: &'n Property) -> Result<&'n CellEntry, DtsError> {
    match prop.values.as_slice() {
        [PropertyValue::Cells(cells)] if cells.len() == 1 => Ok(&cells[0]),
        _ => Err(invalid(node, prop, "expected exactly one cell".to_string())),
    }
}

/// Value-less properties are true when present
fn boolean(node: &Node, name: &str) -> Result<bool, DtsError> {
    match node.property(name) {
        None => Ok(false),
        Some(prop) if prop.values.is_empty() => Ok(true),
        Some(prop) => Err(invalid(node, prop, "boolean property takes no value".to_string())),
    }
}

fn find_labeled_mut<'n>(nodes: &'n mut [Node], label: &str) -> Option<&'n mut Node> {
    for node in nodes {
        if node.label.as_deref() == Some(label) {
            return Some(node);
        }
        if let Some(found) = find_labeled_mut(&mut node.children, label) {
            return Some(found);
        }
    }
    None
}

fn merge_override(target: &mut Node, node_override: NodeOverride) {
    for prop in node_override.properties {
        match target.properties.iter_mut().find(|p| p.name == prop.name) {
            Some(existing) => *existing = prop,
            None => target.properties.push(prop),
        }
    }
    target.children.extend(node_override.children);
}

fn collect_compatible<'n>(nodes: &'n [Node], compatible: &str, out: &mut Vec<&'n Node>) {
    for node in nodes {
        if node.is_compatible(compatible) {
            out.push(node);
        }
        collect_compatible(&node.children, compatible, out);
    }
}
