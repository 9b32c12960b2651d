// AST nodes for devicetree parsing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DtsFile {
    /// Top-level nodes in document order (usually just the root `/`)
    pub nodes: Vec<Node>,
    /// `&label { ... };` blocks in document order
    pub overrides: Vec<NodeOverride>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub label: Option<String>,
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Node>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeOverride {
    pub label: String,
    pub properties: Vec<Property>,
    pub children: Vec<Node>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    /// Empty for boolean properties
    pub values: Vec<PropertyValue>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Cells(Vec<CellEntry>),
}

/// A top-level cell of a `<...>` list and the line it starts on
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    pub cell: Cell,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(i64),
    Identifier(String),
    Call(String, Box<Cell>),  // LS(MINUS)
    Or(Vec<Cell>),            // (MOD_LSFT|MOD_LCTL)
    Reference(String),        // &kp
}

impl DtsFile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node {
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether any string in `compatible` equals `compatible`
    pub fn is_compatible(&self, compatible: &str) -> bool {
        self.property("compatible").map_or(false, |p| {
            p.values
                .iter()
                .any(|v| matches!(v, PropertyValue::String(s) if s == compatible))
        })
    }
}
