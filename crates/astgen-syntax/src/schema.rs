//! Schema model: the in-memory form of an AST family description.

/// One grammar rule: a variant name and its ordered field types.
///
/// Field types are opaque text. The emitter only ever compares them for
/// equality against the base and element type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub variant_name: String,
    pub fields: Vec<String>,
}

impl NodeSpec {
    pub fn new(variant_name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            variant_name: variant_name.into(),
            fields,
        }
    }
}

/// The full AST family being generated, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionSchema {
    pub base_name: String,
    pub variants: Vec<NodeSpec>,
}

impl UnionSchema {
    pub fn new(base_name: impl Into<String>, variants: Vec<NodeSpec>) -> Self {
        Self {
            base_name: base_name.into(),
            variants,
        }
    }

    /// Directory the generated module lives in: the base name, lowercased.
    pub fn module_dir(&self) -> String {
        self.base_name.to_lowercase()
    }
}

/// True if `s` is a non-empty run of alphanumerics and `_` that does not
/// start with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
