//! astgen emitter: union schema -> Rust enum declaration.

pub mod ownership;

pub use ownership::{field_ownership, fired_rules, owned_field, BoxingRule, Ownership, TypeNames};

use astgen_syntax::schema::{NodeSpec, UnionSchema};

/// Module wiring and imports written above every generated enum.
///
/// `compiler` and `parser` are hand-written sibling modules; `Token` and
/// `Literal` are the leaf types the bootstrap schema refers to.
pub const HEADER: &str = "pub mod compiler;\npub mod parser;\n\nuse super::token::{Token, literal::Literal};\nuse std::fmt::Debug;\n\n";

/// Derives attached to the generated enum.
pub const DERIVES: &str = "#[derive(Clone, Debug)]\n";

const INDENT: &str = "    ";

/// Writes the enum declaration for a list of variants.
pub struct UnionEmitter {
    names: TypeNames,
}

impl UnionEmitter {
    pub fn new(names: TypeNames) -> Self {
        Self { names }
    }

    /// Emit the complete module text for `variants`.
    ///
    /// The result has no trailing newline after the closing brace. An empty
    /// variant list yields an empty, closed enum.
    pub fn emit(&self, variants: &[NodeSpec]) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push_str(DERIVES);
        out.push_str("pub enum ");
        out.push_str(&self.names.base);
        out.push_str(" {\n");
        for spec in variants {
            self.emit_variant(&mut out, spec);
        }
        out.push('}');
        tracing::debug!(
            base = %self.names.base,
            variants = variants.len(),
            bytes = out.len(),
            "emitted union"
        );
        out
    }

    fn emit_variant(&self, out: &mut String, spec: &NodeSpec) {
        out.push_str(INDENT);
        out.push_str(&spec.variant_name);
        // a spec with no fields only arises from hand-built schemas
        if spec.fields.is_empty() {
            out.push_str(",\n");
            return;
        }
        out.push('(');
        for (i, field) in spec.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let owned = owned_field(i, field, &self.names);
            if owned != *field {
                tracing::trace!(variant = %spec.variant_name, position = i, field = %field, "boxed field");
            }
            out.push_str(&owned);
        }
        out.push_str("),\n");
    }
}

/// Emit `variants` as an enum named `base_name`, with `base_name` also
/// serving as the element type.
pub fn emit_variants(base_name: &str, variants: &[NodeSpec]) -> String {
    UnionEmitter::new(TypeNames::new(base_name)).emit(variants)
}

pub fn emit_union(schema: &UnionSchema) -> String {
    emit_variants(&schema.base_name, &schema.variants)
}
