//! Field ownership rules.
//!
//! A variant field that names the AST type itself must be stored behind a
//! `Box`, otherwise the enum would contain itself and have no finite size.
//! Two independent rules decide this:
//!
//! - [`BoxingRule::LeadingElement`]: the *first* field of a variant, when it
//!   is exactly the element type. Later fields with the same text are left
//!   alone; the rule is positional.
//! - [`BoxingRule::SelfReference`]: any field, at any position, that is
//!   exactly the base type name.
//!
//! Every rule is evaluated for every field. When the element type and the
//! base type coincide (the default) both rules fire on a leading `Expr`;
//! the field is still boxed exactly once.

/// The two sentinel type names the rules compare fields against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    /// Name of the generated enum.
    pub base: String,
    /// Name a single AST node is written as inside the schema.
    pub element: String,
}

impl TypeNames {
    /// Names where the element type is the base type itself.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            element: base.clone(),
            base,
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxingRule {
    LeadingElement,
    SelfReference,
}

impl BoxingRule {
    pub const ALL: [BoxingRule; 2] = [BoxingRule::LeadingElement, BoxingRule::SelfReference];

    /// Whether this rule boxes `field` found at `position` (0-based).
    pub fn fires(self, position: usize, field: &str, names: &TypeNames) -> bool {
        match self {
            BoxingRule::LeadingElement => position == 0 && field == names.element,
            BoxingRule::SelfReference => field == names.base,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Inline,
    Boxed,
}

/// Rules that fire for `field` at `position`, in [`BoxingRule::ALL`] order.
pub fn fired_rules(position: usize, field: &str, names: &TypeNames) -> Vec<BoxingRule> {
    BoxingRule::ALL
        .into_iter()
        .filter(|rule| rule.fires(position, field, names))
        .collect()
}

pub fn field_ownership(position: usize, field: &str, names: &TypeNames) -> Ownership {
    if fired_rules(position, field, names).is_empty() {
        Ownership::Inline
    } else {
        Ownership::Boxed
    }
}

/// The text `field` is emitted as once ownership is applied.
pub fn owned_field(position: usize, field: &str, names: &TypeNames) -> String {
    match field_ownership(position, field, names) {
        Ownership::Inline => field.to_string(),
        Ownership::Boxed => format!("Box<{}>", field),
    }
}
