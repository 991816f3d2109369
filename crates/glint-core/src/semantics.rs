/// High-level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Text,
    /// Heading text; `level` 1..=6 like `h1`..`h6`.
    Heading { level: u8 },
    Link,
    Region,
    Container,
}

/// Semantics attached to a `View`, used to build the accessibility tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    /// Primary role of this node (what kind of thing it is).
    pub role: Role,
    /// Human-readable label for screen readers. For links this is the name
    /// that is announced instead of the visible text.
    pub label: Option<String>,
    /// Decorative nodes (icons next to text) stay out of the tree.
    pub hidden: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            hidden: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hidden() -> Self {
        Self {
            role: Role::Container,
            label: None,
            hidden: true,
        }
    }
}
