//! Core types for the influence network.

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;

/// A unique identifier for a variable in the network.
///
/// Ids come from the importing layer (e.g. a CSV export) and are stable
/// across sessions; they are opaque to the engine apart from equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub u32);

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A variable in the sustainability impact network.
///
/// The position of a variable in the variable list defines its matrix
/// row/column; that order must be stable across all computations over the
/// same network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Stable identity of the variable.
    pub id: VariableId,
    /// Human-readable name, e.g. "Use of recycled materials".
    pub name: String,
    /// Category label, e.g. "Packaging material".
    pub category: String,
    /// Free-form classification tags, e.g. sustainability dimensions.
    pub tags: BTreeSet<String>,
}

impl Variable {
    /// Create a variable with no tags.
    pub fn new(id: VariableId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Attach classification tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A directed, signed influence of one variable on another.
///
/// `source == target` is a self-loop; the matrix builder drops such records
/// so the matrix diagonal always stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    /// The influencing variable.
    pub source: VariableId,
    /// The influenced variable.
    pub target: VariableId,
    /// Signed interaction strength.
    pub value: Decimal,
}

impl Interaction {
    /// Create an interaction record.
    pub fn new(source: VariableId, target: VariableId, value: Decimal) -> Self {
        Self {
            source,
            target,
            value,
        }
    }

    /// Check whether this interaction points a variable at itself.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_variable_id_display() {
        assert_eq!(VariableId(45).to_string(), "45");
    }

    #[test]
    fn test_variable_with_tags() {
        let v = Variable::new(VariableId(17), "Consumer perceptions", "Consumer interaction")
            .with_tags(["Social"]);
        assert!(v.tags.contains("Social"));
        assert_eq!(v.tags.len(), 1);
    }

    #[test]
    fn test_self_loop_detection() {
        let looped = Interaction::new(VariableId(3), VariableId(3), dec!(1));
        let normal = Interaction::new(VariableId(3), VariableId(4), dec!(-1));
        assert!(looped.is_self_loop());
        assert!(!normal.is_self_loop());
    }
}
