//! Plate-number join key
//!
//! Orders are associated to floor-plan tables only by a case-insensitive
//! match between `order.plate_number` and `table.label`. This is a soft
//! join over free text, not a foreign key: a customer typing an
//! unexpected plate number (or an admin renaming a table mid-service)
//! silently misattributes orders. All matching goes through [`PlateKey`]
//! so the rule is defined exactly once.

use serde::{Deserialize, Serialize};

/// Normalized table/plate label: trimmed and uppercased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlateKey(String);

impl PlateKey {
    pub fn new(label: &str) -> Self {
        Self(label.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two raw labels refer to the same plate
    pub fn matches(a: &str, b: &str) -> bool {
        Self::new(a) == Self::new(b)
    }
}

impl std::fmt::Display for PlateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert!(PlateKey::matches("a12", "A12"));
        assert!(PlateKey::matches("Terraza 3", "TERRAZA 3"));
    }

    #[test]
    fn test_trims_whitespace() {
        assert!(PlateKey::matches(" B4 ", "b4"));
        assert_eq!(PlateKey::new("  t1").as_str(), "T1");
    }

    #[test]
    fn test_distinct_labels_do_not_match() {
        assert!(!PlateKey::matches("A1", "A2"));
    }
}
