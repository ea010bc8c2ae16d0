// Operator catalog data structures
use serde::{Deserialize, Serialize};

/// Operator rarity (1~6 stars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Rarity {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rarity::One),
            2 => Some(Rarity::Two),
            3 => Some(Rarity::Three),
            4 => Some(Rarity::Four),
            5 => Some(Rarity::Five),
            6 => Some(Rarity::Six),
            _ => None,
        }
    }

    /// Rare-or-above: resets the guarantee counter when drawn.
    pub fn is_rare(self) -> bool {
        self as u8 >= 5
    }

    /// Star string for display/report output.
    pub fn stars(self) -> &'static str {
        match self {
            Rarity::One => "★",
            Rarity::Two => "★★",
            Rarity::Three => "★★★",
            Rarity::Four => "★★★★",
            Rarity::Five => "★★★★★",
            Rarity::Six => "★★★★★★",
        }
    }
}

/// A single operator catalog entry.
///
/// `limited` operators are excluded from standard draws; they can only drop
/// on a banner that explicitly lists them as featured (or in a pool override).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub limited: bool,
}

/// Immutable operator catalog, loaded once per session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorCatalog {
    pub operators: Vec<Operator>,
}

impl OperatorCatalog {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    pub fn get(&self, id: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.id == id)
    }

    /// All catalog entries of the given rarity, regardless of banner rules.
    pub fn of_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Operator> {
        self.operators.iter().filter(move |op| op.rarity == rarity)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_conversions() {
        for value in 1..=6u8 {
            let rarity = Rarity::from_u8(value).unwrap();
            assert_eq!(rarity.as_u8(), value);
        }
        assert!(Rarity::from_u8(0).is_none());
        assert!(Rarity::from_u8(7).is_none());
    }

    #[test]
    fn test_rare_threshold() {
        assert!(!Rarity::Four.is_rare());
        assert!(Rarity::Five.is_rare());
        assert!(Rarity::Six.is_rare());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = OperatorCatalog::new(vec![
            Operator {
                id: "op_001".to_string(),
                name: "Alpha".to_string(),
                rarity: Rarity::Six,
                limited: false,
            },
            Operator {
                id: "op_002".to_string(),
                name: "Beta".to_string(),
                rarity: Rarity::Five,
                limited: true,
            },
        ]);

        assert_eq!(catalog.get("op_002").unwrap().name, "Beta");
        assert!(catalog.get("op_999").is_none());
        assert_eq!(catalog.of_rarity(Rarity::Six).count(), 1);
    }
}
