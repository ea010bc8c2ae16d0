// Banner configuration data structures
use serde::{Deserialize, Serialize};

use super::operator::Rarity;

/// Base draw weights per rarity tier, in percent.
///
/// Only tiers 3~6 ever drop from a banner. The weights need not sum to 100;
/// the draw normalizes against their sum. The rarity-6 entry is the *base*
/// rate before soft-pity escalation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    #[serde(default = "RarityWeights::default_six")]
    pub six: f32,
    #[serde(default = "RarityWeights::default_five")]
    pub five: f32,
    #[serde(default = "RarityWeights::default_four")]
    pub four: f32,
    #[serde(default = "RarityWeights::default_three")]
    pub three: f32,
}

impl RarityWeights {
    fn default_six() -> f32 {
        2.0
    }
    fn default_five() -> f32 {
        8.0
    }
    fn default_four() -> f32 {
        50.0
    }
    fn default_three() -> f32 {
        40.0
    }

    /// Base weight for a tier; tiers 1~2 never drop.
    pub fn for_rarity(&self, rarity: Rarity) -> f32 {
        match rarity {
            Rarity::Six => self.six,
            Rarity::Five => self.five,
            Rarity::Four => self.four,
            Rarity::Three => self.three,
            Rarity::One | Rarity::Two => 0.0,
        }
    }
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            six: Self::default_six(),
            five: Self::default_five(),
            four: Self::default_four(),
            three: Self::default_three(),
        }
    }
}

/// Featured (rate-up) operator id lists per rarity tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedLists {
    #[serde(default)]
    pub six: Vec<String>,
    #[serde(default)]
    pub five: Vec<String>,
    #[serde(default)]
    pub four: Vec<String>,
    #[serde(default)]
    pub three: Vec<String>,
}

impl FeaturedLists {
    pub fn for_rarity(&self, rarity: Rarity) -> &[String] {
        match rarity {
            Rarity::Six => &self.six,
            Rarity::Five => &self.five,
            Rarity::Four => &self.four,
            Rarity::Three => &self.three,
            Rarity::One | Rarity::Two => &[],
        }
    }

    pub fn contains(&self, rarity: Rarity, id: &str) -> bool {
        self.for_rarity(rarity).iter().any(|f| f == id)
    }
}

/// Optional explicit per-rarity operator pools.
///
/// When a pool is declared for a tier it replaces the catalog-derived
/// eligible pool for that tier entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolOverrides {
    #[serde(default)]
    pub six: Option<Vec<String>>,
    #[serde(default)]
    pub five: Option<Vec<String>>,
    #[serde(default)]
    pub four: Option<Vec<String>>,
    #[serde(default)]
    pub three: Option<Vec<String>>,
}

impl PoolOverrides {
    pub fn for_rarity(&self, rarity: Rarity) -> Option<&[String]> {
        match rarity {
            Rarity::Six => self.six.as_deref(),
            Rarity::Five => self.five.as_deref(),
            Rarity::Four => self.four.as_deref(),
            Rarity::Three => self.three.as_deref(),
            Rarity::One | Rarity::Two => None,
        }
    }
}

/// Static banner configuration, immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub name: String,
    /// Base rarity weights; `None` means the standard 2/8/50/40 table.
    #[serde(default)]
    pub rates: Option<RarityWeights>,
    #[serde(default)]
    pub featured: FeaturedLists,
    #[serde(default)]
    pub pools: PoolOverrides,
}

impl Banner {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rates: None,
            featured: FeaturedLists::default(),
            pools: PoolOverrides::default(),
        }
    }

    /// Effective base weights for this banner.
    pub fn weights(&self) -> RarityWeights {
        self.rates.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let banner = Banner::new("standard", "Standard Headhunting");
        let weights = banner.weights();
        assert_eq!(weights.six, 2.0);
        assert_eq!(weights.five, 8.0);
        assert_eq!(weights.four, 50.0);
        assert_eq!(weights.three, 40.0);
    }

    #[test]
    fn test_partial_weight_table_fills_defaults() {
        let banner: Banner = serde_json::from_str(
            r#"{"id": "ev01", "name": "Event", "rates": {"six": 4.0}}"#,
        )
        .unwrap();
        let weights = banner.weights();
        assert_eq!(weights.six, 4.0);
        assert_eq!(weights.five, 8.0);
    }

    #[test]
    fn test_featured_lookup() {
        let mut banner = Banner::new("ev02", "Rate-Up");
        banner.featured.six = vec!["op_a".to_string()];
        assert!(banner.featured.contains(Rarity::Six, "op_a"));
        assert!(!banner.featured.contains(Rarity::Six, "op_b"));
        assert!(banner.featured.for_rarity(Rarity::Five).is_empty());
    }
}
