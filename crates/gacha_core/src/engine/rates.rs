// Soft-pity rate escalation and the per-pull rarity weight table

use crate::config::GachaConfig;
use crate::data::{Banner, Rarity};

/// Effective rarity-6 rate (percent) for the next pull.
///
/// Below the soft-pity threshold the base rate applies exactly. From the
/// threshold on, the rate climbs linearly per additional pull and saturates
/// at the configured cap. The clamp happens here, before the weight table is
/// normalized.
pub fn six_star_rate(base: f32, config: &GachaConfig, pity_counter: u32) -> f32 {
    if pity_counter < config.soft_pity_start {
        return base;
    }
    // Equivalent to `pity - (start - 1)`, but safe for `soft_pity_start: 0`
    // (escalate from the first pull), which deserialized configs can carry.
    let pulls_past = pity_counter.saturating_add(1).saturating_sub(config.soft_pity_start) as f32;
    (base + pulls_past * config.soft_pity_step).min(config.six_rate_cap)
}

/// Rarity weight table for one pull, descending tier order.
///
/// The rarity-6 entry is the escalated rate above; tiers 5/4/3 use the
/// banner's base weights. The table is not normalized; the draw divides by
/// the running total.
pub fn pull_weights(banner: &Banner, config: &GachaConfig, pity_counter: u32) -> [(Rarity, f32); 4] {
    let weights = banner.weights();
    [
        (Rarity::Six, six_star_rate(weights.six, config, pity_counter)),
        (Rarity::Five, weights.five),
        (Rarity::Four, weights.four),
        (Rarity::Three, weights.three),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rate_below_threshold() {
        let config = GachaConfig::default();
        for pity in [0, 1, 25, 49] {
            assert_eq!(six_star_rate(2.0, &config, pity), 2.0);
        }
    }

    #[test]
    fn test_escalation_at_and_past_threshold() {
        let config = GachaConfig::default();
        assert_eq!(six_star_rate(2.0, &config, 50), 4.0);
        assert_eq!(six_star_rate(2.0, &config, 51), 6.0);
        assert_eq!(six_star_rate(2.0, &config, 60), 24.0);
    }

    #[test]
    fn test_zero_threshold_escalates_from_first_pull() {
        // A tuning that starts escalation immediately must not underflow.
        let config = GachaConfig { soft_pity_start: 0, ..GachaConfig::default() };
        assert_eq!(six_star_rate(2.0, &config, 0), 4.0);
        assert_eq!(six_star_rate(2.0, &config, 5), 14.0);
        let config = GachaConfig { soft_pity_start: 1, ..GachaConfig::default() };
        assert_eq!(six_star_rate(2.0, &config, 0), 2.0);
        assert_eq!(six_star_rate(2.0, &config, 1), 4.0);
    }

    #[test]
    fn test_rate_saturates_at_cap() {
        let config = GachaConfig { six_rate_cap: 70.0, ..GachaConfig::default() };
        assert_eq!(six_star_rate(2.0, &config, 83), 70.0);
        assert_eq!(six_star_rate(2.0, &config, 84), 70.0);
        assert_eq!(six_star_rate(2.0, &config, 10_000), 70.0);
    }

    #[test]
    fn test_pull_weights_use_banner_table() {
        let config = GachaConfig::default();
        let banner = Banner::new("standard", "Standard");
        let table = pull_weights(&banner, &config, 0);
        assert_eq!(table[0], (Rarity::Six, 2.0));
        assert_eq!(table[1], (Rarity::Five, 8.0));
        assert_eq!(table[2], (Rarity::Four, 50.0));
        assert_eq!(table[3], (Rarity::Three, 40.0));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the rate is non-decreasing in the pity counter.
            #[test]
            fn prop_rate_monotonic(pity in 0u32..500) {
                let config = GachaConfig::default();
                let here = six_star_rate(2.0, &config, pity);
                let next = six_star_rate(2.0, &config, pity + 1);
                prop_assert!(next >= here);
            }

            /// Property: the rate never exceeds the cap nor drops below base.
            #[test]
            fn prop_rate_bounded(pity in 0u32..100_000, cap in 2.0f32..100.0) {
                let config = GachaConfig { six_rate_cap: cap, ..GachaConfig::default() };
                let rate = six_star_rate(2.0, &config, pity);
                prop_assert!(rate >= 2.0);
                prop_assert!(rate <= cap);
            }
        }
    }
}
