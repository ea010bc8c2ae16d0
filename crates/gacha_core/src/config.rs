// Engine tuning parameters
use serde::{Deserialize, Serialize};

/// Pity/guarantee tuning for the roll engine.
///
/// The rarity-6 *base* rate lives in the banner's weight table; this struct
/// only controls how that rate escalates and when the hard guarantee fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GachaConfig {
    /// Pity counter value at which soft-pity escalation begins.
    #[serde(default = "GachaConfig::default_soft_pity_start")]
    pub soft_pity_start: u32,
    /// Percent added to the rarity-6 rate per pull past the threshold.
    #[serde(default = "GachaConfig::default_soft_pity_step")]
    pub soft_pity_step: f32,
    /// Hard ceiling on the escalated rarity-6 rate, in percent.
    #[serde(default = "GachaConfig::default_six_rate_cap")]
    pub six_rate_cap: f32,
    /// Guarantee counter value at which the next pull is forced to 5★/6★.
    /// 9 means the 10th pull since the last rare is guaranteed.
    #[serde(default = "GachaConfig::default_guarantee_threshold")]
    pub guarantee_threshold: u32,
}

impl GachaConfig {
    fn default_soft_pity_start() -> u32 {
        50
    }
    fn default_soft_pity_step() -> f32 {
        2.0
    }
    fn default_six_rate_cap() -> f32 {
        100.0
    }
    fn default_guarantee_threshold() -> u32 {
        9
    }
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            soft_pity_start: Self::default_soft_pity_start(),
            soft_pity_step: Self::default_soft_pity_step(),
            six_rate_cap: Self::default_six_rate_cap(),
            guarantee_threshold: Self::default_guarantee_threshold(),
        }
    }
}
