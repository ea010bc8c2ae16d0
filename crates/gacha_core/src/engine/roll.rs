// Roll operations: one pull, or a batch with state threaded between draws

use rand::Rng;

use crate::config::GachaConfig;
use crate::data::{Banner, OperatorCatalog, Rarity};
use crate::engine::pool::select_operator;
use crate::engine::rates::pull_weights;
use crate::engine::state::{PullResult, PullState};
use crate::error::{GachaError, Result};

/// Execute one pull.
///
/// Pure with respect to state: the caller's `PullState` goes in, the
/// successor state comes out. On error nothing is mutated.
///
/// Order of decisions per pull: hard guarantee check first (it bypasses the
/// weighted draw entirely), then the weighted rarity draw, then operator
/// selection within the drawn tier.
pub fn roll_one(
    banner: &Banner,
    catalog: &OperatorCatalog,
    config: &GachaConfig,
    state: PullState,
    rng: &mut impl Rng,
) -> Result<(PullResult, PullState)> {
    let rarity = if state.guarantee_counter >= config.guarantee_threshold {
        // Hard guarantee: the 10th pull since the last rare forces 5★ or 6★,
        // split by an unweighted coin flip.
        if rng.gen::<f32>() < 0.5 {
            Rarity::Six
        } else {
            Rarity::Five
        }
    } else {
        draw_rarity(banner, config, state.pity_counter, rng)?
    };

    let result = select_operator(banner, catalog, rarity, rng)?;
    Ok((result, state.advance(rarity)))
}

/// Execute `count` sequential pulls, threading state between draws.
///
/// A 6★ drawn mid-batch resets the pity counter for the remaining draws of
/// the same batch. Results are in pull order, earliest first.
///
/// The batch is atomic: any failing pull aborts the whole call with no
/// partial result list, and the caller's pre-batch state stands.
pub fn roll_many(
    banner: &Banner,
    catalog: &OperatorCatalog,
    config: &GachaConfig,
    state: PullState,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(Vec<PullResult>, PullState)> {
    let mut results = Vec::with_capacity(count);
    let mut current = state;

    for _ in 0..count {
        let (result, next) = roll_one(banner, catalog, config, current, rng)?;
        results.push(result);
        current = next;
    }

    Ok((results, current))
}

/// Weighted rarity draw: uniform value in `[0, total)`, then walk the tiers
/// in descending order until the cumulative weight exceeds the draw.
fn draw_rarity(
    banner: &Banner,
    config: &GachaConfig,
    pity_counter: u32,
    rng: &mut impl Rng,
) -> Result<Rarity> {
    let table = pull_weights(banner, config, pity_counter);
    let total: f32 = table.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Err(GachaError::InvalidArgument(format!(
            "banner '{}' rarity weights sum to {}",
            banner.id, total
        )));
    }

    let draw = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for (rarity, weight) in table {
        cumulative += weight;
        if draw < cumulative {
            return Ok(rarity);
        }
    }

    // Unreachable for draw < total; guard against float accumulation drift.
    Ok(Rarity::Three)
}
