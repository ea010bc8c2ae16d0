// Eligible pool resolution and operator selection within a drawn rarity

use rand::Rng;

use crate::data::{Banner, Operator, OperatorCatalog, Rarity};
use crate::engine::state::PullResult;
use crate::error::{GachaError, Result};

/// Operators that can drop at the given rarity on this banner.
///
/// A banner pool override, when declared for the tier, replaces the
/// catalog-derived pool entirely. Otherwise limited operators are
/// structurally excluded unless the banner features them; this is a hard
/// exclusion, not a down-weight.
pub fn eligible_pool<'a>(
    banner: &Banner,
    catalog: &'a OperatorCatalog,
    rarity: Rarity,
) -> Vec<&'a Operator> {
    if let Some(ids) = banner.pools.for_rarity(rarity) {
        return ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .filter(|op| op.rarity == rarity)
            .collect();
    }

    catalog
        .of_rarity(rarity)
        .filter(|op| !op.limited || banner.featured.contains(rarity, &op.id))
        .collect()
}

/// Pick one operator of the drawn rarity.
///
/// With a non-empty featured list at this tier, a fair coin splits the draw
/// between the featured subset and its complement; either side is sampled
/// uniformly. An empty sampling pool is a banner-data integrity error and is
/// surfaced as [`GachaError::EmptyPool`] rather than silently defaulted.
///
/// RNG draw order is fixed: the rate-up coin (when applicable) first, then
/// the index into the chosen subset.
pub fn select_operator(
    banner: &Banner,
    catalog: &OperatorCatalog,
    rarity: Rarity,
    rng: &mut impl Rng,
) -> Result<PullResult> {
    let pool = eligible_pool(banner, catalog, rarity);
    let featured_ids = banner.featured.for_rarity(rarity);

    let (chosen, featured) = if featured_ids.is_empty() {
        (pick_uniform(banner, rarity, &pool, rng)?, false)
    } else {
        let (rate_up, off_rate): (Vec<&Operator>, Vec<&Operator>) =
            pool.iter().copied().partition(|op| banner.featured.contains(rarity, &op.id));

        if rng.gen::<f32>() < 0.5 {
            (pick_uniform(banner, rarity, &rate_up, rng)?, true)
        } else {
            (pick_uniform(banner, rarity, &off_rate, rng)?, false)
        }
    };

    Ok(PullResult { operator_id: chosen.id.clone(), rarity, featured })
}

fn pick_uniform<'a>(
    banner: &Banner,
    rarity: Rarity,
    pool: &[&'a Operator],
    rng: &mut impl Rng,
) -> Result<&'a Operator> {
    if pool.is_empty() {
        return Err(GachaError::EmptyPool {
            banner: banner.id.clone(),
            rarity: rarity.as_u8(),
        });
    }
    let idx = rng.gen_range(0..pool.len());
    Ok(pool[idx])
}
