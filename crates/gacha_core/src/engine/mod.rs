// Roll engine: pity/guarantee state machine and weighted rarity sampling

pub mod pool;
pub mod rates;
pub mod roll;
pub mod state;

pub use pool::{eligible_pool, select_operator};
pub use rates::{pull_weights, six_star_rate};
pub use roll::{roll_many, roll_one};
pub use state::{PullResult, PullState};
