// Static game data: banner configurations and the operator catalog

pub mod banner;
pub mod operator;

pub use banner::*;
pub use operator::*;

use serde::{Deserialize, Serialize};

use crate::error::{GachaError, Result};

/// Loaded game data: the banner registry plus the operator catalog.
///
/// Loaded once from static JSON assets and treated as immutable for the
/// session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GachaData {
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub catalog: OperatorCatalog,
}

impl GachaData {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Banner lookup by id. Unknown ids are a caller error, not a panic.
    pub fn banner(&self, id: &str) -> Result<&Banner> {
        self.banners
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| GachaError::BannerNotFound { id: id.to_string() })
    }
}
