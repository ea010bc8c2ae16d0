use thiserror::Error;

/// Engine error taxonomy.
///
/// All variants are non-retryable configuration or caller errors: the engine
/// never retries or self-corrects, it surfaces the problem so the caller can
/// reject the operation instead of returning an inconsistent pull.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GachaError {
    #[error("banner not found: {id}")]
    BannerNotFound { id: String },

    #[error("no eligible rarity-{rarity} operators on banner '{banner}'")]
    EmptyPool { banner: String, rarity: u8 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GachaError {
    /// Whether the error points at banner/catalog data rather than the call.
    pub fn is_data_error(&self) -> bool {
        matches!(self, GachaError::EmptyPool { .. })
    }
}

pub type Result<T> = std::result::Result<T, GachaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_pool_is_a_data_error() {
        let empty = GachaError::EmptyPool { banner: "ev01".to_string(), rarity: 5 };
        assert!(empty.is_data_error());

        let not_found = GachaError::BannerNotFound { id: "missing".to_string() };
        assert!(!not_found.is_data_error());
        assert!(!GachaError::InvalidArgument("count".to_string()).is_data_error());
    }
}
