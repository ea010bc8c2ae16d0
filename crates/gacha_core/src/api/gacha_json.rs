// Gacha JSON API Layer
// Connects a host UI to the roll engine through string-in/string-out calls

use std::collections::HashMap;

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::GachaConfig;
use crate::data::GachaData;
use crate::engine::{roll_many, six_star_rate, PullResult, PullState};
use crate::error::{GachaError, Result};

/// Largest batch a single API call will run.
const MAX_BATCH: i64 = 100;

// ========== Request/Response Structures ==========

#[derive(Debug, Serialize, Deserialize)]
pub struct RollRequest {
    pub banner_id: String,
    pub count: i64,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RollResponse {
    pub success: bool,
    pub results: Vec<PullResult>,
    pub state: PullState,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BannerStateRequest {
    pub banner_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BannerStateResponse {
    pub success: bool,
    pub state: PullState,
    /// Effective 6★ rate (percent) for the next pull at the current pity.
    pub next_six_rate: f32,
    pub history: Vec<PullResult>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadDataResponse {
    pub success: bool,
    pub banner_count: usize,
    pub operator_count: usize,
    pub error: Option<String>,
}

// ========== Service ==========

/// Host-side gacha session: loaded data plus per-banner state and history.
///
/// The engine itself is pure; this service is the "caller" the engine
/// contract talks about. It serializes access through the module-level mutex
/// below, satisfying the one-logical-pull-sequence-at-a-time requirement.
#[derive(Debug, Default)]
pub struct GachaService {
    data: GachaData,
    config: GachaConfig,
    states: HashMap<String, PullState>,
    history: HashMap<String, Vec<PullResult>>,
}

impl GachaService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, data: GachaData) {
        log::info!(
            "gacha data loaded: {} banners, {} operators",
            data.banners.len(),
            data.catalog.len()
        );
        self.data = data;
        self.states.clear();
        self.history.clear();
    }

    pub fn roll(&mut self, banner_id: &str, count: usize, seed: u64) -> Result<RollResponse> {
        let banner = self.data.banner(banner_id)?;
        let state = self.states.get(banner_id).copied().unwrap_or_default();

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        // Atomic: state and history are only committed on success.
        let (results, next) =
            roll_many(banner, &self.data.catalog, &self.config, state, count, &mut rng)?;

        self.states.insert(banner_id.to_string(), next);
        self.history.entry(banner_id.to_string()).or_default().extend(results.iter().cloned());

        Ok(RollResponse { success: true, results, state: next, error: None })
    }

    pub fn banner_state(&self, banner_id: &str) -> Result<BannerStateResponse> {
        let banner = self.data.banner(banner_id)?;
        let state = self.states.get(banner_id).copied().unwrap_or_default();
        let history = self.history.get(banner_id).cloned().unwrap_or_default();

        Ok(BannerStateResponse {
            success: true,
            state,
            next_six_rate: six_star_rate(banner.weights().six, &self.config, state.pity_counter),
            history,
            error: None,
        })
    }

    pub fn reset(&mut self, banner_id: &str) -> Result<PullState> {
        // Resetting a banner the data does not know is still an error.
        self.data.banner(banner_id)?;
        self.states.insert(banner_id.to_string(), PullState::default());
        self.history.remove(banner_id);
        Ok(PullState::default())
    }
}

// ========== Global State Management ==========

use once_cell::sync::Lazy;
use std::sync::Mutex;

static GACHA_SERVICE: Lazy<Mutex<GachaService>> = Lazy::new(|| Mutex::new(GachaService::new()));

// ========== Public API Functions ==========

/// Install banner and catalog data, replacing any previous session.
pub fn load_gacha_data_json(data_json: &str) -> String {
    let data = match GachaData::from_json(data_json) {
        Ok(data) => data,
        Err(e) => {
            return to_json(&LoadDataResponse {
                success: false,
                banner_count: 0,
                operator_count: 0,
                error: Some(format!("Invalid data format: {}", e)),
            });
        }
    };

    let response = LoadDataResponse {
        success: true,
        banner_count: data.banners.len(),
        operator_count: data.catalog.len(),
        error: None,
    };

    let mut service = GACHA_SERVICE.lock().expect("GACHA_SERVICE lock poisoned");
    service.load(data);
    to_json(&response)
}

/// Run a batch of pulls on a banner.
pub fn gacha_roll_json(request_json: &str) -> String {
    let request: RollRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return roll_failure(format!("Invalid request format: {}", e)),
    };

    if request.count < 0 || request.count > MAX_BATCH {
        return roll_failure(
            GachaError::InvalidArgument(format!(
                "pull count must be in 0..={}, got {}",
                MAX_BATCH, request.count
            ))
            .to_string(),
        );
    }

    let seed = request.seed.unwrap_or_else(wall_clock_seed);

    let mut service = GACHA_SERVICE.lock().expect("GACHA_SERVICE lock poisoned");
    match service.roll(&request.banner_id, request.count as usize, seed) {
        Ok(response) => to_json(&response),
        Err(e) => {
            // Pool configuration problems are worth a louder signal than a
            // bad call: the banner data itself needs fixing.
            if e.is_data_error() {
                log::error!("gacha data integrity problem on '{}': {}", request.banner_id, e);
            } else {
                log::warn!("gacha roll failed on '{}': {}", request.banner_id, e);
            }
            roll_failure(e.to_string())
        }
    }
}

/// Current counters, next-pull 6★ rate, and pull history for a banner.
pub fn gacha_state_json(request_json: &str) -> String {
    let request: BannerStateRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return state_failure(format!("Invalid request format: {}", e)),
    };

    let service = GACHA_SERVICE.lock().expect("GACHA_SERVICE lock poisoned");
    match service.banner_state(&request.banner_id) {
        Ok(response) => to_json(&response),
        Err(e) => state_failure(e.to_string()),
    }
}

/// Reset a banner's counters to initial and clear its history.
pub fn gacha_reset_json(request_json: &str) -> String {
    let request: BannerStateRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return state_failure(format!("Invalid request format: {}", e)),
    };

    let mut service = GACHA_SERVICE.lock().expect("GACHA_SERVICE lock poisoned");
    match service.reset(&request.banner_id).and_then(|_| service.banner_state(&request.banner_id)) {
        Ok(response) => {
            log::info!("gacha state reset for '{}'", request.banner_id);
            to_json(&response)
        }
        Err(e) => state_failure(e.to_string()),
    }
}

// ========== Helpers ==========

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

fn roll_failure(message: String) -> String {
    to_json(&RollResponse {
        success: false,
        results: vec![],
        state: PullState::default(),
        error: Some(message),
    })
}

fn state_failure(message: String) -> String {
    to_json(&BannerStateResponse {
        success: false,
        state: PullState::default(),
        next_six_rate: 0.0,
        history: vec![],
        error: Some(message),
    })
}

fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
