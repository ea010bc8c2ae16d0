// JSON API layer for host applications (UI shells, FFI bridges)

pub mod gacha_json;

pub use gacha_json::{
    gacha_reset_json, gacha_roll_json, gacha_state_json, load_gacha_data_json, BannerStateRequest,
    BannerStateResponse, GachaService, LoadDataResponse, RollRequest, RollResponse,
};
