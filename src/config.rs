use crate::constants::{COUNTRY_CODE_FRANCE, SYNC_NORMAL, SYNC_SELF_TEST};

/// Frame sync selection.
///
/// Exercise frames carry the normal sync pattern and are meant for the
/// 403 MHz training channel; test frames carry the self-test pattern that
/// satellites ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconMode {
    Exercise,
    Test,
}

impl BeaconMode {
    pub fn sync_pattern(self) -> u16 {
        match self {
            BeaconMode::Exercise => SYNC_NORMAL,
            BeaconMode::Test => SYNC_SELF_TEST,
        }
    }
}

/// Everything one frame build needs. Immutable while the frame is built.
#[derive(Debug, Clone, Copy)]
pub struct BeaconConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// NaN encodes altitude-not-available.
    pub altitude_m: f64,
    /// 26-bit beacon identifier.
    pub beacon_id: u32,
    pub country_code: u16,
    pub mode: BeaconMode,
}

impl BeaconConfig {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64, beacon_id: u32, mode: BeaconMode) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            beacon_id,
            country_code: COUNTRY_CODE_FRANCE,
            mode,
        }
    }
}

/// Application-layer transmission policy.
#[derive(Debug, Clone, Copy)]
pub struct TxConfig {
    pub center_freq_hz: u64,
    pub attenuation_db: f64,
    /// Seconds between repeated transmissions.
    pub interval_secs: u64,
    pub repeat_count: u32,
}
