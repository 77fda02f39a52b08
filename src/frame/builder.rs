//! Frame assembly and verification.

use tracing::debug;

use crate::bch::{BCH1, BCH2};
use crate::config::BeaconConfig;
use crate::constants::*;
use crate::position::encode_position;

use super::Frame;

/// Assemble a complete long location-protocol frame.
///
/// Field placement follows the T.001 bit map; the two parities are computed
/// over the protected windows as stored, so the result always satisfies
/// [`validate_frame`].
pub fn build_frame(config: &BeaconConfig) -> Frame {
    let position = encode_position(config.latitude_deg, config.longitude_deg, config.altitude_m);

    let mut frame = Frame::new();

    frame.set(PREAMBLE_START, PREAMBLE_LEN, 0x7FFF);
    frame.set(SYNC_START, SYNC_LEN, u64::from(config.mode.sync_pattern()));

    frame.set(FORMAT_FLAG_BIT, 1, 1);
    frame.set(PROTOCOL_FLAG_BIT, 1, 0);
    frame.set(COUNTRY_START, COUNTRY_LEN, u64::from(config.country_code));
    frame.set(PROTOCOL_CODE_START, PROTOCOL_CODE_LEN, u64::from(PROTOCOL_CODE_ELT_DT));
    frame.set(BEACON_ID_START, BEACON_ID_LEN, u64::from(config.beacon_id));
    frame.set(COARSE_POSITION_START, COARSE_POSITION_LEN, u64::from(position.coarse_19bit));

    let pdf1 = frame.get(PDF1_START, PDF1_LEN);
    frame.set(BCH1_START, BCH1_LEN, u64::from(BCH1.parity(pdf1)));

    frame.set(ACTIVATION_START, ACTIVATION_LEN, u64::from(ACTIVATION_MANUAL));
    frame.set(ALTITUDE_START, ALTITUDE_LEN, u64::from(position.altitude_4bit));
    frame.set(FRESHNESS_START, FRESHNESS_LEN, u64::from(FRESHNESS_RECENT));
    frame.set(FINE_OFFSET_START, FINE_OFFSET_LEN, u64::from(position.offset_18bit));

    let pdf2 = frame.get(PDF2_START, PDF2_LEN);
    frame.set(BCH2_START, BCH2_LEN, u64::from(BCH2.parity(pdf2)));

    debug!("frame built: pdf1={pdf1:016X} pdf2={pdf2:07X}");

    frame
}

/// Recompute both parities over the stored data windows and compare them
/// with the parities present in the frame.
pub fn validate_frame(frame: &Frame) -> bool {
    let bch1 = u64::from(BCH1.parity(frame.get(PDF1_START, PDF1_LEN)));
    let bch2 = u64::from(BCH2.parity(frame.get(PDF2_START, PDF2_LEN)));

    bch1 == frame.get(BCH1_START, BCH1_LEN) && bch2 == frame.get(BCH2_START, BCH2_LEN)
}
