//! Biphase-L (Manchester) chip expansion.

use crate::constants::{CHIPS_PER_BIT, DATA_CHIPS};
use crate::frame::Frame;

const HALF_BIT_CHIPS: usize = CHIPS_PER_BIT / 2;

/// Expand the 144 frame bits into 2304 chips in transmission order.
///
/// A data 0 is low then high (upward mid-bit transition); a data 1 is high
/// then low.
pub fn chips(frame: &Frame) -> Vec<u8> {
    let mut chips = Vec::with_capacity(DATA_CHIPS);
    for bit in frame.as_bits() {
        let (first, second) = if *bit { (1, 0) } else { (0, 1) };
        chips.extend(std::iter::repeat(first).take(HALF_BIT_CHIPS));
        chips.extend(std::iter::repeat(second).take(HALF_BIT_CHIPS));
    }
    chips
}
